use serde::{Deserialize, Serialize};

/// MJ → kWh 환산 제수. 1 kWh = 3.6 MJ.
pub const MEGAJOULES_PER_KILOWATT_HOUR: f64 = 3.6;

/// 에너지 단위. 내부 기준은 메가줄(MJ)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Megajoule,
    KilowattHour,
}

fn to_megajoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Megajoule => value,
        EnergyUnit::KilowattHour => value * MEGAJOULES_PER_KILOWATT_HOUR,
    }
}

fn from_megajoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Megajoule => value,
        EnergyUnit::KilowattHour => value / MEGAJOULES_PER_KILOWATT_HOUR,
    }
}

/// 에너지를 변환한다.
///
/// 시간당 에너지(MJ/h → kWh/h = kW)에도 그대로 쓸 수 있다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    if from == to {
        return value;
    }
    from_megajoule(to_megajoule(value, from), to)
}
