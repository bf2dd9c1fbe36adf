use serde::{Deserialize, Serialize};

/// 입방피트 → 입방미터 환산 계수.
pub const CUBIC_METRE_PER_CUBIC_FOOT: f64 = 0.0283168;

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMetre,
    CubicFoot,
}

fn to_cubic_metre(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMetre => value,
        VolumeUnit::CubicFoot => value * CUBIC_METRE_PER_CUBIC_FOOT,
    }
}

fn from_cubic_metre(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMetre => value,
        VolumeUnit::CubicFoot => value / CUBIC_METRE_PER_CUBIC_FOOT,
    }
}

/// 체적을 변환한다. 같은 단위끼리는 값을 그대로 돌려준다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    from_cubic_metre(to_cubic_metre(value, from), to)
}
