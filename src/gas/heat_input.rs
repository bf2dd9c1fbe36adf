//! 시간당 가스 소비 체적으로부터 총/순 열입력(kW)과 유량을 계산한다.
//!
//! 계산 순서는 고정이다. 순서를 바꾸면 부동소수점 결과가 달라져
//! 회귀 값과 어긋날 수 있다.

use crate::conversion::{convert_to_canonical_volume, RawReading, Unavailable};
use crate::gas::properties::{GasProperties, GasTable};
use crate::units::{convert_energy, round_to, EnergyUnit, SECONDS_PER_HOUR};

/// 하나의 가스 레이트 측정. 경과 시간은 스톱워치 커밋이나 직접 입력으로 채운다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSample {
    pub reading: RawReading,
    /// 측정 시간 [s]. 아직 입력되지 않았으면 `None`.
    pub elapsed_seconds: Option<f64>,
}

impl MeasurementSample {
    pub fn new(reading: RawReading) -> Self {
        Self {
            reading,
            elapsed_seconds: None,
        }
    }

    pub fn with_elapsed(reading: RawReading, elapsed_seconds: f64) -> Self {
        Self {
            reading,
            elapsed_seconds: Some(elapsed_seconds),
        }
    }
}

/// 열입력 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatInputResult {
    /// 총 열입력 [kW]
    pub gross_kw: f64,
    /// 순 열입력 [kW]
    pub net_kw: f64,
    /// 보정 체적 기준 유량 [m³/h]
    pub gross_flow_m3_per_hour: f64,
    /// 순 유량 [m³/h]
    pub net_flow_m3_per_hour: f64,
    /// 테스트 다이얼 원시 체적 기준 유량 [cu ft/h]. 임페리얼 측정에서만 채워진다.
    pub flow_cu_ft_per_hour: Option<f64>,
    /// 질량 유량 [kg/h]. 밀도가 있는 가스(LPG)에서만 채워진다.
    pub kg_per_hour: Option<f64>,
}

impl HeatInputResult {
    /// 표시용으로 반올림한 사본. kW·cu ft/h·kg/h는 소수 2자리, m³/h는 3자리.
    pub fn for_display(&self) -> HeatInputResult {
        HeatInputResult {
            gross_kw: round_to(self.gross_kw, 2),
            net_kw: round_to(self.net_kw, 2),
            gross_flow_m3_per_hour: round_to(self.gross_flow_m3_per_hour, 3),
            net_flow_m3_per_hour: round_to(self.net_flow_m3_per_hour, 3),
            flow_cu_ft_per_hour: self.flow_cu_ft_per_hour.map(|v| round_to(v, 2)),
            kg_per_hour: self.kg_per_hour.map(|v| round_to(v, 2)),
        }
    }
}

impl HeatInputResult {
    /// 넘쳐서 무한대가 된 값이 하나라도 있으면 결과를 내지 않는다.
    fn require_finite(self) -> Result<HeatInputResult, Unavailable> {
        let all_finite = [
            self.gross_kw,
            self.net_kw,
            self.gross_flow_m3_per_hour,
            self.net_flow_m3_per_hour,
        ]
        .into_iter()
        .chain(self.flow_cu_ft_per_hour)
        .chain(self.kg_per_hour)
        .all(f64::is_finite);
        if all_finite {
            Ok(self)
        } else {
            Err(Unavailable::NonNumeric("heat input"))
        }
    }
}

fn require_elapsed(elapsed_seconds: f64) -> Result<f64, Unavailable> {
    if !elapsed_seconds.is_finite() {
        return Err(Unavailable::NonNumeric("elapsed seconds"));
    }
    if elapsed_seconds <= 0.0 {
        return Err(Unavailable::NonPositive("elapsed seconds"));
    }
    Ok(elapsed_seconds)
}

/// 체적·시간·가스 물성으로 열입력을 계산한다.
///
/// 1. 보정 체적 = 체적 × 보정 계수
/// 2. 유량 [m³/h] = (보정 체적 / 초) × 3600
/// 3. 총 kW = (유량 × CV) / 3.6
/// 4. 순 kW = 총 kW / 제수
/// 5. 순 유량 = 유량 / 제수
///
/// 밀도가 있으면 kg/h = 유량 × 밀도 도 함께 계산한다.
pub fn compute_heat_input(
    volume_m3: f64,
    elapsed_seconds: f64,
    gas: &GasProperties,
) -> Result<HeatInputResult, Unavailable> {
    let elapsed_seconds = require_elapsed(elapsed_seconds)?;
    if !volume_m3.is_finite() {
        return Err(Unavailable::NonNumeric("volume"));
    }
    if volume_m3 <= 0.0 {
        return Err(Unavailable::NonPositive("volume"));
    }

    let corrected_volume = volume_m3 * gas.correction_factor;
    let flow_m3_per_hour = (corrected_volume / elapsed_seconds) * SECONDS_PER_HOUR;
    // 아주 작은 시간이나 큰 체적이면 유량이 무한대로 넘칠 수 있다
    if !flow_m3_per_hour.is_finite() {
        return Err(Unavailable::NonNumeric("flow rate"));
    }
    let gross_kw = convert_energy(
        flow_m3_per_hour * gas.calorific_value_mj_per_m3,
        EnergyUnit::Megajoule,
        EnergyUnit::KilowattHour,
    );
    let net_kw = gross_kw / gas.gross_to_net_divisor;
    let net_flow_m3_per_hour = flow_m3_per_hour / gas.gross_to_net_divisor;
    let kg_per_hour = gas.density_kg_per_m3.map(|rho| flow_m3_per_hour * rho);

    HeatInputResult {
        gross_kw,
        net_kw,
        gross_flow_m3_per_hour: flow_m3_per_hour,
        net_flow_m3_per_hour,
        flow_cu_ft_per_hour: None,
        kg_per_hour,
    }
    .require_finite()
}

/// 측정 한 건을 끝까지 계산한다: 체적 정규화 → 물성 선택 → 열입력.
///
/// 임페리얼 측정은 cu ft/h 유량을 m³에서 역환산하지 않고 원시 다이얼 체적으로 구한다.
pub fn measure(sample: &MeasurementSample, table: &GasTable) -> Result<HeatInputResult, Unavailable> {
    let elapsed_seconds = sample
        .elapsed_seconds
        .ok_or(Unavailable::Missing("elapsed seconds"))?;
    let elapsed_seconds = require_elapsed(elapsed_seconds)?;
    let volume_m3 = convert_to_canonical_volume(&sample.reading)?;
    let gas = table.get(sample.reading.mode().gas_kind());
    let mut result = compute_heat_input(volume_m3, elapsed_seconds, gas)?;

    if let RawReading::Imperial { dial_cu_ft } = sample.reading {
        result.flow_cu_ft_per_hour = Some((dial_cu_ft / elapsed_seconds) * SECONDS_PER_HOUR);
    }
    result.require_finite()
}
