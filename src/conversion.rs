//! 측정 방식별 원시 입력을 기준 체적(m³)으로 정규화한다.

use thiserror::Error;

use crate::gas::properties::{GasKind, LpgKind};
use crate::units::{convert_volume, VolumeUnit};

/// 계산 결과를 낼 수 없는 "입력 부족" 상태.
///
/// 오류라기보다 정상적인 빈 결과이며, 화면에는 자리표시자로 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unavailable {
    /// 필수 입력이 비어 있음
    #[error("{0} is required")]
    Missing(&'static str),
    /// 숫자로 해석할 수 없거나 유한하지 않은 값
    #[error("{0} is not a number")]
    NonNumeric(&'static str),
    /// 0 이하의 값
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    /// 종료 검침값이 시작 검침값보다 작음
    #[error("end reading is lower than start reading")]
    ReadingsReversed,
}

/// 측정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementMode {
    Metric,
    Imperial,
    Lpg(LpgKind),
}

impl MeasurementMode {
    /// 이 방식에 적용되는 가스 물성의 키.
    pub fn gas_kind(&self) -> GasKind {
        match self {
            MeasurementMode::Metric | MeasurementMode::Imperial => GasKind::NaturalGas,
            MeasurementMode::Lpg(kind) => kind.gas_kind(),
        }
    }
}

/// 측정 방식별 원시 검침 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawReading {
    /// 미터 검침 시작/종료값 [m³]
    Metric { start: f64, end: f64 },
    /// 테스트 다이얼 1회전 체적 [cu ft]
    Imperial { dial_cu_ft: f64 },
    /// LPG 미터 검침 시작/종료값 [m³]
    Lpg { kind: LpgKind, start: f64, end: f64 },
}

impl RawReading {
    pub fn mode(&self) -> MeasurementMode {
        match self {
            RawReading::Metric { .. } => MeasurementMode::Metric,
            RawReading::Imperial { .. } => MeasurementMode::Imperial,
            RawReading::Lpg { kind, .. } => MeasurementMode::Lpg(*kind),
        }
    }
}

/// 구형 미터에서 흔히 쓰이는 테스트 다이얼 크기 [cu ft] 와 표시 라벨.
pub const TEST_DIAL_OPTIONS: [(f64, &str); 4] = [
    (0.5, "½ cu ft (0.5)"),
    (1.0, "1 cu ft"),
    (2.0, "2 cu ft"),
    (5.0, "5 cu ft"),
];

/// 미터 검침값 차이로 체적을 구한다. 반올림하지 않는다.
pub fn metric_volume(start_reading: f64, end_reading: f64) -> Result<f64, Unavailable> {
    if !start_reading.is_finite() {
        return Err(Unavailable::NonNumeric("start reading"));
    }
    if !end_reading.is_finite() {
        return Err(Unavailable::NonNumeric("end reading"));
    }
    if end_reading < start_reading {
        return Err(Unavailable::ReadingsReversed);
    }
    let volume = end_reading - start_reading;
    if !volume.is_finite() {
        return Err(Unavailable::NonNumeric("volume"));
    }
    if volume <= 0.0 {
        return Err(Unavailable::NonPositive("volume"));
    }
    Ok(volume)
}

/// 테스트 다이얼 크기(cu ft)를 m³로 환산한다.
///
/// [`TEST_DIAL_OPTIONS`] 밖의 값이어도 양수면 받아들인다.
pub fn imperial_volume(test_dial_size_cu_ft: f64) -> Result<f64, Unavailable> {
    if !test_dial_size_cu_ft.is_finite() {
        return Err(Unavailable::NonNumeric("test dial size"));
    }
    if test_dial_size_cu_ft <= 0.0 {
        return Err(Unavailable::NonPositive("test dial size"));
    }
    Ok(convert_volume(
        test_dial_size_cu_ft,
        VolumeUnit::CubicFoot,
        VolumeUnit::CubicMetre,
    ))
}

/// LPG 미터 검침. 산식은 메트릭과 같고 이후 적용되는 물성만 다르다.
pub fn lpg_volume(start_reading: f64, end_reading: f64) -> Result<f64, Unavailable> {
    metric_volume(start_reading, end_reading)
}

/// 측정 방식에 맞춰 기준 체적(m³)을 구한다.
pub fn convert_to_canonical_volume(reading: &RawReading) -> Result<f64, Unavailable> {
    match *reading {
        RawReading::Metric { start, end } => metric_volume(start, end),
        RawReading::Imperial { dial_cu_ft } => imperial_volume(dial_cu_ft),
        RawReading::Lpg { start, end, .. } => lpg_volume(start, end),
    }
}

/// 측정 입력 문자열을 엄격하게 해석한다.
///
/// 빈 문자열은 `Missing`, 숫자가 아니거나 유한하지 않으면 `NonNumeric`.
/// 0으로 대체하지 않는다.
pub fn parse_measurement(text: &str, field: &'static str) -> Result<f64, Unavailable> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Unavailable::Missing(field));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Unavailable::NonNumeric(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_keeps_missing_and_garbage_apart() {
        assert_eq!(parse_measurement("  ", "time"), Err(Unavailable::Missing("time")));
        assert_eq!(parse_measurement("abc", "time"), Err(Unavailable::NonNumeric("time")));
        assert_eq!(parse_measurement("inf", "time"), Err(Unavailable::NonNumeric("time")));
        assert_eq!(parse_measurement(" 120 ", "time"), Ok(120.0));
    }

    #[test]
    fn imperial_modes_use_natural_gas() {
        assert_eq!(MeasurementMode::Imperial.gas_kind(), GasKind::NaturalGas);
        assert_eq!(
            MeasurementMode::Lpg(LpgKind::Butane).gas_kind(),
            GasKind::Butane
        );
    }
}
