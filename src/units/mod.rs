//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod volume;

pub use energy::{convert_energy, EnergyUnit, MEGAJOULES_PER_KILOWATT_HOUR};
pub use volume::{convert_volume, VolumeUnit, CUBIC_METRE_PER_CUBIC_FOOT};

/// 시간당 환산에 쓰는 초 단위 계수.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// 표시용 반올림. 소수 `places` 자리까지 반올림한다.
///
/// 계산 중간 단계에서는 쓰지 않는다.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
