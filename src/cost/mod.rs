//! 요금/운전 비용 추정기.
//!
//! 열입력 엔진과 달리 입력이 비었거나 숫자가 아니면 0으로 보고 계산한다.

pub mod bill;
pub mod running_cost;

pub use bill::{estimate_bill, BillResult, BillingPeriod, TariffInput, DOMESTIC_VAT_RATE};
pub use running_cost::{estimate_running_cost, ApplianceCostInput, RunningCostResult};

/// 비용 입력 문자열을 관대하게 해석한다. 해석할 수 없으면 0.
pub fn parse_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
