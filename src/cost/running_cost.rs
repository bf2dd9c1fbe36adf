use super::bill::BillingPeriod;

/// 기기 운전 비용 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplianceCostInput {
    /// 정격 입력 [kW]
    pub rated_kw: f64,
    /// 하루 운전 시간 [h]
    pub hours_per_day: f64,
    /// 단가 [p/kWh]
    pub unit_rate_pence_per_kwh: f64,
}

/// 운전 비용 결과. 금액 단위는 파운드(£).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCostResult {
    pub hourly_cost: f64,
    pub daily_cost: f64,
    pub weekly_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

/// 정격 kW가 운전 시간 내내 유지된다고 보고 비용을 계산한다.
pub fn estimate_running_cost(input: &ApplianceCostInput) -> RunningCostResult {
    let hourly_cost = input.rated_kw * input.unit_rate_pence_per_kwh / 100.0;
    let daily_cost = hourly_cost * input.hours_per_day;
    RunningCostResult {
        hourly_cost,
        daily_cost,
        weekly_cost: daily_cost * 7.0,
        monthly_cost: daily_cost * BillingPeriod::Monthly.days(),
        yearly_cost: daily_cost * BillingPeriod::Annual.days(),
    }
}
