use serde::{Deserialize, Serialize};

/// 가정용 에너지 부가세율 (5%).
pub const DOMESTIC_VAT_RATE: f64 = 0.05;

/// 청구 기간. 월/분기 일수는 평균값 근사이며 달력 일수가 아니다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Daily,
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 4] = [
        BillingPeriod::Daily,
        BillingPeriod::Monthly,
        BillingPeriod::Quarterly,
        BillingPeriod::Annual,
    ];

    pub fn days(&self) -> f64 {
        match self {
            BillingPeriod::Daily => 1.0,
            BillingPeriod::Monthly => 30.44,
            BillingPeriod::Quarterly => 91.31,
            BillingPeriod::Annual => 365.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Daily => "daily",
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
            BillingPeriod::Annual => "annual",
        }
    }
}

/// 요금 청구서 추정 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffInput {
    /// 사용량 [kWh]
    pub usage_kwh: f64,
    /// 단가 [p/kWh]
    pub unit_rate_pence_per_kwh: f64,
    /// 기본요금 [p/day]
    pub standing_charge_pence_per_day: f64,
    /// 청구 기간 [day]
    pub billing_period_days: f64,
}

impl TariffInput {
    pub fn for_period(
        usage_kwh: f64,
        unit_rate_pence_per_kwh: f64,
        standing_charge_pence_per_day: f64,
        period: BillingPeriod,
    ) -> Self {
        Self {
            usage_kwh,
            unit_rate_pence_per_kwh,
            standing_charge_pence_per_day,
            billing_period_days: period.days(),
        }
    }
}

/// 청구서 추정 결과. 금액 단위는 파운드(£).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillResult {
    pub usage_cost: f64,
    pub standing_cost: f64,
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
}

/// 사용량·단가·기본요금으로 청구 금액을 추정한다. 펜스는 100으로 나눠 파운드로 바꾼다.
pub fn estimate_bill(input: &TariffInput) -> BillResult {
    let usage_cost = input.usage_kwh * input.unit_rate_pence_per_kwh / 100.0;
    let standing_cost = input.standing_charge_pence_per_day * input.billing_period_days / 100.0;
    let subtotal = usage_cost + standing_cost;
    let vat = subtotal * DOMESTIC_VAT_RATE;
    BillResult {
        usage_cost,
        standing_cost,
        subtotal,
        vat,
        total: subtotal + vat,
    }
}
