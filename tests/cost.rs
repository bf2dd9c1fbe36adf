//! 요금/운전 비용 추정 회귀 테스트.
use approx::assert_relative_eq;
use gas_rate_toolbox::config::TariffDefaults;
use gas_rate_toolbox::cost::{
    estimate_bill, estimate_running_cost, ApplianceCostInput, BillingPeriod, TariffInput,
};
use gas_rate_toolbox::ui_cli::{appliance_cost_from_text, tariff_from_text};
use rstest::rstest;

#[test]
fn monthly_bill_with_uk_average_tariff() {
    let bill = estimate_bill(&TariffInput::for_period(1200.0, 6.24, 31.43, BillingPeriod::Monthly));
    assert_relative_eq!(bill.usage_cost, 74.88, max_relative = 1e-12);
    assert_relative_eq!(bill.standing_cost, 9.567292, max_relative = 1e-9);
    assert_relative_eq!(bill.subtotal, 84.447292, max_relative = 1e-9);
    assert_relative_eq!(bill.vat, 4.2223646, max_relative = 1e-9);
    assert_relative_eq!(bill.total, 88.6696566, max_relative = 1e-9);
    assert_eq!(format!("{:.2}", bill.total), "88.67");
}

#[test]
fn vat_is_five_percent_of_subtotal() {
    let bill = estimate_bill(&TariffInput::for_period(3000.0, 7.1, 29.0, BillingPeriod::Quarterly));
    assert_relative_eq!(bill.vat, bill.subtotal * 0.05, max_relative = 1e-12);
    assert_relative_eq!(bill.total, bill.subtotal * 1.05, max_relative = 1e-12);
}

#[rstest]
#[case(BillingPeriod::Daily, 1.0)]
#[case(BillingPeriod::Monthly, 30.44)]
#[case(BillingPeriod::Quarterly, 91.31)]
#[case(BillingPeriod::Annual, 365.0)]
fn standing_charge_scales_with_period_days(#[case] period: BillingPeriod, #[case] days: f64) {
    let bill = estimate_bill(&TariffInput::for_period(0.0, 6.24, 100.0, period));
    assert_relative_eq!(bill.standing_cost, days, max_relative = 1e-12);
    assert_eq!(bill.usage_cost, 0.0);
}

#[test]
fn combi_boiler_running_cost() {
    let cost = estimate_running_cost(&ApplianceCostInput {
        rated_kw: 28.0,
        hours_per_day: 3.0,
        unit_rate_pence_per_kwh: 6.24,
    });
    assert_relative_eq!(cost.hourly_cost, 1.7472, max_relative = 1e-12);
    assert_relative_eq!(cost.daily_cost, 5.2416, max_relative = 1e-12);
    assert_relative_eq!(cost.weekly_cost, 36.6912, max_relative = 1e-12);
    assert_relative_eq!(cost.monthly_cost, 159.554304, max_relative = 1e-12);
    assert_relative_eq!(cost.yearly_cost, 1913.184, max_relative = 1e-12);
}

#[test]
fn blank_or_garbage_cost_inputs_become_zero() {
    let defaults = TariffDefaults::default();
    let input = tariff_from_text("lots", Some("abc"), Some(""), None, &defaults);
    assert_eq!(input.usage_kwh, 0.0);
    assert_eq!(input.unit_rate_pence_per_kwh, 0.0);
    assert_eq!(input.standing_charge_pence_per_day, 0.0);
    let bill = estimate_bill(&input);
    assert_eq!(bill.total, 0.0);

    let running = appliance_cost_from_text("", "x", Some("?"), &defaults);
    assert_eq!(estimate_running_cost(&running).yearly_cost, 0.0);
}

#[test]
fn omitted_tariff_fields_use_configured_defaults() {
    let defaults = TariffDefaults::default();
    let input = tariff_from_text("100", None, None, None, &defaults);
    assert_eq!(input.unit_rate_pence_per_kwh, 6.24);
    assert_eq!(input.standing_charge_pence_per_day, 31.43);
    assert_eq!(input.billing_period_days, 30.44);

    let running = appliance_cost_from_text("28", "3", None, &defaults);
    assert_eq!(running.unit_rate_pence_per_kwh, 6.24);
}
