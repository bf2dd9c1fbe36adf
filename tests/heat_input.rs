//! 가스 레이트 열입력 회귀 테스트.
use approx::assert_relative_eq;
use gas_rate_toolbox::conversion::{RawReading, Unavailable};
use gas_rate_toolbox::gas::heat_input::{compute_heat_input, measure, MeasurementSample};
use gas_rate_toolbox::gas::properties::{GasProperties, GasTable, LpgKind};
use rstest::rstest;

fn metric(start: f64, end: f64, seconds: f64) -> MeasurementSample {
    MeasurementSample::with_elapsed(RawReading::Metric { start, end }, seconds)
}

#[test]
fn metric_worked_example() {
    // 0.156 m³ over 3 minutes ≈ 35 kW gross
    let r = measure(&metric(100.0, 100.156, 180.0), &GasTable::default()).unwrap();
    assert_relative_eq!(r.gross_flow_m3_per_hour, 3.1906368, max_relative = 1e-6);
    assert_relative_eq!(r.gross_kw, 35.008376, max_relative = 1e-6);
    assert_relative_eq!(r.net_kw, 31.539078, max_relative = 1e-6);
    let shown = r.for_display();
    assert_eq!(shown.gross_kw, 35.01);
    assert_eq!(shown.net_kw, 31.54);
    assert_eq!(r.flow_cu_ft_per_hour, None);
    assert_eq!(r.kg_per_hour, None);
}

#[test]
fn large_meter_readings_give_the_same_rate() {
    let r = measure(&metric(12345.678, 12345.834, 180.0), &GasTable::default()).unwrap();
    assert_relative_eq!(r.gross_kw, 35.0, epsilon = 0.05);
    assert_relative_eq!(r.net_kw, 31.5, epsilon = 0.05);
}

#[test]
fn net_is_gross_over_divisor() {
    let r = measure(&metric(0.0, 0.5, 300.0), &GasTable::default()).unwrap();
    assert_relative_eq!(r.net_kw, r.gross_kw / 1.11, max_relative = 1e-12);
    assert_relative_eq!(
        r.net_flow_m3_per_hour,
        r.gross_flow_m3_per_hour / 1.11,
        max_relative = 1e-12
    );
}

#[test]
fn imperial_dial_matches_equivalent_metric_volume() {
    let table = GasTable::default();
    let imperial = measure(
        &MeasurementSample::with_elapsed(RawReading::Imperial { dial_cu_ft: 1.0 }, 40.0),
        &table,
    )
    .unwrap();
    let metric = measure(&metric(0.0, 0.0283168, 40.0), &table).unwrap();
    assert_relative_eq!(imperial.gross_kw, metric.gross_kw, max_relative = 1e-9);
    assert_relative_eq!(imperial.flow_cu_ft_per_hour.unwrap(), 90.0, max_relative = 1e-12);
}

#[test]
fn longer_time_means_lower_input() {
    let table = GasTable::default();
    let fast = measure(&metric(10.0, 10.2, 100.0), &table).unwrap();
    let slow = measure(&metric(10.0, 10.2, 200.0), &table).unwrap();
    assert!(slow.gross_kw < fast.gross_kw);
    assert_relative_eq!(fast.gross_kw, slow.gross_kw * 2.0, max_relative = 1e-12);
}

#[rstest]
#[case(30.0)]
#[case(120.0)]
#[case(600.0)]
fn more_volume_in_the_same_time_means_higher_input(#[case] seconds: f64) {
    let table = GasTable::default();
    let gross: Vec<f64> = [0.01, 0.05, 0.156, 0.5, 2.0]
        .into_iter()
        .map(|volume| measure(&metric(1000.0, 1000.0 + volume, seconds), &table).unwrap().gross_kw)
        .collect();
    assert!(gross.windows(2).all(|w| w[0] < w[1]), "{gross:?}");
}

#[test]
fn overflowing_flow_is_unavailable() {
    assert_eq!(
        compute_heat_input(1.0, 1e-310, &GasProperties::NATURAL_GAS),
        Err(Unavailable::NonNumeric("flow rate"))
    );
}

#[test]
fn lpg_scales_with_calorific_value_and_reports_mass_flow() {
    let table = GasTable::default();
    let natural = measure(&metric(0.0, 0.1, 60.0), &table).unwrap();
    let propane = measure(
        &MeasurementSample::with_elapsed(
            RawReading::Lpg {
                kind: LpgKind::Propane,
                start: 0.0,
                end: 0.1,
            },
            60.0,
        ),
        &table,
    )
    .unwrap();
    let butane = measure(
        &MeasurementSample::with_elapsed(
            RawReading::Lpg {
                kind: LpgKind::Butane,
                start: 0.0,
                end: 0.1,
            },
            60.0,
        ),
        &table,
    )
    .unwrap();
    assert_relative_eq!(propane.gross_kw / natural.gross_kw, 93.2 / 39.5, max_relative = 1e-12);
    assert_relative_eq!(butane.gross_kw / natural.gross_kw, 121.8 / 39.5, max_relative = 1e-12);
    assert_relative_eq!(
        propane.kg_per_hour.unwrap(),
        propane.gross_flow_m3_per_hour * 1.882,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        butane.kg_per_hour.unwrap(),
        butane.gross_flow_m3_per_hour * 2.489,
        max_relative = 1e-12
    );
}

#[test]
fn injected_table_changes_result() {
    let mut table = GasTable::default();
    table.natural_gas = GasProperties {
        calorific_value_mj_per_m3: 36.0,
        ..GasProperties::NATURAL_GAS
    };
    let r = measure(&metric(0.0, 1.0, 3600.0), &table).unwrap();
    // 1 m³/h × 1.02264 × 36 / 3.6
    assert_relative_eq!(r.gross_kw, 10.2264, max_relative = 1e-12);
}

#[rstest]
#[case(metric(5.0, 5.0, 120.0), Unavailable::NonPositive("volume"))]
#[case(metric(5.0, 4.9, 120.0), Unavailable::ReadingsReversed)]
#[case(metric(5.0, 5.1, 0.0), Unavailable::NonPositive("elapsed seconds"))]
#[case(metric(5.0, 5.1, -3.0), Unavailable::NonPositive("elapsed seconds"))]
#[case(metric(5.0, 5.1, f64::NAN), Unavailable::NonNumeric("elapsed seconds"))]
#[case(
    MeasurementSample::with_elapsed(RawReading::Imperial { dial_cu_ft: 0.0 }, 30.0),
    Unavailable::NonPositive("test dial size")
)]
#[case(metric(-1e308, 1e308, 120.0), Unavailable::NonNumeric("volume"))]
#[case(
    MeasurementSample::with_elapsed(
        RawReading::Lpg { kind: LpgKind::Propane, start: -1e308, end: 1e308 },
        120.0
    ),
    Unavailable::NonNumeric("volume")
)]
#[case(metric(0.0, 1.0, 1e-310), Unavailable::NonNumeric("flow rate"))]
#[case(metric(0.0, 1e307, 3600.0), Unavailable::NonNumeric("heat input"))]
#[case(
    MeasurementSample::new(RawReading::Metric { start: 1.0, end: 2.0 }),
    Unavailable::Missing("elapsed seconds")
)]
fn invalid_samples_are_unavailable(#[case] sample: MeasurementSample, #[case] expected: Unavailable) {
    assert_eq!(measure(&sample, &GasTable::default()), Err(expected));
}
