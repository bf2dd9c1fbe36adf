//! 단발 명령 실행과 결과 표시 테스트.
use gas_rate_toolbox::app::{execute, AppError, Command};
use gas_rate_toolbox::config::Config;
use gas_rate_toolbox::cost::BillingPeriod;
use gas_rate_toolbox::gas::properties::LpgKind;
use gas_rate_toolbox::i18n::Translator;
use gas_rate_toolbox::ui_cli::{imperial_reading, metric_reading, rate_from_text, render_heat_input};

fn tr() -> Translator {
    Translator::new("en-gb")
}

fn s(text: &str) -> String {
    text.to_string()
}

#[test]
fn metric_command_prints_rounded_values() {
    let out = execute(
        &Command::Metric {
            start: s("100"),
            end: s("100.156"),
            seconds: s("180"),
            data_plate_kw: None,
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("35.01 kW"), "{out}");
    assert!(out.contains("31.54 kW"), "{out}");
    assert!(out.contains("3.191 m³/h"), "{out}");
}

#[test]
fn data_plate_check_is_appended_when_given() {
    let out = execute(
        &Command::Metric {
            start: s("100"),
            end: s("100.156"),
            seconds: s("180"),
            data_plate_kw: Some(s("30")),
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("+5.1%"), "{out}");
}

#[test]
fn non_numeric_reading_is_unavailable_not_zero() {
    let out = execute(
        &Command::Metric {
            start: s("abc"),
            end: s("100.156"),
            seconds: s("180"),
            data_plate_kw: None,
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("start reading is not a number"), "{out}");
    assert!(!out.contains("kW"));
}

#[test]
fn imperial_command_uses_configured_dial_when_omitted() {
    let mut cfg = Config::default();
    cfg.default_test_dial_cu_ft = 2.0;
    let out = execute(
        &Command::Imperial {
            dial: None,
            seconds: s("45"),
            data_plate_kw: None,
        },
        &cfg,
        &tr(),
    )
    .unwrap();
    assert!(out.contains("160.00 cu ft/h"), "{out}");
}

#[test]
fn lpg_command_reports_mass_flow() {
    let out = execute(
        &Command::Lpg {
            gas: LpgKind::Butane,
            start: s("0"),
            end: s("0.1"),
            seconds: s("60"),
            data_plate_kw: None,
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("kg/h"), "{out}");
}

#[test]
fn bill_command_prints_total() {
    let out = execute(
        &Command::Bill {
            usage_kwh: s("1200"),
            unit_rate: None,
            standing_charge: None,
            period: Some(BillingPeriod::Monthly),
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("£88.67"), "{out}");
    assert!(out.contains("£4.22"), "{out}");
}

#[test]
fn running_cost_by_preset_name() {
    let out = execute(
        &Command::RunningCost {
            kw: None,
            appliance: Some(s("combi boiler")),
            hours: s("3"),
            unit_rate: None,
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("174.7p"), "{out}");
    assert!(out.contains("£1913.18"), "{out}");
}

#[test]
fn unknown_preset_is_an_error() {
    let err = execute(
        &Command::RunningCost {
            kw: None,
            appliance: Some(s("jacuzzi")),
            hours: s("3"),
            unit_rate: None,
        },
        &Config::default(),
        &tr(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownAppliance(name) if name == "jacuzzi"));
}

#[test]
fn ask_command_answers_from_reference() {
    let out = execute(
        &Command::Ask {
            question: vec![s("reading"), s("too"), s("high")],
        },
        &Config::default(),
        &tr(),
    )
    .unwrap();
    assert!(out.contains("Gas pressure too high"), "{out}");
}

#[test]
fn blank_elapsed_time_is_missing() {
    let result = rate_from_text(metric_reading("1", "2"), "  ", &Config::default().gas);
    assert!(render_heat_input(&tr(), &result).contains("elapsed seconds is required"));
}

#[test]
fn blank_dial_falls_back_to_default() {
    assert_eq!(
        imperial_reading(Some(" "), 1.0).unwrap(),
        imperial_reading(None, 1.0).unwrap()
    );
    assert!(imperial_reading(Some("-2"), 1.0).is_ok());
    assert!(rate_from_text(imperial_reading(Some("-2"), 1.0), "30", &Config::default().gas).is_err());
}
