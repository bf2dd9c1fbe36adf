use std::io::{self, Write};
use std::time::Instant;

use crate::app::{AppError, Session};
use crate::assistant::{Assistant, KeywordAssistant, ReferenceLibrary};
use crate::config::{Config, TariffDefaults};
use crate::conversion::{parse_measurement, RawReading, Unavailable, TEST_DIAL_OPTIONS};
use crate::cost::{
    estimate_bill, estimate_running_cost, parse_or_zero, ApplianceCostInput, BillResult,
    BillingPeriod, RunningCostResult, TariffInput,
};
use crate::gas::appliance::{
    check_against_data_plate, DataPlateCheck, DataPlateVerdict, APPLIANCE_PRESETS,
};
use crate::gas::heat_input::{measure, HeatInputResult, MeasurementSample};
use crate::gas::properties::{GasTable, LpgKind};
use crate::i18n::{keys, Translator};
use crate::stopwatch::{format_mm_ss, Stopwatch, StopwatchPhase};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    MetricRate,
    ImperialRate,
    LpgRate,
    Bill,
    RunningCost,
    Stopwatch,
    Reference,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_METRIC,
        keys::MAIN_MENU_IMPERIAL,
        keys::MAIN_MENU_LPG,
        keys::MAIN_MENU_BILL,
        keys::MAIN_MENU_RUNNING_COST,
        keys::MAIN_MENU_STOPWATCH,
        keys::MAIN_MENU_REFERENCE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::MetricRate),
            "2" => return Ok(MenuChoice::ImperialRate),
            "3" => return Ok(MenuChoice::LpgRate),
            "4" => return Ok(MenuChoice::Bill),
            "5" => return Ok(MenuChoice::RunningCost),
            "6" => return Ok(MenuChoice::Stopwatch),
            "7" => return Ok(MenuChoice::Reference),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메트릭 미터 검침 문자열을 해석한다.
pub fn metric_reading(start: &str, end: &str) -> Result<RawReading, Unavailable> {
    Ok(RawReading::Metric {
        start: parse_measurement(start, "start reading")?,
        end: parse_measurement(end, "end reading")?,
    })
}

/// LPG 미터 검침 문자열을 해석한다.
pub fn lpg_reading(kind: LpgKind, start: &str, end: &str) -> Result<RawReading, Unavailable> {
    Ok(RawReading::Lpg {
        kind,
        start: parse_measurement(start, "start reading")?,
        end: parse_measurement(end, "end reading")?,
    })
}

/// 테스트 다이얼 크기 문자열을 해석한다. 비어 있으면 기본값을 쓴다.
pub fn imperial_reading(dial: Option<&str>, default_dial_cu_ft: f64) -> Result<RawReading, Unavailable> {
    let dial_cu_ft = match dial.map(str::trim) {
        None | Some("") => default_dial_cu_ft,
        Some(text) => parse_measurement(text, "test dial size")?,
    };
    Ok(RawReading::Imperial { dial_cu_ft })
}

/// 해석된 검침과 측정 시간 문자열로 열입력을 계산한다.
pub fn rate_from_text(
    reading: Result<RawReading, Unavailable>,
    seconds: &str,
    table: &GasTable,
) -> Result<HeatInputResult, Unavailable> {
    let mut sample = MeasurementSample::new(reading?);
    sample.elapsed_seconds = Some(parse_measurement(seconds, "elapsed seconds")?);
    measure(&sample, table)
}

/// 요금 입력 문자열을 해석한다. 값이 없으면(None) 기본값, 숫자가 아니면 0.
pub fn tariff_from_text(
    usage_kwh: &str,
    unit_rate: Option<&str>,
    standing_charge: Option<&str>,
    period: Option<BillingPeriod>,
    defaults: &TariffDefaults,
) -> TariffInput {
    TariffInput::for_period(
        parse_or_zero(usage_kwh),
        unit_rate.map_or(defaults.unit_rate_pence_per_kwh, parse_or_zero),
        standing_charge.map_or(defaults.standing_charge_pence_per_day, parse_or_zero),
        period.unwrap_or(defaults.billing_period),
    )
}

/// 운전 비용 입력 문자열을 해석한다. 단가가 없으면 기본값, 숫자가 아니면 0.
pub fn appliance_cost_from_text(
    rated_kw: &str,
    hours_per_day: &str,
    unit_rate: Option<&str>,
    defaults: &TariffDefaults,
) -> ApplianceCostInput {
    ApplianceCostInput {
        rated_kw: parse_or_zero(rated_kw),
        hours_per_day: parse_or_zero(hours_per_day),
        unit_rate_pence_per_kwh: unit_rate.map_or(defaults.unit_rate_pence_per_kwh, parse_or_zero),
    }
}

/// 열입력 결과를 표시용 문자열로 만든다. 계산 불가면 자리표시자만 보여준다.
pub fn render_heat_input(tr: &Translator, result: &Result<HeatInputResult, Unavailable>) -> String {
    let r = match result {
        Ok(r) => r.for_display(),
        Err(reason) => return format!("{} ({reason})", tr.t(keys::UNAVAILABLE)),
    };
    let mut lines = vec![
        format!("{} {:.2} kW", tr.t(keys::RESULT_GROSS_KW), r.gross_kw),
        format!("{} {:.2} kW", tr.t(keys::RESULT_NET_KW), r.net_kw),
        format!("{} {:.3} m³/h", tr.t(keys::RESULT_GROSS_FLOW), r.gross_flow_m3_per_hour),
        format!("{} {:.3} m³/h", tr.t(keys::RESULT_NET_FLOW), r.net_flow_m3_per_hour),
    ];
    if let Some(cu_ft) = r.flow_cu_ft_per_hour {
        lines.push(format!("{} {:.2} cu ft/h", tr.t(keys::RESULT_FLOW_CU_FT), cu_ft));
    }
    if let Some(kg) = r.kg_per_hour {
        lines.push(format!("{} {:.2} kg/h", tr.t(keys::RESULT_KG_PER_HOUR), kg));
    }
    lines.join("\n")
}

pub fn render_data_plate(tr: &Translator, check: &DataPlateCheck) -> String {
    let key = match check.verdict {
        DataPlateVerdict::WithinTolerance => keys::RESULT_DATA_PLATE_OK,
        DataPlateVerdict::High => keys::RESULT_DATA_PLATE_HIGH,
        DataPlateVerdict::Low => keys::RESULT_DATA_PLATE_LOW,
    };
    format!("{} {:+.1}%", tr.t(key), check.deviation_pct)
}

pub fn render_bill(tr: &Translator, bill: &BillResult) -> String {
    [
        format!("{} £{:.2}", tr.t(keys::RESULT_USAGE_COST), bill.usage_cost),
        format!("{} £{:.2}", tr.t(keys::RESULT_STANDING_COST), bill.standing_cost),
        format!("{} £{:.2}", tr.t(keys::RESULT_VAT), bill.vat),
        format!("{} £{:.2}", tr.t(keys::RESULT_TOTAL), bill.total),
    ]
    .join("\n")
}

pub fn render_running_cost(tr: &Translator, cost: &RunningCostResult) -> String {
    [
        format!("{} {:.1}p", tr.t(keys::RESULT_HOURLY), cost.hourly_cost * 100.0),
        format!("{} £{:.2}", tr.t(keys::RESULT_DAILY), cost.daily_cost),
        format!("{} £{:.2}", tr.t(keys::RESULT_WEEKLY), cost.weekly_cost),
        format!("{} £{:.2}", tr.t(keys::RESULT_MONTHLY), cost.monthly_cost),
        format!("{} £{:.2}", tr.t(keys::RESULT_YEARLY), cost.yearly_cost),
    ]
    .join("\n")
}

/// 메트릭 가스 레이트 메뉴를 처리한다.
pub fn handle_metric(tr: &Translator, cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::METRIC_HEADING));
    let start = read_line(tr.t(keys::PROMPT_START_READING))?;
    let end = read_line(tr.t(keys::PROMPT_END_READING))?;
    finish_rate(tr, cfg, session, metric_reading(&start, &end))
}

/// 임페리얼 테스트 다이얼 메뉴를 처리한다.
pub fn handle_imperial(tr: &Translator, cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::IMPERIAL_HEADING));
    for (i, (_, label)) in TEST_DIAL_OPTIONS.iter().enumerate() {
        println!("{}) {label}", i + 1);
    }
    let sel = read_line(tr.t(keys::PROMPT_TEST_DIAL))?;
    let dial = pick_test_dial(&sel);
    let reading = imperial_reading(Some(&dial), cfg.default_test_dial_cu_ft);
    finish_rate(tr, cfg, session, reading)
}

/// LPG 가스 레이트 메뉴를 처리한다.
pub fn handle_lpg(tr: &Translator, cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LPG_HEADING));
    println!("{}", tr.t(keys::LPG_OPTIONS));
    let kind = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "2" => LpgKind::Butane,
        _ => LpgKind::Propane,
    };
    let start = read_line(tr.t(keys::PROMPT_START_READING))?;
    let end = read_line(tr.t(keys::PROMPT_END_READING))?;
    finish_rate(tr, cfg, session, lpg_reading(kind, &start, &end))
}

fn finish_rate(
    tr: &Translator,
    cfg: &Config,
    session: &mut Session,
    reading: Result<RawReading, Unavailable>,
) -> Result<(), AppError> {
    let reading = match reading {
        Ok(reading) => reading,
        Err(reason) => {
            tracing::debug!(%reason, "reading unavailable");
            println!("{}", render_heat_input(tr, &Err(reason)));
            return Ok(());
        }
    };
    let mut sample = MeasurementSample::new(reading);
    let time = read_line(tr.t(keys::PROMPT_ELAPSED))?;
    if time.trim().eq_ignore_ascii_case("t") {
        run_stopwatch(tr, &mut session.stopwatch, Some(&mut sample))?;
    } else {
        match parse_measurement(&time, "elapsed seconds") {
            Ok(seconds) => sample.elapsed_seconds = Some(seconds),
            Err(reason) => {
                tracing::debug!(%reason, "elapsed time unavailable");
                println!("{}", render_heat_input(tr, &Err(reason)));
                return Ok(());
            }
        }
    }

    let result = measure(&sample, &cfg.gas);
    match &result {
        Ok(r) => tracing::debug!(mode = ?sample.reading.mode(), gross_kw = r.gross_kw, "heat input computed"),
        Err(reason) => tracing::debug!(mode = ?sample.reading.mode(), %reason, "heat input unavailable"),
    }
    println!("{}", render_heat_input(tr, &result));

    if let Ok(r) = result {
        let plate = read_line(tr.t(keys::PROMPT_DATA_PLATE))?;
        if let Ok(rated) = parse_measurement(&plate, "data plate kW") {
            if let Some(check) = check_against_data_plate(r.net_kw, rated) {
                println!("{}", render_data_plate(tr, &check));
            }
        }
    }
    Ok(())
}

/// 스톱워치 메뉴를 처리한다. `sample`이 있으면 커밋 명령을 제공한다.
pub fn run_stopwatch(
    tr: &Translator,
    stopwatch: &mut Stopwatch,
    mut sample: Option<&mut MeasurementSample>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::STOPWATCH_HEADING));
    let commands = if sample.is_some() {
        keys::STOPWATCH_COMMANDS_COMMIT
    } else {
        keys::STOPWATCH_COMMANDS
    };
    loop {
        stopwatch.poll(Instant::now());
        let phase = match stopwatch.phase() {
            StopwatchPhase::Idle => tr.t(keys::STOPWATCH_IDLE),
            StopwatchPhase::Running => tr.t(keys::STOPWATCH_RUNNING),
            StopwatchPhase::Stopped => tr.t(keys::STOPWATCH_STOPPED),
        };
        println!("[{}] {}", format_mm_ss(stopwatch.elapsed_seconds()), phase);
        println!("{}", tr.t(commands));
        let cmd = read_line(tr.t(keys::PROMPT_SELECT))?;
        let now = Instant::now();
        match cmd.trim().to_lowercase().as_str() {
            "s" => stopwatch.start(now),
            "x" => stopwatch.stop(now),
            "r" => stopwatch.reset(),
            "c" => {
                if let Some(sample) = sample.as_deref_mut() {
                    stopwatch.poll(now);
                    let seconds = stopwatch.commit(sample);
                    tracing::debug!(seconds, "stopwatch committed");
                    println!("{} {seconds} s", tr.t(keys::STOPWATCH_COMMITTED));
                } else {
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                }
            }
            "q" => return Ok(()),
            "" => {}
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 요금 청구서 메뉴를 처리한다.
pub fn handle_bill(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BILL_HEADING));
    for (i, period) in BillingPeriod::ALL.iter().enumerate() {
        println!("{}) {} ({} days)", i + 1, period.label(), period.days());
    }
    let usage = read_line(tr.t(keys::PROMPT_USAGE_KWH))?;
    let rate = read_optional(tr.t(keys::PROMPT_UNIT_RATE))?;
    let standing = read_optional(tr.t(keys::PROMPT_STANDING_CHARGE))?;
    let period = read_optional(tr.t(keys::PROMPT_PERIOD))?.and_then(|s| parse_period(&s));
    let input = tariff_from_text(
        &usage,
        rate.as_deref(),
        standing.as_deref(),
        period,
        &cfg.tariff,
    );
    let bill = estimate_bill(&input);
    tracing::debug!(?input, total = bill.total, "bill estimated");
    println!("{}", render_bill(tr, &bill));
    Ok(())
}

/// 운전 비용 메뉴를 처리한다.
pub fn handle_running_cost(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RUNNING_COST_HEADING));
    for (i, preset) in APPLIANCE_PRESETS.iter().enumerate() {
        println!("{}) {} ({} kW)", i + 1, preset.name, preset.rated_kw);
    }
    let preset = read_optional(tr.t(keys::PROMPT_APPLIANCE))?
        .and_then(|s| s.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| APPLIANCE_PRESETS.get(idx));
    let kw = match preset {
        Some(p) => p.rated_kw.to_string(),
        None => read_line(tr.t(keys::PROMPT_RATED_KW))?,
    };
    let hours = read_line(tr.t(keys::PROMPT_HOURS_PER_DAY))?;
    let rate = read_optional(tr.t(keys::PROMPT_UNIT_RATE))?;
    let input = appliance_cost_from_text(&kw, &hours, rate.as_deref(), &cfg.tariff);
    let cost = estimate_running_cost(&input);
    tracing::debug!(?input, yearly = cost.yearly_cost, "running cost estimated");
    println!("{}", render_running_cost(tr, &cost));
    Ok(())
}

/// 참고 자료 어시스턴트 메뉴를 처리한다.
pub fn handle_reference(tr: &Translator, library: &ReferenceLibrary) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REFERENCE_HEADING));
    let assistant = KeywordAssistant;
    loop {
        let question = read_line(tr.t(keys::PROMPT_QUESTION))?;
        if question.trim().is_empty() {
            return Ok(());
        }
        println!("{}", assistant.respond(library, &question));
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_CURRENT));
    println!(
        "  language={}  unit_rate={}p/kWh  standing_charge={}p/day  period={}  test_dial={} cu ft",
        cfg.language.as_deref().unwrap_or("auto"),
        cfg.tariff.unit_rate_pence_per_kwh,
        cfg.tariff.standing_charge_pence_per_day,
        cfg.tariff.billing_period.label(),
        cfg.default_test_dial_cu_ft
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let Some(value) = read_optional(tr.t(keys::SETTINGS_PROMPT_VALUE))? else {
        return Ok(());
    };
    let positive = |s: &str| s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0);
    let applied = match sel.trim() {
        "1" => {
            cfg.language = Some(value);
            true
        }
        "2" => positive(&value)
            .map(|v| cfg.tariff.unit_rate_pence_per_kwh = v)
            .is_some(),
        "3" => positive(&value)
            .map(|v| cfg.tariff.standing_charge_pence_per_day = v)
            .is_some(),
        "4" => parse_period(&value)
            .map(|p| cfg.tariff.billing_period = p)
            .is_some(),
        "5" => positive(&value)
            .map(|v| cfg.default_test_dial_cu_ft = v)
            .is_some(),
        _ => false,
    };
    if applied {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    } else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(())
}

/// 테스트 다이얼 선택 입력을 해석한다. 목록 번호면 해당 크기, 아니면 입력 그대로.
pub fn pick_test_dial(input: &str) -> String {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| TEST_DIAL_OPTIONS.get(idx))
        .map_or_else(|| trimmed.to_string(), |(size, _)| size.to_string())
}

/// 청구 기간 선택 입력(목록 번호 또는 이름)을 해석한다.
pub fn parse_period(s: &str) -> Option<BillingPeriod> {
    let s = s.trim().to_lowercase();
    if let Some(idx) = s.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
        return BillingPeriod::ALL.get(idx).copied();
    }
    let s = if s == "yearly" { "annual" } else { s.as_str() };
    BillingPeriod::ALL.into_iter().find(|p| p.label() == s)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// 빈 입력이면 None.
fn read_optional(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    let trimmed = s.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_accepts_number_or_name() {
        assert_eq!(parse_period("3"), Some(BillingPeriod::Quarterly));
        assert_eq!(parse_period(" Annual "), Some(BillingPeriod::Annual));
        assert_eq!(parse_period("weekly"), None);
        assert_eq!(parse_period("5"), None);
        assert_eq!(parse_period("yearly"), Some(BillingPeriod::Annual));
    }

    #[test]
    fn dial_menu_number_maps_to_listed_size() {
        assert_eq!(pick_test_dial("1"), "0.5");
        assert_eq!(pick_test_dial(" 4 "), "5");
        assert_eq!(pick_test_dial("10"), "10");
        assert_eq!(pick_test_dial(""), "");
    }
}
