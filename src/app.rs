use std::path::Path;

use clap::Subcommand;
use thiserror::Error;

use crate::assistant::{Assistant, KeywordAssistant, ReferenceLibrary};
use crate::config::{Config, ConfigError};
use crate::conversion::parse_measurement;
use crate::cost::{estimate_bill, estimate_running_cost, BillingPeriod};
use crate::gas::appliance::{check_against_data_plate, APPLIANCE_PRESETS};
use crate::gas::properties::LpgKind;
use crate::i18n::{keys, Translator};
use crate::stopwatch::Stopwatch;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 계산 불가(`Unavailable`)는 오류가 아니라 결과이므로 여기에 없다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("unknown appliance preset: {0}")]
    UnknownAppliance(String),
}

/// 대화형 세션 동안 유지되는 상태. 스톱워치는 화면을 오가도 이어진다.
#[derive(Debug, Default)]
pub struct Session {
    pub stopwatch: Stopwatch,
}

/// 한 번 실행하고 끝나는 명령. 숫자 인자는 문자열로 받아 계산기별 해석 규칙을 따른다.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Heat input from metric meter readings (m³)
    Metric {
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        #[arg(long, allow_hyphen_values = true)]
        end: String,
        #[arg(long, allow_hyphen_values = true)]
        seconds: String,
        /// Rated input from the data plate, for a ±5% check
        #[arg(long)]
        data_plate_kw: Option<String>,
    },
    /// Heat input from one revolution of an imperial test dial
    Imperial {
        /// Test dial size in cu ft (defaults to the configured dial)
        #[arg(long, allow_hyphen_values = true)]
        dial: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        seconds: String,
        #[arg(long)]
        data_plate_kw: Option<String>,
    },
    /// Heat input from LPG meter readings
    Lpg {
        #[arg(long, value_enum, default_value_t = LpgKind::Propane)]
        gas: LpgKind,
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        #[arg(long, allow_hyphen_values = true)]
        end: String,
        #[arg(long, allow_hyphen_values = true)]
        seconds: String,
        #[arg(long)]
        data_plate_kw: Option<String>,
    },
    /// Estimate a gas bill including 5% VAT
    Bill {
        #[arg(long, default_value = "")]
        usage_kwh: String,
        /// Unit rate in pence per kWh (defaults to the configured rate)
        #[arg(long)]
        unit_rate: Option<String>,
        /// Standing charge in pence per day (defaults to the configured charge)
        #[arg(long)]
        standing_charge: Option<String>,
        #[arg(long, value_enum)]
        period: Option<BillingPeriod>,
    },
    /// Estimate appliance running costs
    RunningCost {
        /// Rated input in kW
        #[arg(long, conflicts_with = "appliance")]
        kw: Option<String>,
        /// Preset appliance name, e.g. "Combi Boiler"
        #[arg(long)]
        appliance: Option<String>,
        #[arg(long, default_value = "")]
        hours: String,
        #[arg(long)]
        unit_rate: Option<String>,
    },
    /// Ask the offline reference assistant
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let mut session = Session::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::MetricRate => ui_cli::handle_metric(tr, config, &mut session)?,
            MenuChoice::ImperialRate => ui_cli::handle_imperial(tr, config, &mut session)?,
            MenuChoice::LpgRate => ui_cli::handle_lpg(tr, config, &mut session)?,
            MenuChoice::Bill => ui_cli::handle_bill(tr, config)?,
            MenuChoice::RunningCost => ui_cli::handle_running_cost(tr, config)?,
            MenuChoice::Stopwatch => ui_cli::run_stopwatch(tr, &mut session.stopwatch, None)?,
            MenuChoice::Reference => {
                let library = ReferenceLibrary::new(&config.gas);
                ui_cli::handle_reference(tr, &library)?
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 단발 명령을 실행하고 출력할 문자열을 돌려준다.
pub fn execute(command: &Command, config: &Config, tr: &Translator) -> Result<String, AppError> {
    tracing::debug!(?command, "executing command");
    let (result, data_plate_kw) = match command {
        Command::Metric {
            start,
            end,
            seconds,
            data_plate_kw,
        } => (
            ui_cli::rate_from_text(ui_cli::metric_reading(start, end), seconds, &config.gas),
            data_plate_kw,
        ),
        Command::Imperial {
            dial,
            seconds,
            data_plate_kw,
        } => (
            ui_cli::rate_from_text(
                ui_cli::imperial_reading(dial.as_deref(), config.default_test_dial_cu_ft),
                seconds,
                &config.gas,
            ),
            data_plate_kw,
        ),
        Command::Lpg {
            gas,
            start,
            end,
            seconds,
            data_plate_kw,
        } => (
            ui_cli::rate_from_text(ui_cli::lpg_reading(*gas, start, end), seconds, &config.gas),
            data_plate_kw,
        ),
        Command::Bill {
            usage_kwh,
            unit_rate,
            standing_charge,
            period,
        } => {
            let input = ui_cli::tariff_from_text(
                usage_kwh,
                unit_rate.as_deref(),
                standing_charge.as_deref(),
                *period,
                &config.tariff,
            );
            return Ok(ui_cli::render_bill(tr, &estimate_bill(&input)));
        }
        Command::RunningCost {
            kw,
            appliance,
            hours,
            unit_rate,
        } => {
            let kw = match appliance {
                Some(name) => APPLIANCE_PRESETS
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
                    .map(|p| p.rated_kw.to_string())
                    .ok_or_else(|| AppError::UnknownAppliance(name.clone()))?,
                None => kw.clone().unwrap_or_default(),
            };
            let input =
                ui_cli::appliance_cost_from_text(&kw, hours, unit_rate.as_deref(), &config.tariff);
            return Ok(ui_cli::render_running_cost(tr, &estimate_running_cost(&input)));
        }
        Command::Ask { question } => {
            let library = ReferenceLibrary::new(&config.gas);
            return Ok(KeywordAssistant.respond(&library, &question.join(" ")));
        }
    };

    if let Err(reason) = &result {
        tracing::info!(%reason, "heat input unavailable");
    }
    let mut out = ui_cli::render_heat_input(tr, &result);
    let plate = data_plate_kw
        .as_deref()
        .and_then(|text| parse_measurement(text, "data plate kW").ok());
    if let (Ok(r), Some(rated)) = (&result, plate) {
        if let Some(check) = check_against_data_plate(r.net_kw, rated) {
            out.push('\n');
            out.push_str(&ui_cli::render_data_plate(tr, &check));
        }
    }
    Ok(out)
}
