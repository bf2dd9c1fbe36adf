use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";
    pub const UNAVAILABLE: &str = "general.unavailable";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_METRIC: &str = "main_menu.metric";
    pub const MAIN_MENU_IMPERIAL: &str = "main_menu.imperial";
    pub const MAIN_MENU_LPG: &str = "main_menu.lpg";
    pub const MAIN_MENU_BILL: &str = "main_menu.bill";
    pub const MAIN_MENU_RUNNING_COST: &str = "main_menu.running_cost";
    pub const MAIN_MENU_STOPWATCH: &str = "main_menu.stopwatch";
    pub const MAIN_MENU_REFERENCE: &str = "main_menu.reference";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const METRIC_HEADING: &str = "metric.heading";
    pub const IMPERIAL_HEADING: &str = "imperial.heading";
    pub const LPG_HEADING: &str = "lpg.heading";
    pub const LPG_OPTIONS: &str = "lpg.options";
    pub const PROMPT_START_READING: &str = "prompt.start_reading";
    pub const PROMPT_END_READING: &str = "prompt.end_reading";
    pub const PROMPT_TEST_DIAL: &str = "prompt.test_dial";
    pub const PROMPT_ELAPSED: &str = "prompt.elapsed";
    pub const PROMPT_DATA_PLATE: &str = "prompt.data_plate";

    pub const RESULT_GROSS_KW: &str = "result.gross_kw";
    pub const RESULT_NET_KW: &str = "result.net_kw";
    pub const RESULT_GROSS_FLOW: &str = "result.gross_flow";
    pub const RESULT_NET_FLOW: &str = "result.net_flow";
    pub const RESULT_FLOW_CU_FT: &str = "result.flow_cu_ft";
    pub const RESULT_KG_PER_HOUR: &str = "result.kg_per_hour";
    pub const RESULT_DATA_PLATE_OK: &str = "result.data_plate_ok";
    pub const RESULT_DATA_PLATE_HIGH: &str = "result.data_plate_high";
    pub const RESULT_DATA_PLATE_LOW: &str = "result.data_plate_low";

    pub const STOPWATCH_HEADING: &str = "stopwatch.heading";
    pub const STOPWATCH_COMMANDS: &str = "stopwatch.commands";
    pub const STOPWATCH_COMMANDS_COMMIT: &str = "stopwatch.commands_commit";
    pub const STOPWATCH_RUNNING: &str = "stopwatch.running";
    pub const STOPWATCH_STOPPED: &str = "stopwatch.stopped";
    pub const STOPWATCH_IDLE: &str = "stopwatch.idle";
    pub const STOPWATCH_COMMITTED: &str = "stopwatch.committed";

    pub const BILL_HEADING: &str = "bill.heading";
    pub const PROMPT_USAGE_KWH: &str = "prompt.usage_kwh";
    pub const PROMPT_UNIT_RATE: &str = "prompt.unit_rate";
    pub const PROMPT_STANDING_CHARGE: &str = "prompt.standing_charge";
    pub const PROMPT_PERIOD: &str = "prompt.period";
    pub const RESULT_USAGE_COST: &str = "result.usage_cost";
    pub const RESULT_STANDING_COST: &str = "result.standing_cost";
    pub const RESULT_VAT: &str = "result.vat";
    pub const RESULT_TOTAL: &str = "result.total";

    pub const RUNNING_COST_HEADING: &str = "running_cost.heading";
    pub const PROMPT_APPLIANCE: &str = "prompt.appliance";
    pub const PROMPT_RATED_KW: &str = "prompt.rated_kw";
    pub const PROMPT_HOURS_PER_DAY: &str = "prompt.hours_per_day";
    pub const RESULT_HOURLY: &str = "result.hourly";
    pub const RESULT_DAILY: &str = "result.daily";
    pub const RESULT_WEEKLY: &str = "result.weekly";
    pub const RESULT_MONTHLY: &str = "result.monthly";
    pub const RESULT_YEARLY: &str = "result.yearly";

    pub const REFERENCE_HEADING: &str = "reference.heading";
    pub const PROMPT_QUESTION: &str = "prompt.question";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_VALUE: &str = "settings.prompt_value";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

/// 런타임 언어 번들을 제공한다.
///
/// 언어팩(TOML)에 있는 키가 우선이고, 없으면 내장 영어 문자열을 쓴다.
#[derive(Debug, Clone)]
pub struct Translator {
    code: String,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 내장 문자열만 쓰는 번역기.
    pub fn new(lang_code: &str) -> Self {
        Self {
            code: lang_code.to_string(),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "locale pack loaded");
        }
        Self {
            code: lang_code.to_string(),
            overrides,
        }
    }

    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// 번역을 가져온다. 언어팩에 없으면 영어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        en(key).unwrap_or("[missing translation]")
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-gb".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase().replace('_', "-");
    match c.as_str() {
        "auto" | "" => None,
        "en" | "en-gb" | "en-uk" => Some("en-gb".into()),
        other if other.len() >= 2 && other.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '-') => {
            Some(other.to_string())
        }
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    // "en_GB.UTF-8" → "en-gb"
    let base = loc.split('.').next().unwrap_or_default();
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }
    normalize_lang(base)
}

/// `<dir>/<lang>.toml` 을 읽고, 없으면 기본 언어 코드(`en-gb` → `en`) 파일을 찾는다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let base = lang.split_once('-').map(|(base, _)| base);
    [Some(lang), base].into_iter().flatten().find_map(|code| {
        let content = fs::read_to_string(dir.join(format!("{code}.toml"))).ok()?;
        parse_toml_to_map(&content)
    })
}

/// `[section] key = "..."` 를 `section.key` 로 펼친다. 문자열이 아닌 값은 무시한다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let root: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    let mut pending: Vec<(String, toml::Value)> = root.into_iter().collect();
    while let Some((key, value)) = pending.pop() {
        match value {
            toml::Value::String(text) => {
                map.insert(key, text);
            }
            toml::Value::Table(section) => {
                pending.extend(section.into_iter().map(|(k, v)| (format!("{key}.{k}"), v)));
            }
            _ => {}
        }
    }
    (!map.is_empty()).then_some(map)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting application.",
        UNAVAILABLE => "Result: —",
        MAIN_MENU_TITLE => "\n=== Gas Rate Toolbox ===",
        MAIN_MENU_METRIC => "1) Gas rate (metric meter)",
        MAIN_MENU_IMPERIAL => "2) Gas rate (imperial test dial)",
        MAIN_MENU_LPG => "3) Gas rate (LPG)",
        MAIN_MENU_BILL => "4) Gas bill estimate",
        MAIN_MENU_RUNNING_COST => "5) Appliance running cost",
        MAIN_MENU_STOPWATCH => "6) Stopwatch",
        MAIN_MENU_REFERENCE => "7) Reference assistant",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        METRIC_HEADING => "\n-- Gas Rate (Metric) --",
        IMPERIAL_HEADING => "\n-- Gas Rate (Imperial Test Dial) --",
        LPG_HEADING => "\n-- Gas Rate (LPG) --",
        LPG_OPTIONS => "LPG type: 1) Propane  2) Butane",
        PROMPT_START_READING => "Meter start reading [m³]: ",
        PROMPT_END_READING => "Meter end reading [m³]: ",
        PROMPT_TEST_DIAL => "Test dial (number from the list, or type a size in cu ft; blank = default): ",
        PROMPT_ELAPSED => "Test duration [s] ('t' = use stopwatch): ",
        PROMPT_DATA_PLATE => "Data plate net kW (blank to skip): ",
        RESULT_GROSS_KW => "Gross heat input:",
        RESULT_NET_KW => "Net heat input:",
        RESULT_GROSS_FLOW => "Gross flow rate:",
        RESULT_NET_FLOW => "Net flow rate:",
        RESULT_FLOW_CU_FT => "Flow rate (imperial):",
        RESULT_KG_PER_HOUR => "Mass flow:",
        RESULT_DATA_PLATE_OK => "Within ±5% of data plate:",
        RESULT_DATA_PLATE_HIGH => "Above data plate tolerance:",
        RESULT_DATA_PLATE_LOW => "Below data plate tolerance:",
        STOPWATCH_HEADING => "\n-- Stopwatch --",
        STOPWATCH_COMMANDS => "s) start  x) stop  r) reset  Enter) refresh  q) done",
        STOPWATCH_COMMANDS_COMMIT => "s) start  x) stop  r) reset  c) use this time  Enter) refresh  q) done",
        STOPWATCH_RUNNING => "Running",
        STOPWATCH_STOPPED => "Stopped",
        STOPWATCH_IDLE => "Idle",
        STOPWATCH_COMMITTED => "Test duration set to",
        BILL_HEADING => "\n-- Gas Bill Estimate --",
        PROMPT_USAGE_KWH => "Gas usage [kWh]: ",
        PROMPT_UNIT_RATE => "Unit rate [p/kWh] (blank = default): ",
        PROMPT_STANDING_CHARGE => "Standing charge [p/day] (blank = default): ",
        PROMPT_PERIOD => "Billing period (number or name; blank = default): ",
        RESULT_USAGE_COST => "Gas usage:",
        RESULT_STANDING_COST => "Standing charge:",
        RESULT_VAT => "VAT (5%):",
        RESULT_TOTAL => "Estimated total:",
        RUNNING_COST_HEADING => "\n-- Appliance Running Cost --",
        PROMPT_APPLIANCE => "Appliance preset number (blank = enter kW): ",
        PROMPT_RATED_KW => "Appliance input [kW]: ",
        PROMPT_HOURS_PER_DAY => "Hours used per day: ",
        RESULT_HOURLY => "Per hour:",
        RESULT_DAILY => "Per day:",
        RESULT_WEEKLY => "Per week:",
        RESULT_MONTHLY => "Per month:",
        RESULT_YEARLY => "Per year:",
        REFERENCE_HEADING => "\n-- Reference Assistant (blank line to return) --",
        PROMPT_QUESTION => "Question: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Default unit rate  3) Default standing charge  4) Default billing period  5) Default test dial",
        SETTINGS_PROMPT_VALUE => "New value (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Setting updated.",
        _ => return None,
    })
}
