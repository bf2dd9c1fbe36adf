use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cost::BillingPeriod;
use crate::gas::properties::{GasKind, GasTable};

/// 요금 계산기의 기본 입력값 (영국 평균 요율).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffDefaults {
    pub unit_rate_pence_per_kwh: f64,
    pub standing_charge_pence_per_day: f64,
    pub billing_period: BillingPeriod,
}

impl Default for TariffDefaults {
    fn default() -> Self {
        Self {
            unit_rate_pence_per_kwh: 6.24,
            standing_charge_pence_per_day: 31.43,
            billing_period: BillingPeriod::Monthly,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드. 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 임페리얼 측정의 기본 테스트 다이얼 크기 [cu ft]
    pub default_test_dial_cu_ft: f64,
    pub tariff: TariffDefaults,
    pub gas: GasTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_test_dial_cu_ft: 1.0,
            tariff: TariffDefaults::default(),
            gas: GasTable::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid gas properties for {}: {field} must be a positive number", kind.label())]
    InvalidGas { kind: GasKind, field: &'static str },
    #[error("default test dial size must be a positive number")]
    InvalidTestDial,
}

impl Config {
    /// TOML 문자열을 해석하고 값을 검증한다.
    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gas
            .validate()
            .map_err(|(kind, field)| ConfigError::InvalidGas { kind, field })?;
        if !(self.default_test_dial_cu_ft.is_finite() && self.default_test_dial_cu_ft > 0.0) {
            return Err(ConfigError::InvalidTestDial);
        }
        Ok(())
    }

    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        tracing::info!(path = %path.display(), "config not found, writing defaults");
        cfg.save(path)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg = Config::from_toml_str("language = \"en-gb\"\n[tariff]\nunit_rate_pence_per_kwh = 7.0\n")
            .expect("partial config");
        assert_eq!(cfg.language.as_deref(), Some("en-gb"));
        assert_eq!(cfg.tariff.unit_rate_pence_per_kwh, 7.0);
        assert_eq!(cfg.tariff.standing_charge_pence_per_day, 31.43);
        assert_eq!(cfg.gas, GasTable::default());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        let back = Config::from_toml_str(&text).expect("parse");
        assert_eq!(back, Config::default());
    }

    #[test]
    fn negative_calorific_value_is_rejected() {
        let err = Config::from_toml_str("[gas.propane]\ncalorific_value_mj_per_m3 = -1.0\ncorrection_factor = 1.02264\ngross_to_net_divisor = 1.11\n")
            .expect_err("must reject");
        assert!(matches!(
            err,
            ConfigError::InvalidGas {
                kind: GasKind::Propane,
                field: "calorific_value_mj_per_m3"
            }
        ));
    }
}
