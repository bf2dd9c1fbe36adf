use serde::{Deserialize, Serialize};

/// 가스 종류. 물성 테이블의 키로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasKind {
    NaturalGas,
    Propane,
    Butane,
}

impl GasKind {
    pub fn label(&self) -> &'static str {
        match self {
            GasKind::NaturalGas => "Natural gas",
            GasKind::Propane => "Propane",
            GasKind::Butane => "Butane",
        }
    }
}

/// LPG 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LpgKind {
    Propane,
    Butane,
}

impl LpgKind {
    pub fn gas_kind(&self) -> GasKind {
        match self {
            LpgKind::Propane => GasKind::Propane,
            LpgKind::Butane => GasKind::Butane,
        }
    }
}

/// 열량 계산에 필요한 가스 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// 총발열량 [MJ/m³]
    pub calorific_value_mj_per_m3: f64,
    /// 체적 보정 계수 (온도/압력 기준 상태 보정)
    pub correction_factor: f64,
    /// 총발열량 → 순발열량 제수
    pub gross_to_net_divisor: f64,
    /// 밀도 [kg/m³]. LPG에만 존재하며, 있을 때만 kg/h를 계산한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_per_m3: Option<f64>,
}

impl GasProperties {
    /// 영국 천연가스 기본값.
    pub const NATURAL_GAS: GasProperties = GasProperties {
        calorific_value_mj_per_m3: 39.5,
        correction_factor: 1.02264,
        gross_to_net_divisor: 1.11,
        density_kg_per_m3: None,
    };

    /// 프로판 기본값 (15°C 밀도).
    pub const PROPANE: GasProperties = GasProperties {
        calorific_value_mj_per_m3: 93.2,
        correction_factor: 1.02264,
        gross_to_net_divisor: 1.11,
        density_kg_per_m3: Some(1.882),
    };

    /// 부탄 기본값 (15°C 밀도).
    pub const BUTANE: GasProperties = GasProperties {
        calorific_value_mj_per_m3: 121.8,
        correction_factor: 1.02264,
        gross_to_net_divisor: 1.11,
        density_kg_per_m3: Some(2.489),
    };

    /// 모든 값이 유한한 양수인지 확인한다. 실패 시 문제가 된 필드명을 돌려준다.
    pub fn validate(&self) -> Result<(), &'static str> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.calorific_value_mj_per_m3) {
            return Err("calorific_value_mj_per_m3");
        }
        if !positive(self.correction_factor) {
            return Err("correction_factor");
        }
        if !positive(self.gross_to_net_divisor) {
            return Err("gross_to_net_divisor");
        }
        if let Some(density) = self.density_kg_per_m3 {
            if !positive(density) {
                return Err("density_kg_per_m3");
            }
        }
        Ok(())
    }
}

/// 가스 종류별 물성 테이블. 계산 엔진에 주입되는 설정 객체이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasTable {
    pub natural_gas: GasProperties,
    pub propane: GasProperties,
    pub butane: GasProperties,
}

impl Default for GasTable {
    fn default() -> Self {
        Self {
            natural_gas: GasProperties::NATURAL_GAS,
            propane: GasProperties::PROPANE,
            butane: GasProperties::BUTANE,
        }
    }
}

impl GasTable {
    pub fn get(&self, kind: GasKind) -> &GasProperties {
        match kind {
            GasKind::NaturalGas => &self.natural_gas,
            GasKind::Propane => &self.propane,
            GasKind::Butane => &self.butane,
        }
    }

    /// 테이블 전체를 검증하고 첫 번째 잘못된 항목을 보고한다.
    pub fn validate(&self) -> Result<(), (GasKind, &'static str)> {
        for kind in [GasKind::NaturalGas, GasKind::Propane, GasKind::Butane] {
            self.get(kind).validate().map_err(|field| (kind, field))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert_eq!(GasTable::default().validate(), Ok(()));
    }

    #[test]
    fn zero_divisor_is_rejected() {
        let mut table = GasTable::default();
        table.butane.gross_to_net_divisor = 0.0;
        assert_eq!(
            table.validate(),
            Err((GasKind::Butane, "gross_to_net_divisor"))
        );
    }

    #[test]
    fn natural_gas_has_no_density() {
        assert!(GasTable::default()
            .get(GasKind::NaturalGas)
            .density_kg_per_m3
            .is_none());
    }
}
