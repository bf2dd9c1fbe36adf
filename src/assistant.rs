//! 읽기 전용 참고 자료와 어시스턴트 연결부.
//!
//! 어시스턴트는 [`ReferenceLibrary`]만 받는다. 계산기 입력이나 스톱워치에는
//! 접근할 수 없으므로 계산 상태를 바꾸거나 쥐고 있을 수 없다.

use std::fmt::Write as _;

use crate::conversion::{imperial_volume, metric_volume};
use crate::gas::appliance::{find_appliance, ApplianceInfo, APPLIANCE_TYPES, DATA_PLATE_TOLERANCE_PCT};
use crate::gas::heat_input::compute_heat_input;
use crate::gas::properties::{GasKind, GasTable};
use crate::units::{CUBIC_METRE_PER_CUBIC_FOOT, MEGAJOULES_PER_KILOWATT_HOUR};

/// 측정 방식별 단계 안내.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodGuide {
    pub method: &'static str,
    pub steps: Vec<String>,
    pub example: String,
    pub tips: Vec<&'static str>,
}

/// 측정값이 기대와 다를 때의 진단 안내.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnosis {
    pub key: &'static str,
    pub symptom: &'static str,
    pub possible_causes: &'static [&'static str],
    pub actions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regulation {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const DIAGNOSES: [Diagnosis; 3] = [
    Diagnosis {
        key: "reading_high",
        symptom: "Calculated kW higher than data plate",
        possible_causes: &[
            "Gas pressure too high",
            "Faulty gas valve not modulating",
            "Wrong burner fitted",
            "Meter reading error",
        ],
        actions: &[
            "Check working pressure at test point",
            "Verify burner part number matches appliance",
            "Recheck meter readings and timing",
        ],
    },
    Diagnosis {
        key: "reading_low",
        symptom: "Calculated kW lower than data plate",
        possible_causes: &[
            "Gas pressure too low",
            "Partially blocked burner",
            "Faulty gas valve",
            "Undersized meter or pipework",
        ],
        actions: &[
            "Check standing and working pressure",
            "Inspect burner for debris",
            "Check meter capacity is adequate",
        ],
    },
    Diagnosis {
        key: "fluctuating",
        symptom: "Readings vary significantly between tests",
        possible_causes: &[
            "Other appliances running",
            "Pressure regulator fault",
            "Air in supply",
            "Faulty meter",
        ],
        actions: &[
            "Ensure all other gas appliances are off",
            "Check regulator operation",
            "Allow longer test duration",
        ],
    },
];

pub const REGULATIONS: [Regulation; 3] = [
    Regulation {
        key: "gas_safe",
        name: "Gas Safe Register",
        description: "Only Gas Safe registered engineers can legally work on gas appliances in the UK",
    },
    Regulation {
        key: "igem",
        name: "IGEM Standards",
        description: "Institution of Gas Engineers and Managers technical standards (IGE/UP/1B, IGE/UP/2)",
    },
    Regulation {
        key: "tolerance",
        name: "Acceptable Tolerance",
        description: "Calculated heat input should be within ±5% of data plate rating; investigate and rectify before leaving the appliance in service",
    },
];

/// 공식과 대표값을 담은 참고 자료. 생성 후에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLibrary {
    metric: MethodGuide,
    imperial: MethodGuide,
}

impl ReferenceLibrary {
    /// 주어진 물성 테이블의 상수로 안내문과 예제를 만든다.
    pub fn new(table: &GasTable) -> Self {
        Self {
            metric: metric_guide(table),
            imperial: imperial_guide(table),
        }
    }

    pub fn metric_guide(&self) -> &MethodGuide {
        &self.metric
    }

    pub fn imperial_guide(&self) -> &MethodGuide {
        &self.imperial
    }

    pub fn diagnoses(&self) -> &'static [Diagnosis] {
        &DIAGNOSES
    }

    pub fn regulations(&self) -> &'static [Regulation] {
        &REGULATIONS
    }

    pub fn appliances(&self) -> &'static [ApplianceInfo] {
        &APPLIANCE_TYPES
    }
}

fn metric_guide(table: &GasTable) -> MethodGuide {
    let gas = table.get(GasKind::NaturalGas);
    let example = match metric_volume(1234.567, 1234.789)
        .and_then(|volume| compute_heat_input(volume, 120.0, gas))
    {
        Ok(r) => format!(
            "Start 1234.567 m³, end 1234.789 m³, 120 s → {:.3} m³/h → {:.2} kW gross, {:.2} kW net",
            r.gross_flow_m3_per_hour, r.gross_kw, r.net_kw
        ),
        Err(reason) => format!("Example unavailable: {reason}"),
    };
    MethodGuide {
        method: "Metric (Meter Readings)",
        steps: vec![
            "Turn off all other gas appliances in the property".into(),
            "Note the meter start reading (include decimals)".into(),
            "Turn on the appliance at full rate".into(),
            "Time for at least 2 minutes (120 seconds recommended)".into(),
            "Note the meter end reading".into(),
            "Volume (m³) = End - Start".into(),
            format!("Corrected Volume = Volume × {}", gas.correction_factor),
            "Flow Rate (m³/h) = Corrected Volume × (3600 ÷ seconds)".into(),
            format!(
                "Gross kW = Flow Rate × {} ÷ {}",
                gas.calorific_value_mj_per_m3, MEGAJOULES_PER_KILOWATT_HOUR
            ),
            format!("Net kW = Gross kW ÷ {}", gas.gross_to_net_divisor),
        ],
        example,
        tips: vec![
            "Longer test duration = more accurate result",
            "Include all decimal places from meter",
        ],
    }
}

fn imperial_guide(table: &GasTable) -> MethodGuide {
    let gas = table.get(GasKind::NaturalGas);
    let example = match imperial_volume(2.0).and_then(|volume| compute_heat_input(volume, 45.0, gas)) {
        Ok(r) => format!(
            "2 cu ft dial, 45 s → 160 cu ft/h → {:.3} m³/h → {:.2} kW gross",
            r.gross_flow_m3_per_hour, r.gross_kw
        ),
        Err(reason) => format!("Example unavailable: {reason}"),
    };
    MethodGuide {
        method: "Imperial (Test Dial)",
        steps: vec![
            "Turn off all other gas appliances in the property".into(),
            "Note the test dial size (0.5, 1, 2, or 5 cu ft)".into(),
            "Turn on the appliance at full rate".into(),
            "Time one complete revolution of the test dial".into(),
            "Flow Rate (cu ft/h) = Dial Size × (3600 ÷ seconds)".into(),
            format!("Volume (m³) = Dial Size × {CUBIC_METRE_PER_CUBIC_FOOT}"),
            format!(
                "Corrected flow (m³/h) = Volume × {} × (3600 ÷ seconds)",
                gas.correction_factor
            ),
            format!(
                "Gross kW = m³/h × {} ÷ {}",
                gas.calorific_value_mj_per_m3, MEGAJOULES_PER_KILOWATT_HOUR
            ),
            format!("Net kW = Gross kW ÷ {}", gas.gross_to_net_divisor),
        ],
        example,
        tips: vec![
            "Use the largest dial size for faster appliances",
            "Time multiple revolutions and divide for accuracy",
        ],
    }
}

/// 음성/채팅 어시스턴트 연결부. 참고 자료만 읽고 답한다.
pub trait Assistant {
    fn respond(&self, library: &ReferenceLibrary, question: &str) -> String;
}

/// 키워드로 참고 자료 항목을 골라 주는 오프라인 어시스턴트.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAssistant;

impl Assistant for KeywordAssistant {
    fn respond(&self, library: &ReferenceLibrary, question: &str) -> String {
        let q = question.trim().to_lowercase();
        let words: Vec<&str> = q
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let any_prefix = |prefixes: &[&str]| {
            words
                .iter()
                .any(|w| prefixes.iter().any(|p| w.starts_with(p)))
        };

        if any_prefix(&["fluctuat", "vary", "varies", "inconsistent"]) {
            return render_diagnosis(&library.diagnoses()[2]);
        }
        if any_prefix(&["high"]) {
            return render_diagnosis(&library.diagnoses()[0]);
        }
        if words.iter().any(|w| *w == "low" || *w == "lower") {
            return render_diagnosis(&library.diagnoses()[1]);
        }
        if any_prefix(&["safe", "regist"]) {
            return render_regulation(&library.regulations()[0]);
        }
        if any_prefix(&["igem", "standard"]) {
            return render_regulation(&library.regulations()[1]);
        }
        if any_prefix(&["toleran", "acceptable"]) {
            return render_regulation(&library.regulations()[2]);
        }
        // 기기명이 있으면 일반 방법 안내보다 기기 항목이 우선
        if let Some(info) = find_appliance(&q) {
            return render_appliance(info);
        }
        if any_prefix(&["imperial", "dial"]) {
            return render_guide(library.imperial_guide());
        }
        if any_prefix(&["metric", "calculat", "formula"]) {
            return render_guide(library.metric_guide());
        }
        format!(
            "Ask about: metric or imperial method, reading high/low/fluctuating, \
             regulations or tolerance (±{DATA_PLATE_TOLERANCE_PCT}%), or an appliance ({}).",
            library
                .appliances()
                .iter()
                .map(|a| a.name)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

fn render_guide(guide: &MethodGuide) -> String {
    let mut out = format!("{}\n", guide.method);
    for (i, step) in guide.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", i + 1);
    }
    let _ = writeln!(out, "Example: {}", guide.example);
    for tip in &guide.tips {
        let _ = writeln!(out, "Tip: {tip}");
    }
    out
}

fn render_diagnosis(d: &Diagnosis) -> String {
    let mut out = format!("{}\nPossible causes:\n", d.symptom);
    for cause in d.possible_causes {
        let _ = writeln!(out, "- {cause}");
    }
    out.push_str("Recommended actions:\n");
    for action in d.actions {
        let _ = writeln!(out, "- {action}");
    }
    out
}

fn render_regulation(r: &Regulation) -> String {
    format!("{}: {}\n", r.name, r.description)
}

fn render_appliance(a: &ApplianceInfo) -> String {
    format!(
        "{} (typical input {})\n{}\nTest notes: {}\n",
        a.name, a.typical_input_range, a.description, a.test_notes
    )
}
