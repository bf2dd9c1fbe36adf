//! 가스 기기 참고 자료와 명판(data plate) 대비 허용 오차 판정.

/// 기기 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceCategory {
    Heating,
    Cooking,
    Laundry,
}

/// 운전 비용 계산기의 빠른 선택 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliancePreset {
    pub name: &'static str,
    pub rated_kw: f64,
    pub category: ApplianceCategory,
}

pub const APPLIANCE_PRESETS: [AppliancePreset; 6] = [
    AppliancePreset {
        name: "Combi Boiler",
        rated_kw: 28.0,
        category: ApplianceCategory::Heating,
    },
    AppliancePreset {
        name: "System Boiler",
        rated_kw: 18.0,
        category: ApplianceCategory::Heating,
    },
    AppliancePreset {
        name: "Gas Fire",
        rated_kw: 4.5,
        category: ApplianceCategory::Heating,
    },
    AppliancePreset {
        name: "Gas Hob (4 ring)",
        rated_kw: 8.0,
        category: ApplianceCategory::Cooking,
    },
    AppliancePreset {
        name: "Gas Oven",
        rated_kw: 3.0,
        category: ApplianceCategory::Cooking,
    },
    AppliancePreset {
        name: "Gas Tumble Dryer",
        rated_kw: 2.5,
        category: ApplianceCategory::Laundry,
    },
];

/// 기기 종류별 일반적인 열입력 범위와 시험 요령.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplianceInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub typical_input_range: &'static str,
    pub description: &'static str,
    pub test_notes: &'static str,
}

pub const APPLIANCE_TYPES: [ApplianceInfo; 7] = [
    ApplianceInfo {
        key: "boiler_combi",
        name: "Combi Boiler",
        typical_input_range: "24-40 kW",
        description: "Combined heating and hot water, no cylinder needed",
        test_notes: "Run at full rate with hot taps running",
    },
    ApplianceInfo {
        key: "boiler_system",
        name: "System Boiler",
        typical_input_range: "12-30 kW",
        description: "Works with a hot water cylinder",
        test_notes: "Test with cylinder calling for heat",
    },
    ApplianceInfo {
        key: "boiler_regular",
        name: "Regular/Heat Only Boiler",
        typical_input_range: "12-30 kW",
        description: "Traditional boiler with separate hot water cylinder",
        test_notes: "Test on central heating demand",
    },
    ApplianceInfo {
        key: "gas_fire",
        name: "Gas Fire",
        typical_input_range: "3-7 kW",
        description: "Decorative or living flame gas fire",
        test_notes: "Run on full setting for test",
    },
    ApplianceInfo {
        key: "gas_hob",
        name: "Gas Hob",
        typical_input_range: "7-12 kW total",
        description: "Cooktop with multiple burners",
        test_notes: "Test with all burners on full",
    },
    ApplianceInfo {
        key: "gas_oven",
        name: "Gas Oven",
        typical_input_range: "2-4 kW",
        description: "Built-in or freestanding oven",
        test_notes: "Preheat to maximum temperature",
    },
    ApplianceInfo {
        key: "water_heater",
        name: "Water Heater (Multipoint)",
        typical_input_range: "18-32 kW",
        description: "Instantaneous water heater",
        test_notes: "Run hot water at full flow",
    },
];

/// 자유 입력 기기명으로 기기 정보를 찾는다. 대소문자와 공백/하이픈을 구분하지 않는다.
///
/// 그냥 "boiler"는 콤비 보일러로 본다.
pub fn find_appliance(name: &str) -> Option<&'static ApplianceInfo> {
    let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
    let key = if normalized.contains("combi") {
        "boiler_combi"
    } else if normalized.contains("system") {
        "boiler_system"
    } else if normalized.contains("regular")
        || normalized.contains("heat_only")
        || normalized.contains("conventional")
    {
        "boiler_regular"
    } else if normalized.contains("fire") {
        "gas_fire"
    } else if normalized.contains("hob") || normalized.contains("cooktop") {
        "gas_hob"
    } else if normalized.contains("oven") {
        "gas_oven"
    } else if normalized.contains("water_heater") || normalized.contains("multipoint") {
        "water_heater"
    } else if normalized.contains("boiler") {
        "boiler_combi"
    } else {
        normalized.as_str()
    };
    APPLIANCE_TYPES.iter().find(|info| info.key == key)
}

/// 명판 대비 허용 오차 (±5%).
pub const DATA_PLATE_TOLERANCE_PCT: f64 = 5.0;

/// 측정값의 명판 대비 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPlateVerdict {
    WithinTolerance,
    High,
    Low,
}

/// 명판 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPlateCheck {
    /// (측정 - 명판) / 명판 × 100 [%]
    pub deviation_pct: f64,
    pub verdict: DataPlateVerdict,
}

/// 측정된 순 kW를 명판 정격과 비교한다. 정격이 유한한 양수가 아니면 `None`.
pub fn check_against_data_plate(measured_net_kw: f64, rated_kw: f64) -> Option<DataPlateCheck> {
    if !rated_kw.is_finite() || rated_kw <= 0.0 || !measured_net_kw.is_finite() {
        return None;
    }
    let deviation_pct = (measured_net_kw - rated_kw) / rated_kw * 100.0;
    let verdict = if deviation_pct > DATA_PLATE_TOLERANCE_PCT {
        DataPlateVerdict::High
    } else if deviation_pct < -DATA_PLATE_TOLERANCE_PCT {
        DataPlateVerdict::Low
    } else {
        DataPlateVerdict::WithinTolerance
    };
    Some(DataPlateCheck {
        deviation_pct,
        verdict,
    })
}
