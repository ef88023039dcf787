use serde::{Deserialize, Serialize};

/// 데이터센터 냉각 방식. 원본 시나리오 행의 자유 텍스트를 키워드로 분류한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingType {
    Evaporative,
    Hybrid,
    AirCooled,
}

impl CoolingType {
    /// 냉각 방식 설명 문자열에서 키워드로 분류한다. 어떤 키워드도 없으면 공랭으로 본다.
    pub fn from_keyword(text: &str) -> CoolingType {
        let lower = text.to_ascii_lowercase();
        if lower.contains("evap") || lower.contains("tower") || lower.contains("adiabatic") {
            CoolingType::Evaporative
        } else if lower.contains("hybrid") || lower.contains("liquid") {
            CoolingType::Hybrid
        } else {
            CoolingType::AirCooled
        }
    }
}

/// 폐열 회수 친화도 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhrFriendliness {
    Low,
    Medium,
    High,
}

/// 데이터센터 시설 프로파일. PUE/WUE 개선 한계를 결정한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub cooling_type: CoolingType,
    pub ambient_temp_c: f64,
    pub electricity_cost_per_mwh: f64,
    pub pue_baseline: f64,
    /// 열회수 100% 시 PUE 최대 개선 비율 (0~1)
    pub pue_max_improvement_fraction: f64,
    /// 건식 냉각이면 0 [L/kWh]
    pub wue_baseline: f64,
    pub whr_friendliness: WhrFriendliness,
}

/// DC 냉각 시나리오 JSON 행. 오프라인 변환 스크립트가 만든 형식을 그대로 받는다.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRow {
    pub name: String,
    pub cooling: String,
    pub ambient_temp_c: f64,
    pub electricity_cost_per_mwh: f64,
    pub pue: f64,
    pub pue_max_improvement: f64,
    #[serde(default)]
    pub wue: f64,
    pub whr_friendliness: WhrFriendliness,
}

impl From<ScenarioRow> for Facility {
    fn from(row: ScenarioRow) -> Self {
        Facility {
            cooling_type: CoolingType::from_keyword(&row.cooling),
            name: row.name,
            ambient_temp_c: row.ambient_temp_c,
            electricity_cost_per_mwh: row.electricity_cost_per_mwh,
            pue_baseline: row.pue,
            pue_max_improvement_fraction: row.pue_max_improvement,
            wue_baseline: row.wue,
            whr_friendliness: row.whr_friendliness,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn facility(
    name: &str,
    cooling_type: CoolingType,
    ambient: f64,
    price: f64,
    pue: f64,
    max_improvement: f64,
    wue: f64,
    friendliness: WhrFriendliness,
) -> Facility {
    Facility {
        name: name.to_string(),
        cooling_type,
        ambient_temp_c: ambient,
        electricity_cost_per_mwh: price,
        pue_baseline: pue,
        pue_max_improvement_fraction: max_improvement,
        wue_baseline: wue,
        whr_friendliness: friendliness,
    }
}

/// 기본 내장 시설 테이블. 첫 행이 조회 실패 시 기본값이다.
pub fn builtin_facilities() -> Vec<Facility> {
    use CoolingType::*;
    use WhrFriendliness::*;
    vec![
        facility("Hybrid liquid-cooled hyperscale", Hybrid, 13.0, 75.0, 1.20, 0.06, 0.9, High),
        facility("Evaporative-cooled hyperscale", Evaporative, 24.0, 80.0, 1.25, 0.08, 1.8, High),
        facility("Air-cooled colocation", AirCooled, 10.0, 180.0, 1.45, 0.10, 0.0, Medium),
        facility("Enterprise chiller plant", AirCooled, 10.0, 150.0, 1.60, 0.12, 0.0, Low),
        facility("Nordic free-cooling", AirCooled, 6.5, 60.0, 1.12, 0.04, 0.0, High),
    ]
}
