use serde::{Deserialize, Serialize};

/// 입지 지역 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    Europe,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Europe => "Europe",
        }
    }

    /// 배관 비용 지역표 매칭에 쓰는 키.
    pub fn piping_key(self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::Europe => "Europe",
        }
    }
}

/// 입지 기준 데이터 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: Region,
    pub ambient_temp_c: f64,
    pub electricity_cost_per_mwh: f64,
    /// 계통 배출계수 [kg/kWh] (= t/MWh)
    pub grid_emission_factor_kg_per_kwh: f64,
}

fn loc(name: &str, region: Region, ambient: f64, price: f64, grid: f64) -> Location {
    Location {
        name: name.to_string(),
        region,
        ambient_temp_c: ambient,
        electricity_cost_per_mwh: price,
        grid_emission_factor_kg_per_kwh: grid,
    }
}

/// 기본 내장 입지 테이블. 첫 행이 조회 실패 시 기본값이다.
pub fn builtin_locations() -> Vec<Location> {
    vec![
        loc("Frankfurt, Germany", Region::Europe, 10.0, 180.0, 0.38),
        loc("Stockholm, Sweden", Region::Europe, 6.5, 60.0, 0.013),
        loc("Dublin, Ireland", Region::Europe, 10.0, 150.0, 0.29),
        loc("Amsterdam, Netherlands", Region::Europe, 10.5, 160.0, 0.33),
        loc("Ashburn, Virginia", Region::Us, 13.0, 75.0, 0.35),
        loc("Phoenix, Arizona", Region::Us, 24.0, 80.0, 0.39),
        loc("Dallas, Texas", Region::Us, 19.0, 65.0, 0.40),
    ]
}
