use serde::{Deserialize, Serialize};

use super::Lookup;

/// 지역 매칭 실패 시 사용하는 기본 행 라벨.
pub const DEFAULT_REGION_LABEL: &str = "European average";

/// 지역별 열배관 비용 기준 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipingRegion {
    pub region: String,
    /// 회수열 MW당 기본 투자비 [USD/MW]
    pub base_capex_per_mw: f64,
    /// 거리당 추가 투자비 [USD/(km·MW)]
    pub cost_per_km: f64,
    /// 보조금 비율 (0~1)
    #[serde(default)]
    pub subsidy_fraction: f64,
}

/// 스프레드시트 변환 결과 문서 형식 `{ "raw_rows": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PipingRegionDocument {
    pub raw_rows: Vec<PipingRegion>,
}

/// 적재 시점에 한 번 구성되는 지역 비용 테이블.
#[derive(Debug, Clone)]
pub struct PipingRegionTable {
    rows: Vec<PipingRegion>,
    default_index: usize,
}

impl PipingRegionTable {
    /// 기본 라벨 행이 없으면 `None`.
    pub fn new(rows: Vec<PipingRegion>) -> Option<Self> {
        let default_index = rows
            .iter()
            .position(|r| r.region.eq_ignore_ascii_case(DEFAULT_REGION_LABEL))?;
        Some(Self {
            rows,
            default_index,
        })
    }

    pub fn rows(&self) -> &[PipingRegion] {
        &self.rows
    }

    pub fn default_row(&self) -> &PipingRegion {
        &self.rows[self.default_index]
    }

    /// 후보 키를 순서대로 대소문자 무시 부분 문자열로 매칭한다.
    /// 기본 행은 명시적 매칭 대상에서 제외하고 마지막 폴백으로만 쓴다.
    pub fn lookup<'k>(
        &self,
        keys: impl IntoIterator<Item = &'k str>,
    ) -> Lookup<'_, PipingRegion> {
        for key in keys {
            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                continue;
            }
            let hit = self.rows.iter().enumerate().find(|(i, r)| {
                let label = r.region.to_ascii_lowercase();
                *i != self.default_index && (key.contains(&label) || label.contains(&key))
            });
            if let Some((_, row)) = hit {
                return Lookup::Found(row);
            }
        }
        Lookup::Fallback(self.default_row())
    }
}

fn row(region: &str, base: f64, per_km: f64, subsidy: f64) -> PipingRegion {
    PipingRegion {
        region: region.to_string(),
        base_capex_per_mw: base,
        cost_per_km: per_km,
        subsidy_fraction: subsidy,
    }
}

/// 기본 내장 지역 비용 행.
pub fn builtin_piping_regions() -> Vec<PipingRegion> {
    vec![
        row(DEFAULT_REGION_LABEL, 400_000.0, 120_000.0, 0.0),
        row("Germany", 450_000.0, 130_000.0, 0.30),
        row("Sweden", 350_000.0, 100_000.0, 0.20),
        row("Netherlands", 420_000.0, 125_000.0, 0.25),
        row("Ireland", 430_000.0, 125_000.0, 0.10),
        row("United States", 500_000.0, 150_000.0, 0.0),
    ]
}
