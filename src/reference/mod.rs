//! 파이프라인이 읽기 전용으로 소비하는 정적 기준 데이터.
//! 입지, 시설, 오프테이크 상수, 플랜트 비용, CO₂ 범위, 지역별 배관 비용으로 구성한다.
//! 프로세스 시작 시 한 번 적재·검증하며 이후에는 변경하지 않는다.

pub mod facilities;
pub mod locations;
pub mod offtakes;
pub mod piping;

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

pub use facilities::{CoolingType, Facility, ScenarioRow, WhrFriendliness};
pub use locations::{Location, Region};
pub use offtakes::{Co2Range, OfftakeKind, OfftakeProfile, PlantCost, RampSpec, ReferenceYield};
pub use piping::{PipingRegion, PipingRegionDocument, PipingRegionTable, DEFAULT_REGION_LABEL};

/// 기준 데이터 적재/검증 오류. 시작 시점에만 발생한다.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("기준 테이블이 비어 있음: {0}")]
    EmptyTable(&'static str),

    #[error("기본 지역 행('European average')이 지역 비용 테이블에 없음")]
    MissingDefaultRegion,

    #[error("{0} 테이블에 이름이 빈 행이 있음")]
    EmptyLabel(&'static str),

    #[error("'{row}' 행의 {field} 값이 허용 범위를 벗어남: {value}")]
    OutOfRange {
        row: String,
        field: &'static str,
        value: f64,
    },

    #[error("기준 데이터 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("기준 데이터 JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 비용 계열 기준값(USD/MWh, USD/MW, USD/km)의 상한.
const MAX_REFERENCE_COST: f64 = 1.0e9;
/// WUE 상한 [L/kWh].
const MAX_WUE: f64 = 100.0;

/// 키 조회 결과. 기본값으로 대체된 경우를 명시적으로 구분한다.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    Fallback(&'a T),
}

impl<'a, T> Lookup<'a, T> {
    pub fn value(&self) -> &'a T {
        match *self {
            Lookup::Found(v) | Lookup::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// 검증이 끝난 기준 데이터 묶음.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    locations: Vec<Location>,
    facilities: Vec<Facility>,
    piping: PipingRegionTable,
}

impl ReferenceData {
    /// 내장 테이블로 구성한다.
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::validated(
            locations::builtin_locations(),
            facilities::builtin_facilities(),
            piping::builtin_piping_regions(),
        )
    }

    /// 오프라인 변환된 JSON 문서 두 개(지역 비용 `{raw_rows}`, DC 냉각 시나리오 행 목록)로 구성한다.
    /// 입지 테이블은 내장값을 쓴다.
    pub fn from_json(
        region_json: &str,
        scenario_rows_json: &str,
    ) -> Result<Self, ReferenceDataError> {
        let doc: PipingRegionDocument = serde_json::from_str(region_json)?;
        let rows: Vec<ScenarioRow> = serde_json::from_str(scenario_rows_json)?;
        Self::validated(
            locations::builtin_locations(),
            rows.into_iter().map(Facility::from).collect(),
            doc.raw_rows,
        )
    }

    /// 파일 경로가 주어진 문서는 파일에서, 나머지는 내장 테이블에서 읽는다.
    pub fn load(
        region_path: Option<&Path>,
        scenario_rows_path: Option<&Path>,
    ) -> Result<Self, ReferenceDataError> {
        let regions = match region_path {
            Some(p) => {
                info!(path = %p.display(), "지역 배관 비용 테이블 적재");
                let doc: PipingRegionDocument = serde_json::from_str(&fs::read_to_string(p)?)?;
                doc.raw_rows
            }
            None => piping::builtin_piping_regions(),
        };
        let facilities = match scenario_rows_path {
            Some(p) => {
                info!(path = %p.display(), "DC 냉각 시나리오 행 적재");
                let rows: Vec<ScenarioRow> = serde_json::from_str(&fs::read_to_string(p)?)?;
                rows.into_iter().map(Facility::from).collect()
            }
            None => facilities::builtin_facilities(),
        };
        Self::validated(locations::builtin_locations(), facilities, regions)
    }

    /// 테이블 구성과 계수 범위를 검증한다.
    pub fn validated(
        locations: Vec<Location>,
        facilities: Vec<Facility>,
        regions: Vec<PipingRegion>,
    ) -> Result<Self, ReferenceDataError> {
        if locations.is_empty() {
            return Err(ReferenceDataError::EmptyTable("locations"));
        }
        if facilities.is_empty() {
            return Err(ReferenceDataError::EmptyTable("facilities"));
        }
        if regions.is_empty() {
            return Err(ReferenceDataError::EmptyTable("piping regions"));
        }
        for l in &locations {
            check(
                &l.name,
                "electricity_cost_per_mwh",
                l.electricity_cost_per_mwh,
                0.0,
                MAX_REFERENCE_COST,
            )?;
            check(
                &l.name,
                "grid_emission_factor_kg_per_kwh",
                l.grid_emission_factor_kg_per_kwh,
                0.0,
                5.0,
            )?;
        }
        for f in &facilities {
            check(&f.name, "pue_baseline", f.pue_baseline, 1.0, 5.0)?;
            check(
                &f.name,
                "pue_max_improvement_fraction",
                f.pue_max_improvement_fraction,
                0.0,
                1.0,
            )?;
            check(&f.name, "wue_baseline", f.wue_baseline, 0.0, MAX_WUE)?;
        }
        for r in &regions {
            // 빈 라벨은 부분 문자열 매칭에서 모든 키와 일치한다
            if r.region.trim().is_empty() {
                return Err(ReferenceDataError::EmptyLabel("piping regions"));
            }
            check(
                &r.region,
                "base_capex_per_mw",
                r.base_capex_per_mw,
                0.0,
                MAX_REFERENCE_COST,
            )?;
            check(&r.region, "cost_per_km", r.cost_per_km, 0.0, MAX_REFERENCE_COST)?;
            check(&r.region, "subsidy_fraction", r.subsidy_fraction, 0.0, 1.0)?;
        }
        let piping =
            PipingRegionTable::new(regions).ok_or(ReferenceDataError::MissingDefaultRegion)?;
        info!(
            locations = locations.len(),
            facilities = facilities.len(),
            regions = piping.rows().len(),
            "기준 데이터 검증 완료"
        );
        Ok(Self {
            locations,
            facilities,
            piping,
        })
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn piping(&self) -> &PipingRegionTable {
        &self.piping
    }

    /// 이름으로 입지를 찾고, 없으면 첫 행으로 대체한다.
    pub fn location(&self, key: &str) -> Lookup<'_, Location> {
        match self.locations.iter().find(|l| l.name.eq_ignore_ascii_case(key.trim())) {
            Some(l) => Lookup::Found(l),
            None => {
                warn!(key, fallback = %self.locations[0].name, "입지 조회 실패, 기본 입지 사용");
                Lookup::Fallback(&self.locations[0])
            }
        }
    }

    /// 이름으로 시설을 찾고, 없으면 첫 행으로 대체한다.
    pub fn facility(&self, key: &str) -> Lookup<'_, Facility> {
        match self.facilities.iter().find(|f| f.name.eq_ignore_ascii_case(key.trim())) {
            Some(f) => Lookup::Found(f),
            None => {
                warn!(key, fallback = %self.facilities[0].name, "시설 조회 실패, 기본 시설 사용");
                Lookup::Fallback(&self.facilities[0])
            }
        }
    }

    /// 입지 이름 → 지역 키 순으로 배관 비용 지역 행을 찾는다.
    pub fn piping_region(&self, location: &Location) -> Lookup<'_, PipingRegion> {
        let found = self
            .piping
            .lookup([location.name.as_str(), location.region.piping_key()]);
        if found.is_fallback() {
            warn!(
                location = %location.name,
                fallback = DEFAULT_REGION_LABEL,
                "배관 비용 지역 매칭 실패, 기본 지역 사용"
            );
        }
        found
    }
}

fn check(
    row: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ReferenceDataError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ReferenceDataError::OutOfRange {
            row: row.to_string(),
            field,
            value,
        })
    }
}
