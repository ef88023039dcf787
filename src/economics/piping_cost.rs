use serde::Serialize;

use crate::reference::PipingRegion;

/// 배관 연간 운영비 = 투자비 × 이 비율.
pub const PIPING_OPEX_FRACTION: f64 = 0.03;

/// 열배관 비용 입력.
#[derive(Debug, Clone)]
pub struct PipingCostInput<'a> {
    pub region: &'a PipingRegion,
    /// 오프테이크까지 거리 [km]
    pub distance_km: f64,
    /// 회수 열량 [MW]
    pub recoverable_heat_mw: f64,
}

/// 열배관 비용 결과.
#[derive(Debug, Clone, Serialize)]
pub struct PipingCostResult {
    pub region: String,
    /// 투자비 [USD]
    pub capex: f64,
    /// 연간 운영비 [USD/년]
    pub annual_opex: f64,
}

/// 보조금을 반영한 MW당 기본 투자비와 거리 비례 비용으로 배관 투자비를 계산한다.
pub fn piping_cost(input: &PipingCostInput) -> PipingCostResult {
    let r = input.region;
    let subsidy = r.subsidy_fraction.clamp(0.0, 1.0);
    let per_mw =
        r.base_capex_per_mw * (1.0 - subsidy) + r.cost_per_km * input.distance_km.max(0.0);
    let capex = per_mw * input.recoverable_heat_mw.max(0.0);
    PipingCostResult {
        region: r.region.clone(),
        capex,
        annual_opex: PIPING_OPEX_FRACTION * capex,
    }
}
