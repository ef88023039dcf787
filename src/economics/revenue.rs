use serde::Serialize;

use crate::offtake_output::OfftakeOutput;
use crate::reference::{OfftakeKind, PlantCost};
use crate::scenario::Pricing;

/// DC 측 운영 절감액 입력.
#[derive(Debug, Clone)]
pub struct OperationalSavingsInput {
    pub recoverable_heat_mw: f64,
    /// ERF (0~1)
    pub erf: f64,
    pub hours_per_year: f64,
    pub cooling_cop: f64,
    pub electricity_cost_per_mwh: f64,
}

/// DC 측 운영 절감액 결과.
#[derive(Debug, Clone, Serialize)]
pub struct OperationalSavings {
    /// 회피한 냉각 전력량 [MWh/년]
    pub avoided_cooling_mwh: f64,
    /// 연간 절감액 [USD/년]
    pub annual_savings: f64,
}

/// 실제로 재사용된 열(ERF 반영)만큼 회피한 냉각 전력과 절감액을 계산한다.
pub fn operational_savings(input: &OperationalSavingsInput) -> OperationalSavings {
    let avoided_cooling_mwh = if input.cooling_cop > 0.0 {
        input.recoverable_heat_mw * input.erf * input.hours_per_year / input.cooling_cop
    } else {
        0.0
    };
    OperationalSavings {
        avoided_cooling_mwh,
        annual_savings: avoided_cooling_mwh * input.electricity_cost_per_mwh,
    }
}

/// 오프테이크 시장 수익 [USD/년].
///
/// DAC는 포집량 × (크레딧 가격 - 조달 원가), 물 오프테이크는 생산량 × (판매가 - 생산 원가),
/// 열 판매형은 연간 열량 × 열 단가.
pub fn offtake_revenue(
    kind: OfftakeKind,
    output: &OfftakeOutput,
    annual_heat_mwh: f64,
    pricing: &Pricing,
) -> f64 {
    if kind == OfftakeKind::Dac {
        let margin = pricing.dac_market_price_per_ton - pricing.dac_procurement_cost_per_ton;
        output.tco2().unwrap_or(0.0) * margin
    } else if kind.is_water() {
        let margin = pricing.water_market_price_per_m3 - pricing.water_production_cost_per_m3;
        output.water_m3().unwrap_or(0.0) * margin
    } else if kind.is_thermal() {
        annual_heat_mwh * pricing.thermal_energy_price_per_mwh
    } else {
        0.0
    }
}

/// 비용/수익 모델 결과 묶음.
#[derive(Debug, Clone, Serialize)]
pub struct CostRevenue {
    /// 열교환기 투자비 [USD]
    pub heat_exchanger_capex: f64,
    pub piping: super::PipingCostResult,
    pub plant: PlantCost,
    /// 절감액 계산에 적용한 전력 단가 [USD/MWh]
    pub electricity_cost_per_mwh: f64,
    pub operational: OperationalSavings,
    /// 오프테이크 수익 [USD/년]
    pub offtake_revenue: f64,
}
