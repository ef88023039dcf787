//! 입력 → 최종 지표 전체 파이프라인.
//!
//! 입력이 바뀔 때마다 전체를 다시 계산한다. 내부 상태나 캐시가 없으므로
//! 서로 다른 시나리오를 병렬로 평가해도 간섭하지 않는다.

use serde::Serialize;
use tracing::debug;

use crate::co2::{self, Co2Row};
use crate::economics::{self, CostRevenue, OwnershipComparison, OwnershipInput};
use crate::efficiency::{self, EfficiencyInput, EfficiencyResult};
use crate::offtake_output::{self, OfftakeOutputs};
use crate::performance::{self, PerformanceFactor};
use crate::reference::{OfftakeKind, ReferenceData};
use crate::scenario::ScenarioInputs;
use crate::thermal::{self, ThermalInput, ThermalResult};

/// 기준 데이터 조회 결과 기록. 기본값 대체 여부를 함께 남긴다.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub location: String,
    pub location_fallback: bool,
    pub facility: String,
    pub facility_fallback: bool,
    pub piping_region: String,
    pub piping_region_fallback: bool,
}

/// 파이프라인 최종 출력. 표시/내보내기 계층은 읽기만 한다.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedMetrics {
    /// 클램프가 적용된 실제 계산 입력
    pub inputs: ScenarioInputs,
    pub lookups: LookupReport,
    pub thermal: ThermalResult,
    pub performance_factors: Vec<PerformanceFactor>,
    /// 선택한 오프테이크 산출량
    pub offtake_outputs: OfftakeOutputs,
    /// 모든 오프테이크의 MW·년 정규화 산출량
    pub offtake_comparison: Vec<OfftakeOutputs>,
    pub dc_efficiency: EfficiencyResult,
    pub cost_revenue: CostRevenue,
    pub ownership: OwnershipComparison,
    pub co2_table: Vec<Co2Row>,
    /// 회피한 냉각 전력의 계통 배출량 [tCO₂/년]
    pub avoided_grid_tco2_per_year: f64,
}

impl DerivedMetrics {
    pub fn recoverable_heat_mw(&self) -> f64 {
        self.thermal.recoverable_heat_mw
    }

    pub fn annual_heat_mwh(&self) -> f64 {
        self.thermal.annual_heat_mwh
    }

    pub fn effective_mw_yr(&self) -> f64 {
        self.thermal.effective_mw_yr
    }

    pub fn delta_t_c(&self) -> f64 {
        self.thermal.delta_t_c
    }

    pub fn performance_factor(&self, kind: OfftakeKind) -> Option<f64> {
        self.performance_factors
            .iter()
            .find(|p| p.offtake == kind)
            .map(|p| p.factor)
    }
}

/// 시나리오 입력과 기준 데이터로 모든 파생 지표를 계산한다. 부작용이 없다.
pub fn compute_derived_metrics(inputs: &ScenarioInputs, reference: &ReferenceData) -> DerivedMetrics {
    let inputs = inputs.sanitized();
    let assumptions = &inputs.assumptions;

    let location = reference.location(&inputs.selected_location);
    let facility = reference.facility(&inputs.selected_facility);
    let region = reference.piping_region(location.value());
    let lookups = LookupReport {
        location: location.value().name.clone(),
        location_fallback: location.is_fallback(),
        facility: facility.value().name.clone(),
        facility_fallback: facility.is_fallback(),
        piping_region: region.value().region.clone(),
        piping_region_fallback: region.is_fallback(),
    };

    let thermal = thermal::compute_thermal(&ThermalInput {
        it_load_mw: inputs.it_load_mw,
        recovery_pct: inputs.recovery_pct,
        hours_per_year: inputs.hours_per_year,
        dc_return_temp_c: inputs.dc_return_temp_c,
        loop_delta_t_c: assumptions.loop_delta_t_c,
    });
    debug!(
        recoverable_heat_mw = thermal.recoverable_heat_mw,
        annual_heat_mwh = thermal.annual_heat_mwh,
        "열 코어 계산"
    );

    let performance_factors = performance::performance_factors(inputs.dc_return_temp_c);
    let selected = inputs.selected_offtake;
    let pf = performance::performance_factor(selected, inputs.dc_return_temp_c);

    let offtake_outputs = offtake_output::compute_offtake_outputs(
        selected,
        &thermal,
        pf,
        inputs.dc_return_temp_c,
        assumptions,
    );
    let offtake_comparison = performance_factors
        .iter()
        .map(|p| {
            offtake_output::compute_offtake_outputs(
                p.offtake,
                &thermal,
                p.factor,
                inputs.dc_return_temp_c,
                assumptions,
            )
        })
        .collect();

    let dc_efficiency = efficiency::compute_efficiency(&EfficiencyInput {
        facility: facility.value(),
        erf_pct: inputs.erf_pct,
        dc_return_temp_c: inputs.dc_return_temp_c,
    });

    let electricity_cost_per_mwh = inputs
        .electricity_cost_per_mwh
        .unwrap_or(location.value().electricity_cost_per_mwh);
    let operational = economics::operational_savings(&economics::OperationalSavingsInput {
        recoverable_heat_mw: thermal.recoverable_heat_mw,
        erf: inputs.erf_fraction(),
        hours_per_year: thermal.operating_hours,
        cooling_cop: inputs.cooling_cop,
        electricity_cost_per_mwh,
    });
    let piping = economics::piping_cost(&economics::PipingCostInput {
        region: region.value(),
        distance_km: inputs.intake_distance_km,
        recoverable_heat_mw: thermal.recoverable_heat_mw,
    });
    let offtake_revenue = economics::offtake_revenue(
        selected,
        &offtake_outputs.absolute,
        thermal.annual_heat_mwh,
        &inputs.pricing,
    );
    let cost_revenue = CostRevenue {
        heat_exchanger_capex: inputs.whr_capital_cost_per_mw * thermal.recoverable_heat_mw,
        piping,
        plant: selected.profile().plant,
        electricity_cost_per_mwh,
        operational,
        offtake_revenue,
    };
    debug!(
        savings = cost_revenue.operational.annual_savings,
        offtake_revenue, "비용/수익 계산"
    );

    let ownership = economics::compare_ownership(
        &OwnershipInput {
            heat_exchanger_capex: cost_revenue.heat_exchanger_capex,
            piping_capex: cost_revenue.piping.capex,
            plant: cost_revenue.plant,
            operational_savings: cost_revenue.operational.annual_savings,
            offtake_revenue,
            annual_heat_mwh: thermal.annual_heat_mwh,
            tipping_fee_per_mwh: inputs.tipping_fee_per_mwh,
            revenue_share_pct: inputs.revenue_share_pct,
            discount_rate: assumptions.discount_rate,
            analysis_years: assumptions.analysis_years,
        },
        inputs.ownership,
    );

    let co2_table = co2::co2_table(thermal.recoverable_heat_mw);
    let avoided_grid_tco2_per_year = co2::avoided_grid_tco2(
        cost_revenue.operational.avoided_cooling_mwh,
        location.value().grid_emission_factor_kg_per_kwh,
    );

    DerivedMetrics {
        lookups,
        thermal,
        performance_factors,
        offtake_outputs,
        offtake_comparison,
        dc_efficiency,
        cost_revenue,
        ownership,
        co2_table,
        avoided_grid_tco2_per_year,
        inputs,
    }
}
