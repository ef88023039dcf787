//! 파이프라인 전체 시나리오 테스트.
use waste_heat_reuse::economics::npv;
use waste_heat_reuse::offtake_output::OfftakeOutput;
use waste_heat_reuse::reference::{OfftakeKind, ReferenceData};
use waste_heat_reuse::scenario::{
    OwnershipModel, ScenarioInputs, MAX_ANALYSIS_YEARS, MAX_IT_LOAD_MW,
};
use waste_heat_reuse::{compute_derived_metrics, DerivedMetrics};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected} got {actual}"
    );
}

fn run(inputs: &ScenarioInputs) -> DerivedMetrics {
    let reference = ReferenceData::builtin().expect("builtin reference data");
    compute_derived_metrics(inputs, &reference)
}

#[test]
fn dac_reference_scenario() {
    let inputs = ScenarioInputs {
        it_load_mw: 50.0,
        recovery_pct: 10.0,
        hours_per_year: 8760.0,
        selected_offtake: OfftakeKind::Dac,
        dc_return_temp_c: 65.0,
        ..ScenarioInputs::default()
    };
    let m = run(&inputs);
    assert_close("recoverable", m.recoverable_heat_mw(), 5.0);
    assert_close("effective", m.effective_mw_yr(), 5.0);
    assert_close("dac factor", m.performance_factor(OfftakeKind::Dac).unwrap(), 1.0);
    assert_close("tco2", m.offtake_outputs.absolute.tco2().unwrap(), 22_750.0);

    let p = &inputs.pricing;
    let expected_revenue =
        22_750.0 * (p.dac_market_price_per_ton - p.dac_procurement_cost_per_ton);
    assert_close("revenue", m.cost_revenue.offtake_revenue, expected_revenue);
}

#[test]
fn zero_load_zeroes_every_output() {
    for kind in OfftakeKind::ALL {
        let inputs = ScenarioInputs {
            it_load_mw: 0.0,
            selected_offtake: kind,
            ..ScenarioInputs::default()
        };
        let m = run(&inputs);
        assert_eq!(m.recoverable_heat_mw(), 0.0);
        assert_eq!(m.annual_heat_mwh(), 0.0);
        match m.offtake_outputs.absolute {
            OfftakeOutput::Water {
                water_m3_per_year,
                people_served,
            } => {
                assert_eq!(water_m3_per_year, 0.0);
                assert_eq!(people_served, Some(0.0));
            }
            OfftakeOutput::CarbonCapture {
                tco2_per_year,
                water_byproduct_m3_per_year,
            } => {
                assert_eq!(tco2_per_year, 0.0);
                assert_eq!(water_byproduct_m3_per_year, 0.0);
            }
            OfftakeOutput::DistrictHeat { homes_heated } => assert_eq!(homes_heated, Some(0.0)),
            OfftakeOutput::Greenhouse { hectares } => assert_eq!(hectares, 0.0),
            OfftakeOutput::ProcessHeat {
                thermal_mwh_per_year,
                ..
            } => assert_eq!(thermal_mwh_per_year, 0.0),
        }
        assert_eq!(m.cost_revenue.offtake_revenue, 0.0, "{kind:?}");
        assert_eq!(m.cost_revenue.operational.annual_savings, 0.0);
        assert_eq!(m.avoided_grid_tco2_per_year, 0.0);
        for r in m.ownership.iter() {
            assert_eq!(r.annual_revenue, 0.0);
            assert_eq!(r.payback_years, None);
        }
        for row in &m.co2_table {
            assert_eq!(row.max_kt, 0.0);
        }
    }
}

#[test]
fn dry_cooled_facility_has_no_wue_reduction() {
    for erf in [0.0, 40.0, 100.0] {
        let inputs = ScenarioInputs {
            selected_facility: "Air-cooled colocation".into(),
            erf_pct: erf,
            ..ScenarioInputs::default()
        };
        let m = run(&inputs);
        assert!(!m.lookups.facility_fallback);
        assert_eq!(m.dc_efficiency.wue_with_hr, 0.0);
        assert!(m.dc_efficiency.wue_reduction.is_none());
    }
}

#[test]
fn model_b_without_tipping_fee_earns_only_savings() {
    let inputs = ScenarioInputs {
        tipping_fee_per_mwh: 0.0,
        ownership: OwnershipModel::B,
        ..ScenarioInputs::default()
    };
    let m = run(&inputs);
    assert_eq!(
        m.ownership.third_party_owned.annual_revenue,
        m.cost_revenue.operational.annual_savings
    );
    assert!(
        m.ownership.full_ownership.annual_revenue > m.ownership.third_party_owned.annual_revenue
    );
    assert_eq!(m.ownership.selected, OwnershipModel::B);
}

#[test]
fn electricity_price_falls_back_to_location() {
    let m = run(&ScenarioInputs::default());
    assert_close("tariff", m.cost_revenue.electricity_cost_per_mwh, 180.0);

    let m = run(&ScenarioInputs {
        electricity_cost_per_mwh: Some(55.0),
        ..ScenarioInputs::default()
    });
    assert_close("override", m.cost_revenue.electricity_cost_per_mwh, 55.0);
}

#[test]
fn thermal_offtake_revenue_uses_heat_price() {
    let inputs = ScenarioInputs {
        selected_offtake: OfftakeKind::Greenhouses,
        ..ScenarioInputs::default()
    };
    let m = run(&inputs);
    assert_close(
        "revenue",
        m.cost_revenue.offtake_revenue,
        m.annual_heat_mwh() * inputs.pricing.thermal_energy_price_per_mwh,
    );
}

#[test]
fn co2_table_is_independent_of_selection() {
    let a = run(&ScenarioInputs {
        selected_offtake: OfftakeKind::Dac,
        ..ScenarioInputs::default()
    });
    let b = run(&ScenarioInputs {
        selected_offtake: OfftakeKind::HotWater,
        ..ScenarioInputs::default()
    });
    assert_eq!(a.co2_table.len(), OfftakeKind::ALL.len());
    for (x, y) in a.co2_table.iter().zip(&b.co2_table) {
        assert_eq!(x.offtake, y.offtake);
        assert_eq!(x.mid_kt, y.mid_kt);
        assert_close("mid", x.mid_kt, (x.min_kt + x.max_kt) / 2.0);
    }
    let dac = a.co2_table.iter().find(|r| r.offtake == OfftakeKind::Dac).unwrap();
    assert!(dac.at_scale_constant);
    assert_eq!(dac.min_kt, dac.max_kt);
    assert_close("dac kt", dac.mid_kt, 4.55 * a.recoverable_heat_mw());
}

#[test]
fn out_of_range_inputs_are_clamped_not_rejected() {
    let m = run(&ScenarioInputs {
        it_load_mw: 20.0,
        recovery_pct: 250.0,
        hours_per_year: 20_000.0,
        erf_pct: -10.0,
        cooling_cop: 0.0,
        ..ScenarioInputs::default()
    });
    assert_close("recoverable", m.recoverable_heat_mw(), 20.0);
    assert_close("hours", m.inputs.hours_per_year, 8760.0);
    assert_eq!(m.inputs.erf_pct, 0.0);
    assert!(m.inputs.cooling_cop > 0.0);
    assert!(m.dc_efficiency.ere.is_none());
}

#[test]
fn extreme_load_and_costs_stay_finite() {
    let mut inputs = ScenarioInputs {
        it_load_mw: 1e308,
        whr_capital_cost_per_mw: f64::MAX,
        intake_distance_km: 1e300,
        tipping_fee_per_mwh: 1e300,
        electricity_cost_per_mwh: Some(1e300),
        ..ScenarioInputs::default()
    };
    inputs.pricing.dac_market_price_per_ton = 1e300;
    inputs.assumptions.analysis_years = 3_000_000_000;
    let m = run(&inputs);

    assert_eq!(m.inputs.it_load_mw, MAX_IT_LOAD_MW);
    assert_eq!(m.inputs.assumptions.analysis_years, MAX_ANALYSIS_YEARS);
    assert!(m.thermal.annual_heat_mwh.is_finite());
    assert!(m.cost_revenue.operational.annual_savings.is_finite());
    assert!(m.cost_revenue.offtake_revenue.is_finite());
    for r in m.ownership.iter() {
        assert!(r.capex.is_finite(), "{:?} capex", r.model);
        assert!(r.npv.is_finite(), "{:?} npv", r.model);
    }
}

#[test]
fn npv_with_long_horizon_keeps_discounting() {
    let short = npv(1000.0, 100.0, 0.05, 50);
    let long = npv(1000.0, 100.0, 0.05, MAX_ANALYSIS_YEARS);
    assert!(long > short);
    assert!(long < -1000.0 + 100.0 / 0.05);
}

#[test]
fn metrics_serialize_undefined_as_null() {
    let m = run(&ScenarioInputs {
        selected_facility: "Air-cooled colocation".into(),
        ..ScenarioInputs::default()
    });
    let json = serde_json::to_value(&m).expect("serialize metrics");
    assert!(json["dc_efficiency"]["wue_reduction"].is_null());
    assert!(json["thermal"]["recoverable_heat_mw"].is_number());
}
