//! 오프테이크 산출량 테스트.
use waste_heat_reuse::offtake_output::{compute_offtake_outputs, OfftakeOutput};
use waste_heat_reuse::reference::OfftakeKind;
use waste_heat_reuse::scenario::Assumptions;
use waste_heat_reuse::thermal::{compute_thermal, ThermalInput, ThermalResult};
use waste_heat_reuse::units::volume::{per_capita_annual_m3, us_gallons_to_m3};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected} got {actual}"
    );
}

fn thermal(it_load_mw: f64, hours: f64) -> ThermalResult {
    compute_thermal(&ThermalInput {
        it_load_mw,
        recovery_pct: 10.0,
        hours_per_year: hours,
        dc_return_temp_c: 65.0,
        loop_delta_t_c: 12.0,
    })
}

#[test]
fn dac_capture_uses_effective_capacity() {
    let t = thermal(50.0, 8760.0);
    let out = compute_offtake_outputs(OfftakeKind::Dac, &t, 1.0, 65.0, &Assumptions::default());
    match out.absolute {
        OfftakeOutput::CarbonCapture {
            tco2_per_year,
            water_byproduct_m3_per_year,
        } => {
            assert_close("tco2", tco2_per_year, 22_750.0);
            assert_close("water", water_byproduct_m3_per_year, 5.0 * 1600.0);
        }
        other => panic!("unexpected output {other:?}"),
    }

    let half_year = thermal(50.0, 4380.0);
    let out = compute_offtake_outputs(
        OfftakeKind::Dac,
        &half_year,
        1.0,
        65.0,
        &Assumptions::default(),
    );
    assert_close("half-year tco2", out.absolute.tco2().unwrap(), 11_375.0);
}

#[test]
fn water_output_reports_people_served() {
    let t = thermal(50.0, 8760.0);
    let a = Assumptions::default();
    let out = compute_offtake_outputs(OfftakeKind::AtmosphericWater, &t, 0.8, 65.0, &a);
    let OfftakeOutput::Water {
        water_m3_per_year,
        people_served,
    } = out.absolute
    else {
        panic!("expected water output");
    };
    assert_close("water", water_m3_per_year, 5.0 * 3500.0 * 0.8);
    let per_capita = 80.0 * 0.003_785_41 * 365.0;
    assert_close("gallon", us_gallons_to_m3(1.0), 0.003_785_41);
    assert_close("per capita", per_capita_annual_m3(80.0), per_capita);
    assert_close("people", people_served.unwrap(), water_m3_per_year / per_capita);
}

#[test]
fn zero_per_capita_use_leaves_people_served_undefined() {
    let t = thermal(50.0, 8760.0);
    let a = Assumptions {
        gallons_per_capita_day: 0.0,
        ..Assumptions::default()
    };
    let out = compute_offtake_outputs(OfftakeKind::WaterTreatmentFo, &t, 1.0, 65.0, &a);
    assert!(matches!(
        out.absolute,
        OfftakeOutput::Water {
            people_served: None,
            ..
        }
    ));
}

#[test]
fn district_heat_homes_from_annual_heat() {
    let t = thermal(50.0, 8760.0);
    let out = compute_offtake_outputs(
        OfftakeKind::DistrictHeat,
        &t,
        1.0,
        65.0,
        &Assumptions::default(),
    );
    let OfftakeOutput::DistrictHeat { homes_heated } = out.absolute else {
        panic!("expected district heat output");
    };
    assert_close("homes", homes_heated.unwrap(), 43_800.0 / 14.5);
}

#[test]
fn greenhouse_hectares_scale_with_factor() {
    let t = thermal(50.0, 8760.0);
    let out = compute_offtake_outputs(
        OfftakeKind::Greenhouses,
        &t,
        0.9,
        65.0,
        &Assumptions::default(),
    );
    let OfftakeOutput::Greenhouse { hectares } = out.absolute else {
        panic!("expected greenhouse output");
    };
    assert_close("hectares", hectares, 43_800.0 / 3000.0 * 0.9);
}

#[test]
fn process_heat_suitability_against_threshold() {
    let t = thermal(50.0, 8760.0);
    let a = Assumptions::default();
    let hot = compute_offtake_outputs(OfftakeKind::FoodBrewery, &t, 1.0, 60.0, &a);
    let cold = compute_offtake_outputs(OfftakeKind::FoodBrewery, &t, 1.0, 35.0, &a);
    assert!(matches!(hot.absolute, OfftakeOutput::ProcessHeat { suitable: true, .. }));
    assert!(matches!(cold.absolute, OfftakeOutput::ProcessHeat { suitable: false, .. }));
}

#[test]
fn normalized_output_is_per_recovered_mw() {
    let small = thermal(10.0, 8760.0);
    let large = thermal(400.0, 8760.0);
    let a = Assumptions::default();
    for kind in OfftakeKind::ALL {
        let s = compute_offtake_outputs(kind, &small, 0.9, 50.0, &a);
        let l = compute_offtake_outputs(kind, &large, 0.9, 50.0, &a);
        assert_eq!(s.normalized_per_mw_yr, l.normalized_per_mw_yr, "{kind:?}");
    }
}
