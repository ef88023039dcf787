//! DC 효율(PUE/WUE/ERE) 휴리스틱 테스트.
use waste_heat_reuse::efficiency::{base_ere, compute_efficiency, temp_adjustment_factor, EfficiencyInput};
use waste_heat_reuse::reference::{CoolingType, Facility, WhrFriendliness};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected} got {actual}"
    );
}

fn facility(cooling_type: CoolingType, wue: f64) -> Facility {
    Facility {
        name: "test".into(),
        cooling_type,
        ambient_temp_c: 15.0,
        electricity_cost_per_mwh: 100.0,
        pue_baseline: 1.4,
        pue_max_improvement_fraction: 0.1,
        wue_baseline: wue,
        whr_friendliness: WhrFriendliness::Medium,
    }
}

#[test]
fn temp_adjustment_has_floor() {
    assert_close("25C", temp_adjustment_factor(25.0), 1.0);
    assert_close("35C", temp_adjustment_factor(35.0), 0.9);
    assert_close("60C", temp_adjustment_factor(60.0), 0.85);
}

#[test]
fn zero_erf_is_identity() {
    let f = facility(CoolingType::Evaporative, 1.8);
    let res = compute_efficiency(&EfficiencyInput {
        facility: &f,
        erf_pct: 0.0,
        dc_return_temp_c: 45.0,
    });
    assert_close("pue", res.pue_with_hr, 1.4);
    assert_close("wue", res.wue_with_hr, 1.8);
    assert!(res.ere.is_none());
}

#[test]
fn pue_and_wue_improve_with_erf() {
    let f = facility(CoolingType::Evaporative, 1.8);
    let res = compute_efficiency(&EfficiencyInput {
        facility: &f,
        erf_pct: 50.0,
        dc_return_temp_c: 35.0,
    });
    // 온도 보정 0.9
    assert_close("pue", res.pue_with_hr, 1.4 * (1.0 - 0.1 * 0.5 * 0.9));
    assert_close("wue", res.wue_with_hr, 1.8 * (1.0 - 0.15 * 0.5 * 0.9));
    assert_close("wue reduction", res.wue_reduction.unwrap(), 1.8 * 0.15 * 0.5 * 0.9);
    assert_close("ere", res.ere.unwrap(), 0.30 * 0.5);
}

#[test]
fn dry_cooled_facility_keeps_zero_wue() {
    let f = facility(CoolingType::AirCooled, 0.0);
    for erf in [0.0, 25.0, 100.0] {
        let res = compute_efficiency(&EfficiencyInput {
            facility: &f,
            erf_pct: erf,
            dc_return_temp_c: 45.0,
        });
        assert_eq!(res.wue_with_hr, 0.0);
        assert!(res.wue_reduction.is_none());
        assert!(res.wue_reduction_pct.is_none());
    }
}

#[test]
fn ere_ordering_by_cooling_type() {
    assert!(base_ere(CoolingType::Evaporative) > base_ere(CoolingType::Hybrid));
    assert!(base_ere(CoolingType::Hybrid) > base_ere(CoolingType::AirCooled));
}

#[test]
fn cooling_keyword_classification() {
    assert_eq!(CoolingType::from_keyword("Evaporative tower"), CoolingType::Evaporative);
    assert_eq!(CoolingType::from_keyword("Hybrid (dry + adiabatic trim)"), CoolingType::Evaporative);
    assert_eq!(CoolingType::from_keyword("Direct liquid, hybrid"), CoolingType::Hybrid);
    assert_eq!(CoolingType::from_keyword("Dry cooler"), CoolingType::AirCooled);
}
