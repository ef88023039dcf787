//! 파이프라인 불변식 property 테스트 (proptest).
//!
//! 회수 열량 범위, 램프 단조성/클램프, 연간 열량 선형성, 정규화 산출 스케일 불변,
//! 회수기간 부호 규칙을 확인한다.

use proptest::prelude::*;
use waste_heat_reuse::economics::payback_years;
use waste_heat_reuse::performance::ramp;
use waste_heat_reuse::reference::{OfftakeKind, ReferenceData};
use waste_heat_reuse::scenario::ScenarioInputs;
use waste_heat_reuse::thermal::{compute_thermal, ThermalInput};
use waste_heat_reuse::{compute_derived_metrics, DerivedMetrics};

fn thermal_input(it_load_mw: f64, recovery_pct: f64, hours: f64) -> ThermalInput {
    ThermalInput {
        it_load_mw,
        recovery_pct,
        hours_per_year: hours,
        dc_return_temp_c: 45.0,
        loop_delta_t_c: 12.0,
    }
}

fn offtake_strategy() -> impl Strategy<Value = OfftakeKind> {
    prop::sample::select(OfftakeKind::ALL.to_vec())
}

fn run(inputs: &ScenarioInputs) -> DerivedMetrics {
    let reference = ReferenceData::builtin().expect("builtin reference data");
    compute_derived_metrics(inputs, &reference)
}

proptest! {
    /// 0 ≤ 회수 열량 ≤ IT 부하, 경계에서 등호.
    #[test]
    fn recoverable_heat_bounded_by_it_load(
        it_load in 0.0f64..500.0,
        recovery in 0.0f64..=100.0,
    ) {
        let res = compute_thermal(&thermal_input(it_load, recovery, 8760.0));
        prop_assert!(res.recoverable_heat_mw >= 0.0);
        prop_assert!(res.recoverable_heat_mw <= it_load + 1e-12);

        prop_assert_eq!(compute_thermal(&thermal_input(it_load, 0.0, 8760.0)).recoverable_heat_mw, 0.0);
        prop_assert!((compute_thermal(&thermal_input(it_load, 100.0, 8760.0)).recoverable_heat_mw - it_load).abs() < 1e-12);
    }

    /// 운전 시간을 두 배로 하면 연간 열량도 두 배.
    #[test]
    fn annual_heat_linear_in_hours(
        it_load in 0.0f64..500.0,
        recovery in 0.0f64..=100.0,
        hours in 0.0f64..4380.0,
    ) {
        let one = compute_thermal(&thermal_input(it_load, recovery, hours));
        let two = compute_thermal(&thermal_input(it_load, recovery, hours * 2.0));
        prop_assert_eq!(one.annual_heat_mwh, one.recoverable_heat_mw * hours);
        prop_assert!((two.annual_heat_mwh - 2.0 * one.annual_heat_mwh).abs() <= 1e-9 * one.annual_heat_mwh.max(1.0));
    }

    /// 램프는 [y0, y1] 안에서 단조 증가하고 구간 밖에서는 상수.
    #[test]
    fn ramp_monotonic_and_clamped(
        x0 in 0.0f64..50.0,
        width in 1.0f64..50.0,
        y0 in 0.0f64..1.0,
        rise in 0.0f64..1.0,
        a in -20.0f64..120.0,
        b in -20.0f64..120.0,
    ) {
        let x1 = x0 + width;
        let y1 = y0 + rise;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let ylo = ramp(lo, x0, x1, y0, y1);
        let yhi = ramp(hi, x0, x1, y0, y1);
        prop_assert!(ylo <= yhi + 1e-12);
        prop_assert!(ylo >= y0 - 1e-12 && yhi <= y1 + 1e-12);
        prop_assert_eq!(ramp(x0, x0, x1, y0, y1), y0);
        prop_assert_eq!(ramp(x1, x0, x1, y0, y1), y1);
        prop_assert_eq!(ramp(x0 - 5.0, x0, x1, y0, y1), y0);
        prop_assert_eq!(ramp(x1 + 5.0, x0, x1, y0, y1), y1);
    }

    /// 회수기간은 순편익이 0 이하이면 정의되지 않고, 그 외에는 수익이 늘수록 줄어든다.
    #[test]
    fn payback_sign_and_monotonicity(
        capex in 1.0f64..1e8,
        opex in 0.0f64..1e6,
        revenue in 0.0f64..2e6,
        extra in 1.0f64..1e6,
    ) {
        let p = payback_years(capex, revenue, opex);
        if revenue - opex <= 0.0 {
            prop_assert!(p.is_none());
        } else {
            let p = p.unwrap();
            prop_assert!(p.is_finite() && p > 0.0);
            let better = payback_years(capex, revenue + extra, opex).unwrap();
            prop_assert!(better < p);
        }
    }

    /// 정규화 산출량은 IT 부하 스케일과 무관하다.
    #[test]
    fn normalized_outputs_invariant_under_load_scaling(
        it_load in 1.0f64..200.0,
        scale in 1.5f64..20.0,
        return_temp in 25.0f64..80.0,
        kind in offtake_strategy(),
    ) {
        let base = ScenarioInputs {
            it_load_mw: it_load,
            dc_return_temp_c: return_temp,
            selected_offtake: kind,
            ..ScenarioInputs::default()
        };
        let scaled = ScenarioInputs { it_load_mw: it_load * scale, ..base.clone() };
        let m1 = run(&base);
        let m2 = run(&scaled);
        prop_assert_eq!(&m1.offtake_outputs.normalized_per_mw_yr, &m2.offtake_outputs.normalized_per_mw_yr);
    }

    /// 어떤 입력이든 결과에 NaN/무한대가 나오지 않는다.
    #[test]
    fn metrics_are_always_finite(
        it_load in prop_oneof![-10.0f64..1000.0, 1e6f64..1e308],
        recovery in -50.0f64..150.0,
        hours in -100.0f64..10_000.0,
        return_temp in 0.0f64..100.0,
        cop in -2.0f64..8.0,
        kind in offtake_strategy(),
    ) {
        let m = run(&ScenarioInputs {
            it_load_mw: it_load,
            recovery_pct: recovery,
            hours_per_year: hours,
            dc_return_temp_c: return_temp,
            cooling_cop: cop,
            selected_offtake: kind,
            ..ScenarioInputs::default()
        });
        prop_assert!(m.recoverable_heat_mw().is_finite());
        prop_assert!(m.cost_revenue.operational.annual_savings.is_finite());
        prop_assert!(m.cost_revenue.offtake_revenue.is_finite());
        for r in m.ownership.iter() {
            prop_assert!(r.npv.is_finite());
            if let Some(p) = r.payback_years {
                prop_assert!(p.is_finite() && p >= 0.0);
            }
        }
    }
}
