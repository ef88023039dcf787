//! 전체 오프테이크의 CO₂ 저감 범위 비교표와 계통 전력 회피 배출량.
//! 현재 선택된 오프테이크와 무관하게 모든 종류를 나란히 비교한다.

use serde::Serialize;

use crate::reference::{Co2Range, OfftakeKind};

/// 비교표 한 행 [kt CO₂/년].
#[derive(Debug, Clone, Serialize)]
pub struct Co2Row {
    pub offtake: OfftakeKind,
    pub label: &'static str,
    pub min_kt: f64,
    pub mid_kt: f64,
    pub max_kt: f64,
    /// DAC처럼 범위가 아닌 대규모 운전 상수인 행
    pub at_scale_constant: bool,
}

/// MW·년당 범위를 회수 열량으로 스케일한 비교표를 만든다.
pub fn co2_table(recoverable_heat_mw: f64) -> Vec<Co2Row> {
    let scale = recoverable_heat_mw.max(0.0);
    OfftakeKind::ALL
        .iter()
        .map(|&offtake| {
            let profile = offtake.profile();
            let (min, max) = profile.co2.bounds();
            Co2Row {
                offtake,
                label: profile.label,
                min_kt: min * scale,
                mid_kt: (min + max) / 2.0 * scale,
                max_kt: max * scale,
                at_scale_constant: matches!(profile.co2, Co2Range::AtScale { .. }),
            }
        })
        .collect()
}

/// 회피한 냉각 전력량 [MWh]과 계통 배출계수 [kg/kWh = t/MWh]로 회피 배출량 [tCO₂/년]을 구한다.
pub fn avoided_grid_tco2(avoided_cooling_mwh: f64, grid_emission_factor_kg_per_kwh: f64) -> f64 {
    avoided_cooling_mwh.max(0.0) * grid_emission_factor_kg_per_kwh.max(0.0)
}
