//! 선택한 오프테이크의 물리 산출량(물 m³, tCO₂, 세대, ha)과 MW·년 정규화 값.

use serde::Serialize;

use crate::reference::{OfftakeKind, ReferenceYield};
use crate::scenario::{Assumptions, HOURS_PER_YEAR_MAX};
use crate::thermal::ThermalResult;
use crate::units::volume::per_capita_annual_m3;

/// 오프테이크 산출량. 분모가 0 이하인 비율은 `None`이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfftakeOutput {
    Water {
        water_m3_per_year: f64,
        /// 1인당 연간 사용량 기준 급수 인구 환산
        people_served: Option<f64>,
    },
    CarbonCapture {
        tco2_per_year: f64,
        /// 독립 원단위 [m³/MW·년] 기반 부산물 물
        water_byproduct_m3_per_year: f64,
    },
    DistrictHeat {
        homes_heated: Option<f64>,
    },
    Greenhouse {
        hectares: f64,
    },
    ProcessHeat {
        /// 환수 온도가 공정 온도 이상이면 true
        suitable: bool,
        process_temp_c: f64,
        thermal_mwh_per_year: f64,
    },
}

impl OfftakeOutput {
    /// 물 판매 수익 계산에 쓰는 물 생산량. 물 오프테이크가 아니면 `None`.
    pub fn water_m3(&self) -> Option<f64> {
        match *self {
            OfftakeOutput::Water {
                water_m3_per_year, ..
            } => Some(water_m3_per_year),
            _ => None,
        }
    }

    pub fn tco2(&self) -> Option<f64> {
        match *self {
            OfftakeOutput::CarbonCapture { tco2_per_year, .. } => Some(tco2_per_year),
            _ => None,
        }
    }
}

/// 오프테이크 산출 결과. 절대값과 회수 열량 1 MW 기준 정규화 값을 함께 담는다.
#[derive(Debug, Clone, Serialize)]
pub struct OfftakeOutputs {
    pub offtake: OfftakeKind,
    pub performance_factor: f64,
    pub absolute: OfftakeOutput,
    /// 회수 열량을 1 MW로 둔 값. 규모가 다른 프로젝트 비교용
    pub normalized_per_mw_yr: OfftakeOutput,
}

/// 물리량 계산에 필요한 열 규모.
#[derive(Debug, Clone, Copy)]
struct HeatBasis {
    recoverable_heat_mw: f64,
    annual_heat_mwh: f64,
    effective_mw_yr: f64,
}

impl HeatBasis {
    fn from_thermal(thermal: &ThermalResult) -> Self {
        Self {
            recoverable_heat_mw: thermal.recoverable_heat_mw,
            annual_heat_mwh: thermal.annual_heat_mwh,
            effective_mw_yr: thermal.effective_mw_yr,
        }
    }

    /// 운전 시간은 유지하고 회수 열량만 1 MW로 둔다.
    fn per_mw(operating_hours: f64) -> Self {
        Self {
            recoverable_heat_mw: 1.0,
            annual_heat_mwh: operating_hours,
            effective_mw_yr: operating_hours / HOURS_PER_YEAR_MAX,
        }
    }
}

/// 선택한 오프테이크의 물리 산출량을 계산한다.
pub fn compute_offtake_outputs(
    kind: OfftakeKind,
    thermal: &ThermalResult,
    performance_factor: f64,
    dc_return_temp_c: f64,
    assumptions: &Assumptions,
) -> OfftakeOutputs {
    let absolute = output_for(
        kind,
        HeatBasis::from_thermal(thermal),
        performance_factor,
        dc_return_temp_c,
        assumptions,
    );
    let normalized_per_mw_yr = output_for(
        kind,
        HeatBasis::per_mw(thermal.operating_hours),
        performance_factor,
        dc_return_temp_c,
        assumptions,
    );
    OfftakeOutputs {
        offtake: kind,
        performance_factor,
        absolute,
        normalized_per_mw_yr,
    }
}

fn output_for(
    kind: OfftakeKind,
    heat: HeatBasis,
    pf: f64,
    dc_return_temp_c: f64,
    assumptions: &Assumptions,
) -> OfftakeOutput {
    match kind.profile().reference_yield {
        ReferenceYield::WaterM3PerMwYr(m3_per_mw_yr) => {
            let water_m3_per_year = heat.recoverable_heat_mw * m3_per_mw_yr * pf;
            OfftakeOutput::Water {
                water_m3_per_year,
                people_served: ratio(
                    water_m3_per_year,
                    per_capita_annual_m3(assumptions.gallons_per_capita_day),
                ),
            }
        }
        ReferenceYield::CarbonCapture {
            tco2_per_mw_yr,
            water_byproduct_m3_per_mw_yr,
        } => OfftakeOutput::CarbonCapture {
            tco2_per_year: heat.effective_mw_yr * tco2_per_mw_yr * pf,
            water_byproduct_m3_per_year: heat.effective_mw_yr * water_byproduct_m3_per_mw_yr,
        },
        ReferenceYield::HomesHeated => OfftakeOutput::DistrictHeat {
            homes_heated: ratio(heat.annual_heat_mwh, assumptions.mwh_per_home_year),
        },
        ReferenceYield::GreenhouseMwhPerHectareYr(mwh_per_ha) => OfftakeOutput::Greenhouse {
            hectares: heat.annual_heat_mwh / mwh_per_ha * pf,
        },
        ReferenceYield::ProcessHeat { process_temp_c } => OfftakeOutput::ProcessHeat {
            suitable: dc_return_temp_c >= process_temp_c,
            process_temp_c,
            thermal_mwh_per_year: heat.annual_heat_mwh,
        },
    }
}

/// 분모가 0 이하이면 정의되지 않음(`None`).
pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator).filter(|v| v.is_finite())
    } else {
        None
    }
}
