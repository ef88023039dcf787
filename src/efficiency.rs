//! 열회수 전후 PUE/WUE와 ERE 추정.
//!
//! 표준 기관 공식이 아니라 선언된 휴리스틱이다. 계수는 아래 상수로만 조정한다.

use serde::Serialize;

use crate::reference::{CoolingType, Facility};

/// 온도 보정 기준 환수 온도 [°C].
pub const TEMP_ADJUSTMENT_REFERENCE_C: f64 = 25.0;
/// 온도 보정 계수 하한.
pub const TEMP_ADJUSTMENT_FLOOR: f64 = 0.85;
/// ERF 100%에서의 WUE 감소율.
pub const WUE_REDUCTION_AT_FULL_ERF: f64 = 0.15;

/// 냉각 방식별 ERE 기준값 (증발식 > 하이브리드 > 공랭).
pub fn base_ere(cooling: CoolingType) -> f64 {
    match cooling {
        CoolingType::Evaporative => 0.30,
        CoolingType::Hybrid => 0.25,
        CoolingType::AirCooled => 0.20,
    }
}

/// DC 효율 계산 입력.
#[derive(Debug, Clone)]
pub struct EfficiencyInput<'a> {
    pub facility: &'a Facility,
    /// 에너지 재사용 비율 ERF [%]
    pub erf_pct: f64,
    pub dc_return_temp_c: f64,
}

/// DC 효율 계산 결과.
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyResult {
    pub temp_adjustment_factor: f64,
    pub pue_baseline: f64,
    pub pue_with_hr: f64,
    pub pue_reduction: f64,
    pub pue_reduction_pct: Option<f64>,
    pub wue_baseline: f64,
    pub wue_with_hr: f64,
    /// 건식 냉각(WUE 기준 0)이면 정의되지 않음
    pub wue_reduction: Option<f64>,
    pub wue_reduction_pct: Option<f64>,
    /// ERF가 0이면 정의되지 않음
    pub ere: Option<f64>,
}

/// 환수 온도가 높을수록 줄어드는 개선 보정 계수.
pub fn temp_adjustment_factor(dc_return_temp_c: f64) -> f64 {
    (1.0 - (dc_return_temp_c - TEMP_ADJUSTMENT_REFERENCE_C) / 100.0).max(TEMP_ADJUSTMENT_FLOOR)
}

/// 시설 프로파일과 ERF로 열회수 후 PUE/WUE를 추정한다.
pub fn compute_efficiency(input: &EfficiencyInput) -> EfficiencyResult {
    let f = input.facility;
    let erf = input.erf_pct.clamp(0.0, 100.0) / 100.0;
    let temp_factor = temp_adjustment_factor(input.dc_return_temp_c);

    let pue_with_hr = f.pue_baseline * (1.0 - f.pue_max_improvement_fraction * erf * temp_factor);
    let pue_reduction = f.pue_baseline - pue_with_hr;

    // 물을 쓰지 않는 건식 냉각은 줄일 WUE가 없다
    let (wue_with_hr, wue_reduction) = if f.wue_baseline > 0.0 {
        let with_hr = f.wue_baseline * (1.0 - WUE_REDUCTION_AT_FULL_ERF * erf * temp_factor);
        (with_hr, Some(f.wue_baseline - with_hr))
    } else {
        (0.0, None)
    };

    let ere = if erf > 0.0 {
        Some(base_ere(f.cooling_type) * erf)
    } else {
        None
    };

    EfficiencyResult {
        temp_adjustment_factor: temp_factor,
        pue_baseline: f.pue_baseline,
        pue_with_hr,
        pue_reduction,
        pue_reduction_pct: percent_of(pue_reduction, f.pue_baseline),
        wue_baseline: f.wue_baseline,
        wue_with_hr,
        wue_reduction,
        wue_reduction_pct: wue_reduction.and_then(|r| percent_of(r, f.wue_baseline)),
        ere,
    }
}

fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole > 0.0 {
        Some(part / whole * 100.0)
    } else {
        None
    }
}
