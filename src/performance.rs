//! 환수 온도 → 오프테이크 성능 배율 램프.
//!
//! 열역학 모델을 대신하는 의도적 단순화다. 각 오프테이크의 운전 범위에 맞춘
//! (t0, t1, v0, v1) 튜닝값은 기준 데이터(`reference::offtakes`)에 있다.

use serde::Serialize;

use crate::reference::{OfftakeKind, RampSpec};

/// 구간 선형 램프. `x <= x0`이면 `y0`, `x >= x1`이면 `y1`, 사이는 선형 보간한다.
pub fn ramp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x <= x0 {
        return y0;
    }
    if x >= x1 {
        return y1;
    }
    let frac = (x - x0) / (x1 - x0);
    y0 + frac * (y1 - y0)
}

/// 램프 정의를 온도에 적용한다.
pub fn apply(spec: &RampSpec, temp_c: f64) -> f64 {
    ramp(temp_c, spec.t0_c, spec.t1_c, spec.v0, spec.v1)
}

/// 오프테이크 하나의 성능 배율.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceFactor {
    pub offtake: OfftakeKind,
    pub factor: f64,
}

/// 지정한 오프테이크의 성능 배율.
pub fn performance_factor(kind: OfftakeKind, dc_return_temp_c: f64) -> f64 {
    apply(&kind.profile().ramp, dc_return_temp_c)
}

/// 모든 오프테이크의 성능 배율을 고정 순서로 계산한다.
pub fn performance_factors(dc_return_temp_c: f64) -> Vec<PerformanceFactor> {
    OfftakeKind::ALL
        .iter()
        .map(|&offtake| PerformanceFactor {
            offtake,
            factor: performance_factor(offtake, dc_return_temp_c),
        })
        .collect()
}
