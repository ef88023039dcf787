//! 데이터센터 폐열 재사용(WHR) 추정 계산 로직을 라이브러리로 분리하여 CLI와 외부 렌더러가 함께 쓴다.
//!
//! 계산 흐름: 기준 데이터 → 열 코어 → 성능 램프 → {오프테이크 산출, DC 효율}
//! → 비용/수익 → 소유 구조 비교. CO₂ 비교표는 열 코어와 기준 데이터에만 의존한다.

pub mod app;
pub mod co2;
pub mod config;
pub mod economics;
pub mod efficiency;
pub mod offtake_output;
pub mod performance;
pub mod pipeline;
pub mod reference;
pub mod scenario;
pub mod thermal;
pub mod ui_cli;
pub mod units;

pub use pipeline::{compute_derived_metrics, DerivedMetrics};
pub use reference::ReferenceData;
pub use scenario::ScenarioInputs;
