//! 배관·플랜트 투자비, DC 운영 절감액, 오프테이크 수익과 소유 구조 비교.

pub mod ownership;
pub mod piping_cost;
pub mod revenue;

pub use ownership::*;
pub use piping_cost::*;
pub use revenue::*;
