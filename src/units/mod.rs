//! 단위 변환 모듈 모음.

pub mod volume;
