/// 미국 갤런 1개의 체적 [m³].
pub const M3_PER_US_GALLON: f64 = 0.003_785_41;

/// 미국 갤런을 입방미터로 변환한다.
pub fn us_gallons_to_m3(gallons: f64) -> f64 {
    gallons * M3_PER_US_GALLON
}

/// 1인당 하루 사용량 [gal/일]으로 1인당 연간 물 사용량 [m³/년]을 구한다.
pub fn per_capita_annual_m3(gallons_per_capita_day: f64) -> f64 {
    us_gallons_to_m3(gallons_per_capita_day) * 365.0
}
