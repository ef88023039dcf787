//! 모든 계산을 구동하는 단일 입력 레코드와 방어적 정규화.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::reference::OfftakeKind;

/// 연간 최대 운전 시간 [h].
pub const HOURS_PER_YEAR_MAX: f64 = 8760.0;
/// 냉각 COP가 0 이하로 들어왔을 때 사용하는 값.
pub const DEFAULT_COOLING_COP: f64 = 4.0;
/// IT 부하 상한 [MW].
pub const MAX_IT_LOAD_MW: f64 = 100_000.0;
/// 단가 입력(USD/t, USD/m³, USD/MWh)의 절대값 상한.
pub const MAX_UNIT_PRICE: f64 = 1.0e6;
/// 열교환기 투자비 상한 [USD/MW].
pub const MAX_CAPEX_PER_MW: f64 = 1.0e9;
/// 배관 거리 상한 [km].
pub const MAX_INTAKE_DISTANCE_KM: f64 = 1_000.0;
/// 루프 온도차 상한 [°C].
pub const MAX_LOOP_DELTA_T_C: f64 = 100.0;
/// 분석 기간 상한 [년].
pub const MAX_ANALYSIS_YEARS: u32 = 100;

/// 소유 구조 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum OwnershipModel {
    /// A: DC가 열교환기·배관·플랜트를 모두 소유
    A,
    /// B: 제3자 플랜트 소유, DC는 티핑 피를 받음
    B,
    /// C: 제3자 플랜트 소유, 오프테이크 수익을 비율로 분배
    C,
}

/// 오프테이크별 시장 가격/생산 원가.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    /// 탄소 제거 크레딧 가격 [USD/tCO₂]
    pub dac_market_price_per_ton: f64,
    /// 탄소 포집 조달 원가 [USD/tCO₂]
    pub dac_procurement_cost_per_ton: f64,
    /// 물 판매 가격 [USD/m³]
    pub water_market_price_per_m3: f64,
    /// 물 생산 원가 [USD/m³]
    pub water_production_cost_per_m3: f64,
    /// 열에너지 판매 단가 [USD/MWh]
    pub thermal_energy_price_per_mwh: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            dac_market_price_per_ton: 400.0,
            dac_procurement_cost_per_ton: 250.0,
            water_market_price_per_m3: 2.5,
            water_production_cost_per_m3: 0.8,
            thermal_energy_price_per_mwh: 35.0,
        }
    }
}

/// 사용자 조정 가능한 모델 가정값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// DC 루프 환수-공급 온도차 [°C]
    pub loop_delta_t_c: f64,
    /// 세대당 연간 난방 열수요 [MWh/년]
    pub mwh_per_home_year: f64,
    /// 1인당 하루 물 사용량 [gal/일]
    pub gallons_per_capita_day: f64,
    /// 할인율 (소수)
    pub discount_rate: f64,
    /// 분석 기간 [년]
    pub analysis_years: u32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            loop_delta_t_c: 12.0,
            mwh_per_home_year: 14.5,
            gallons_per_capita_day: 80.0,
            discount_rate: 0.08,
            analysis_years: 20,
        }
    }
}

/// 시나리오 입력 전체.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// IT 부하 [MW]
    pub it_load_mw: f64,
    /// 열회수율 [%]
    pub recovery_pct: f64,
    /// 연간 운전 시간 [h]
    pub hours_per_year: f64,
    /// DC 환수 온도 [°C]
    pub dc_return_temp_c: f64,
    pub selected_offtake: OfftakeKind,
    pub selected_location: String,
    pub selected_facility: String,
    /// 에너지 재사용 비율 ERF [%]
    pub erf_pct: f64,
    pub cooling_cop: f64,
    /// `None`이면 선택한 입지의 전력 단가를 쓴다 [USD/MWh]
    pub electricity_cost_per_mwh: Option<f64>,
    pub pricing: Pricing,
    pub ownership: OwnershipModel,
    /// 모델 B 티핑 피 [USD/MWh]
    pub tipping_fee_per_mwh: f64,
    /// 모델 C에서 DC가 받는 수익 비율 [%]
    pub revenue_share_pct: f64,
    /// 열교환기 투자비 [USD/MW]
    pub whr_capital_cost_per_mw: f64,
    /// 오프테이크까지 배관 거리 [km]
    pub intake_distance_km: f64,
    pub assumptions: Assumptions,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            it_load_mw: 50.0,
            recovery_pct: 10.0,
            hours_per_year: HOURS_PER_YEAR_MAX,
            dc_return_temp_c: 45.0,
            selected_offtake: OfftakeKind::Dac,
            selected_location: "Frankfurt, Germany".to_string(),
            selected_facility: "Hybrid liquid-cooled hyperscale".to_string(),
            erf_pct: 50.0,
            cooling_cop: DEFAULT_COOLING_COP,
            electricity_cost_per_mwh: None,
            pricing: Pricing::default(),
            ownership: OwnershipModel::A,
            tipping_fee_per_mwh: 10.0,
            revenue_share_pct: 30.0,
            whr_capital_cost_per_mw: 250_000.0,
            intake_distance_km: 1.0,
            assumptions: Assumptions::default(),
        }
    }
}

impl ScenarioInputs {
    /// 범위를 벗어난 값을 거부하지 않고 허용 범위로 클램프한 사본을 반환한다.
    /// NaN/무한대는 하한(또는 기본값)으로 대체한다.
    pub fn sanitized(&self) -> ScenarioInputs {
        let mut s = self.clone();
        s.it_load_mw = clamp_field("it_load_mw", s.it_load_mw, 0.0, MAX_IT_LOAD_MW);
        s.recovery_pct = clamp_field("recovery_pct", s.recovery_pct, 0.0, 100.0);
        s.hours_per_year =
            clamp_field("hours_per_year", s.hours_per_year, 0.0, HOURS_PER_YEAR_MAX);
        if !s.dc_return_temp_c.is_finite() {
            warn!(value = s.dc_return_temp_c, "dc_return_temp_c 비정상 값, 기본값 사용");
            s.dc_return_temp_c = ScenarioInputs::default().dc_return_temp_c;
        }
        s.erf_pct = clamp_field("erf_pct", s.erf_pct, 0.0, 100.0);
        if !(s.cooling_cop.is_finite() && s.cooling_cop > 0.0) {
            warn!(value = s.cooling_cop, "cooling_cop는 0보다 커야 함, 기본값 사용");
            s.cooling_cop = DEFAULT_COOLING_COP;
        }
        s.electricity_cost_per_mwh = s
            .electricity_cost_per_mwh
            .map(|v| clamp_field("electricity_cost_per_mwh", v, 0.0, MAX_UNIT_PRICE));
        let price = |name, value| bounded(name, value, MAX_UNIT_PRICE);
        let p = &mut s.pricing;
        p.dac_market_price_per_ton = price("dac_market_price_per_ton", p.dac_market_price_per_ton);
        p.dac_procurement_cost_per_ton =
            price("dac_procurement_cost_per_ton", p.dac_procurement_cost_per_ton);
        p.water_market_price_per_m3 =
            price("water_market_price_per_m3", p.water_market_price_per_m3);
        p.water_production_cost_per_m3 =
            price("water_production_cost_per_m3", p.water_production_cost_per_m3);
        p.thermal_energy_price_per_mwh =
            price("thermal_energy_price_per_mwh", p.thermal_energy_price_per_mwh);
        s.tipping_fee_per_mwh =
            clamp_field("tipping_fee_per_mwh", s.tipping_fee_per_mwh, 0.0, MAX_UNIT_PRICE);
        s.revenue_share_pct = clamp_field("revenue_share_pct", s.revenue_share_pct, 0.0, 100.0);
        s.whr_capital_cost_per_mw = clamp_field(
            "whr_capital_cost_per_mw",
            s.whr_capital_cost_per_mw,
            0.0,
            MAX_CAPEX_PER_MW,
        );
        s.intake_distance_km =
            clamp_field("intake_distance_km", s.intake_distance_km, 0.0, MAX_INTAKE_DISTANCE_KM);
        let a = &mut s.assumptions;
        a.loop_delta_t_c =
            clamp_field("loop_delta_t_c", a.loop_delta_t_c, 0.0, MAX_LOOP_DELTA_T_C);
        a.mwh_per_home_year = finite_or_zero(a.mwh_per_home_year);
        a.gallons_per_capita_day = finite_or_zero(a.gallons_per_capita_day);
        a.discount_rate = clamp_field("discount_rate", a.discount_rate, 0.0, 1.0);
        if a.analysis_years > MAX_ANALYSIS_YEARS {
            warn!(
                value = a.analysis_years,
                clamped = MAX_ANALYSIS_YEARS,
                "analysis_years 범위 초과, 클램프"
            );
            a.analysis_years = MAX_ANALYSIS_YEARS;
        }
        s
    }

    /// 회수율 [0~1].
    pub fn recovery_fraction(&self) -> f64 {
        self.recovery_pct.clamp(0.0, 100.0) / 100.0
    }

    /// ERF [0~1].
    pub fn erf_fraction(&self) -> f64 {
        self.erf_pct.clamp(0.0, 100.0) / 100.0
    }
}

fn clamp_field(name: &'static str, value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        warn!(field = name, value, "비정상 입력, 하한값으로 대체");
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(field = name, value, clamped, "입력값 범위 초과, 클램프");
    }
    clamped
}

/// 부호는 유지하고 절대값만 `limit`로 제한한다. NaN/무한대는 0.
fn bounded(name: &'static str, value: f64, limit: f64) -> f64 {
    let clamped = finite_or_zero(value).clamp(-limit, limit);
    if clamped != value {
        warn!(field = name, value, clamped, "입력값 범위 초과, 클램프");
    }
    clamped
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
