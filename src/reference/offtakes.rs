use serde::{Deserialize, Serialize};

/// 회수열의 최종 사용처(오프테이크) 종류.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OfftakeKind {
    HotWater,
    DistrictHeat,
    WaterTreatmentFo,
    AtmosphericWater,
    Greenhouses,
    FoodBrewery,
    Dac,
}

impl OfftakeKind {
    /// 비교표 등에서 고정 순서로 순회할 때 사용한다.
    pub const ALL: [OfftakeKind; 7] = [
        OfftakeKind::HotWater,
        OfftakeKind::DistrictHeat,
        OfftakeKind::WaterTreatmentFo,
        OfftakeKind::AtmosphericWater,
        OfftakeKind::Greenhouses,
        OfftakeKind::FoodBrewery,
        OfftakeKind::Dac,
    ];

    /// 해당 오프테이크의 기준 프로파일을 반환한다.
    pub fn profile(self) -> &'static OfftakeProfile {
        // OFFTAKES는 ALL과 같은 순서로 정의되어 있다.
        &OFFTAKES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    /// 물 생산형 오프테이크(FO 수처리, 대기수 포집) 여부.
    pub fn is_water(self) -> bool {
        matches!(self, OfftakeKind::WaterTreatmentFo | OfftakeKind::AtmosphericWater)
    }

    /// 열에너지 판매형 오프테이크 여부. 수익은 열량 × 열 단가로 계산한다.
    pub fn is_thermal(self) -> bool {
        matches!(
            self,
            OfftakeKind::HotWater
                | OfftakeKind::DistrictHeat
                | OfftakeKind::Greenhouses
                | OfftakeKind::FoodBrewery
        )
    }
}

impl std::fmt::Display for OfftakeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 회수 온도 대비 성능 배율 램프 정의 (t0 이하 v0, t1 이상 v1).
///
/// 열역학 모델이 아니라 "환수 온도가 높을수록 성능이 좋아진다"를 표현하기 위한
/// 단순화된 보정 곡선이다. 값은 운전 범위 기준으로 튜닝된 참고치다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampSpec {
    pub t0_c: f64,
    pub t1_c: f64,
    pub v0: f64,
    pub v1: f64,
}

impl RampSpec {
    pub const fn new(t0_c: f64, t1_c: f64, v0: f64, v1: f64) -> Self {
        Self { t0_c, t1_c, v0, v1 }
    }
}

/// 오프테이크 플랜트 고정 비용 [USD, USD/년].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantCost {
    pub capex_usd: f64,
    pub annual_opex_usd: f64,
}

/// MW·년당 CO₂ 저감 범위 [kt].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Co2Range {
    /// 문헌 범위 (min, max)
    PerMwYear { min_kt: f64, max_kt: f64 },
    /// 대규모 운전 기준 단일 상수 (DAC)
    AtScale { kt: f64 },
}

impl Co2Range {
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Co2Range::PerMwYear { min_kt, max_kt } => (min_kt, max_kt),
            Co2Range::AtScale { kt } => (kt, kt),
        }
    }
}

/// MW·년 기준 물리 산출 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceYield {
    /// 물 생산량 [m³ / MW·년]
    WaterM3PerMwYr(f64),
    /// DAC 포집량 [tCO₂ / MW·년]과 부산물 물 [m³ / MW·년]
    CarbonCapture {
        tco2_per_mw_yr: f64,
        water_byproduct_m3_per_mw_yr: f64,
    },
    /// 온실 난방 원단위 [MWh / ha·년]
    GreenhouseMwhPerHectareYr(f64),
    /// 세대당 연간 열수요는 사용자 가정값을 따른다.
    HomesHeated,
    /// 물리 산출 모델 없음. 공정 온도 대비 적합성만 판단한다 [°C].
    ProcessHeat { process_temp_c: f64 },
}

/// 오프테이크 하나의 기준 데이터 묶음.
#[derive(Debug, Clone, Serialize)]
pub struct OfftakeProfile {
    pub kind: OfftakeKind,
    pub label: &'static str,
    pub reference_yield: ReferenceYield,
    pub ramp: RampSpec,
    pub plant: PlantCost,
    pub co2: Co2Range,
}

/// DAC 대규모 포집 원단위 [tCO₂ / MW·년].
pub const DAC_TCO2_PER_MW_YR: f64 = 4550.0;
/// DAC 부산물 물 [m³ / MW·년]. tCO₂에서 환산하지 않는 독립 상수다.
pub const DAC_WATER_M3_PER_MW_YR: f64 = 1600.0;

pub fn offtakes() -> &'static [OfftakeProfile] {
    OFFTAKES
}

const OFFTAKES: &[OfftakeProfile] = &[
    OfftakeProfile {
        kind: OfftakeKind::HotWater,
        label: "Generic hot water",
        reference_yield: ReferenceYield::ProcessHeat { process_temp_c: 40.0 },
        ramp: RampSpec::new(25.0, 45.0, 0.6, 1.0),
        plant: plant(500_000.0, 25_000.0),
        co2: Co2Range::PerMwYear { min_kt: 0.5, max_kt: 1.5 },
    },
    OfftakeProfile {
        kind: OfftakeKind::DistrictHeat,
        label: "District heating",
        reference_yield: ReferenceYield::HomesHeated,
        ramp: RampSpec::new(30.0, 70.0, 0.6, 1.0),
        plant: plant(2_500_000.0, 100_000.0),
        co2: Co2Range::PerMwYear { min_kt: 1.0, max_kt: 2.5 },
    },
    OfftakeProfile {
        kind: OfftakeKind::WaterTreatmentFo,
        label: "Forward-osmosis water treatment",
        reference_yield: ReferenceYield::WaterM3PerMwYr(146_000.0),
        ramp: RampSpec::new(30.0, 60.0, 0.6, 1.0),
        plant: plant(4_000_000.0, 300_000.0),
        co2: Co2Range::PerMwYear { min_kt: 0.2, max_kt: 0.8 },
    },
    OfftakeProfile {
        kind: OfftakeKind::AtmosphericWater,
        label: "Atmospheric water harvesting",
        reference_yield: ReferenceYield::WaterM3PerMwYr(3_500.0),
        ramp: RampSpec::new(30.0, 55.0, 0.75, 1.0),
        plant: plant(3_000_000.0, 200_000.0),
        co2: Co2Range::PerMwYear { min_kt: 0.1, max_kt: 0.4 },
    },
    OfftakeProfile {
        kind: OfftakeKind::Greenhouses,
        label: "Greenhouses",
        reference_yield: ReferenceYield::GreenhouseMwhPerHectareYr(3_000.0),
        ramp: RampSpec::new(25.0, 45.0, 0.7, 1.0),
        plant: plant(2_000_000.0, 150_000.0),
        co2: Co2Range::PerMwYear { min_kt: 0.8, max_kt: 2.0 },
    },
    OfftakeProfile {
        kind: OfftakeKind::FoodBrewery,
        label: "Food & brewery process heat",
        reference_yield: ReferenceYield::ProcessHeat { process_temp_c: 55.0 },
        ramp: RampSpec::new(40.0, 80.0, 0.5, 1.0),
        plant: plant(1_500_000.0, 75_000.0),
        co2: Co2Range::PerMwYear { min_kt: 0.6, max_kt: 1.8 },
    },
    OfftakeProfile {
        kind: OfftakeKind::Dac,
        label: "Direct air capture",
        reference_yield: ReferenceYield::CarbonCapture {
            tco2_per_mw_yr: DAC_TCO2_PER_MW_YR,
            water_byproduct_m3_per_mw_yr: DAC_WATER_M3_PER_MW_YR,
        },
        // 흡착제 재생(탈착) 온도 약 65°C에서 최대 성능
        ramp: RampSpec::new(30.0, 65.0, 0.5, 1.0),
        plant: plant(12_000_000.0, 1_200_000.0),
        co2: Co2Range::AtScale { kt: DAC_TCO2_PER_MW_YR / 1000.0 },
    },
];

const fn plant(capex_usd: f64, annual_opex_usd: f64) -> PlantCost {
    PlantCost {
        capex_usd,
        annual_opex_usd,
    }
}
