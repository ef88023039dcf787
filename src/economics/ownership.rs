use serde::Serialize;

use crate::reference::PlantCost;
use crate::scenario::OwnershipModel;

/// 소유 구조 비교 입력. 모든 구조가 같은 투자비/운영비/수익 원시값을 공유한다.
#[derive(Debug, Clone)]
pub struct OwnershipInput {
    /// 열교환기 투자비 [USD]
    pub heat_exchanger_capex: f64,
    /// 배관 투자비 [USD]
    pub piping_capex: f64,
    pub plant: PlantCost,
    /// DC 운영 절감액 [USD/년]
    pub operational_savings: f64,
    /// 오프테이크 시장 수익 [USD/년]
    pub offtake_revenue: f64,
    /// 연간 공급 열량 [MWh]
    pub annual_heat_mwh: f64,
    /// 모델 B 티핑 피 [USD/MWh]
    pub tipping_fee_per_mwh: f64,
    /// 모델 C DC 수익 분배율 [%]
    pub revenue_share_pct: f64,
    /// 할인율(소수)
    pub discount_rate: f64,
    /// 분석 기간 [년]
    pub analysis_years: u32,
}

/// 제3자(플랜트 운영사) 측 손익.
#[derive(Debug, Clone, Serialize)]
pub struct ThirdPartyPosition {
    /// 배관 + 플랜트 투자비 [USD]
    pub capex: f64,
    pub annual_revenue: f64,
    /// 플랜트 운영비 + DC 지급액 [USD/년]
    pub annual_opex: f64,
    /// 연간 이익 [USD/년]
    pub annual_profit: f64,
    pub payback_years: Option<f64>,
}

/// 소유 구조 하나의 DC 측 재무 결과.
#[derive(Debug, Clone, Serialize)]
pub struct OwnershipResult {
    pub model: OwnershipModel,
    pub capex: f64,
    pub annual_opex: f64,
    pub annual_revenue: f64,
    /// 연간 순편익 = 수익 - 운영비
    pub annual_net: f64,
    /// 순편익이 0 이하이면 회수 불가(`None`)
    pub payback_years: Option<f64>,
    /// 순현재가치 [USD]
    pub npv: f64,
    /// 모델 A는 제3자가 없다
    pub third_party: Option<ThirdPartyPosition>,
}

/// 세 가지 소유 구조 비교 결과.
#[derive(Debug, Clone, Serialize)]
pub struct OwnershipComparison {
    pub selected: OwnershipModel,
    pub full_ownership: OwnershipResult,
    pub third_party_owned: OwnershipResult,
    pub revenue_share: OwnershipResult,
}

impl OwnershipComparison {
    pub fn get(&self, model: OwnershipModel) -> &OwnershipResult {
        match model {
            OwnershipModel::A => &self.full_ownership,
            OwnershipModel::B => &self.third_party_owned,
            OwnershipModel::C => &self.revenue_share,
        }
    }

    pub fn selected_result(&self) -> &OwnershipResult {
        self.get(self.selected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OwnershipResult> {
        [
            &self.full_ownership,
            &self.third_party_owned,
            &self.revenue_share,
        ]
        .into_iter()
    }
}

/// 단순 회수기간 = 투자비 / (수익 - 운영비). 분모가 0 이하이면 `None`.
pub fn payback_years(capex: f64, annual_revenue: f64, annual_opex: f64) -> Option<f64> {
    let net = annual_revenue - annual_opex;
    if net > 0.0 && capex.is_finite() {
        Some(capex.max(0.0) / net).filter(|years| years.is_finite())
    } else {
        None
    }
}

/// 분석 기간 동안 매년 같은 순편익을 가정한 NPV.
pub fn npv(capex: f64, annual_net: f64, discount_rate: f64, years: u32) -> f64 {
    let mut npv = -capex;
    for year in 1..=years {
        let exponent = i32::try_from(year).unwrap_or(i32::MAX);
        let df = (1.0 + discount_rate).powi(exponent);
        npv += annual_net / df;
    }
    npv
}

fn dc_result(
    model: OwnershipModel,
    capex: f64,
    annual_opex: f64,
    annual_revenue: f64,
    input: &OwnershipInput,
    third_party: Option<ThirdPartyPosition>,
) -> OwnershipResult {
    let annual_net = annual_revenue - annual_opex;
    OwnershipResult {
        model,
        capex,
        annual_opex,
        annual_revenue,
        annual_net,
        payback_years: payback_years(capex, annual_revenue, annual_opex),
        npv: npv(capex, annual_net, input.discount_rate, input.analysis_years),
        third_party,
    }
}

fn third_party(input: &OwnershipInput, revenue: f64, paid_to_dc: f64) -> ThirdPartyPosition {
    let capex = input.piping_capex + input.plant.capex_usd;
    let annual_opex = input.plant.annual_opex_usd + paid_to_dc;
    ThirdPartyPosition {
        capex,
        annual_revenue: revenue,
        annual_opex,
        annual_profit: revenue - annual_opex,
        payback_years: payback_years(capex, revenue, annual_opex),
    }
}

/// A: DC가 열교환기·배관·플랜트를 모두 소유하고 절감액과 오프테이크 수익을 모두 가진다.
pub fn full_ownership(input: &OwnershipInput) -> OwnershipResult {
    let capex = input.heat_exchanger_capex + input.piping_capex + input.plant.capex_usd;
    let revenue = input.operational_savings + input.offtake_revenue;
    dc_result(
        OwnershipModel::A,
        capex,
        input.plant.annual_opex_usd,
        revenue,
        input,
        None,
    )
}

/// B: 제3자가 플랜트를 소유하고 DC에 공급 열량당 티핑 피를 지급한다.
pub fn third_party_owned(input: &OwnershipInput) -> OwnershipResult {
    let tipping_fee_paid = input.annual_heat_mwh * input.tipping_fee_per_mwh;
    let revenue = input.operational_savings + tipping_fee_paid;
    let tp = third_party(input, input.offtake_revenue, tipping_fee_paid);
    dc_result(
        OwnershipModel::B,
        input.heat_exchanger_capex,
        0.0,
        revenue,
        input,
        Some(tp),
    )
}

/// C: 제3자가 플랜트를 소유하고 오프테이크 수익 일부를 DC와 나눈다.
pub fn revenue_share(input: &OwnershipInput) -> OwnershipResult {
    let share = input.revenue_share_pct.clamp(0.0, 100.0) / 100.0;
    let dc_share = input.offtake_revenue * share;
    let revenue = input.operational_savings + dc_share;
    let tp = third_party(input, input.offtake_revenue, dc_share);
    dc_result(
        OwnershipModel::C,
        input.heat_exchanger_capex,
        0.0,
        revenue,
        input,
        Some(tp),
    )
}

/// 세 구조를 모두 계산한다.
pub fn compare_ownership(input: &OwnershipInput, selected: OwnershipModel) -> OwnershipComparison {
    OwnershipComparison {
        selected,
        full_ownership: full_ownership(input),
        third_party_owned: third_party_owned(input),
        revenue_share: revenue_share(input),
    }
}
