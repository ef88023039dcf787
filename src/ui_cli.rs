use std::io::{self, Write};

use crate::app::AppError;
use crate::economics::OwnershipResult;
use crate::offtake_output::OfftakeOutput;
use crate::pipeline::DerivedMetrics;
use crate::reference::{OfftakeKind, ReferenceData};
use crate::scenario::{OwnershipModel, ScenarioInputs};

/// 정의되지 않은 값 표시.
const UNDEFINED: &str = "—";

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report,
    Co2Comparison,
    Ownership,
    EditScenario,
    ReferenceData,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Waste Heat Reuse Estimator ===");
    println!("1) 시나리오 결과");
    println!("2) 오프테이크별 CO₂ 비교");
    println!("3) 소유 구조 비교");
    println!("4) 시나리오 편집");
    println!("5) 기준 데이터 목록");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Report),
            "2" => return Ok(MenuChoice::Co2Comparison),
            "3" => return Ok(MenuChoice::Ownership),
            "4" => return Ok(MenuChoice::EditScenario),
            "5" => return Ok(MenuChoice::ReferenceData),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 시나리오 결과 요약을 출력한다.
pub fn print_report(m: &DerivedMetrics) {
    let s = &m.inputs;
    println!("\n-- 시나리오 결과 --");
    println!(
        "입지: {}{} / 시설: {}{} / 배관 지역: {}{}",
        m.lookups.location,
        fallback_mark(m.lookups.location_fallback),
        m.lookups.facility,
        fallback_mark(m.lookups.facility_fallback),
        m.lookups.piping_region,
        fallback_mark(m.lookups.piping_region_fallback),
    );
    println!(
        "IT 부하 {:.1} MW, 회수율 {:.1}%, 운전 {:.0} h/년, 환수 {:.1} °C (ΔT {:.1} °C)",
        s.it_load_mw, s.recovery_pct, s.hours_per_year, s.dc_return_temp_c, m.thermal.delta_t_c
    );
    println!(
        "회수 열량: {:.2} MW, 연간 {:.0} MWh, 유효 {:.2} MW·년",
        m.thermal.recoverable_heat_mw, m.thermal.annual_heat_mwh, m.thermal.effective_mw_yr
    );

    let out = &m.offtake_outputs;
    println!(
        "\n오프테이크: {} (성능 배율 {:.2})",
        out.offtake, out.performance_factor
    );
    print_output("  산출", &out.absolute);
    print_output("  MW·년당", &out.normalized_per_mw_yr);

    let e = &m.dc_efficiency;
    println!("\nPUE {:.3} → {:.3} (감소 {})", e.pue_baseline, e.pue_with_hr, pct(e.pue_reduction_pct));
    println!(
        "WUE {:.2} → {:.2} L/kWh (감소 {})",
        e.wue_baseline,
        e.wue_with_hr,
        opt(e.wue_reduction, 2)
    );
    println!("ERE: {}", opt(e.ere, 3));

    let c = &m.cost_revenue;
    println!("\n열교환기 투자비: {}", usd(c.heat_exchanger_capex));
    println!(
        "배관 투자비: {} (운영비 {}/년)",
        usd(c.piping.capex),
        usd(c.piping.annual_opex)
    );
    println!(
        "플랜트 투자비: {} (운영비 {}/년)",
        usd(c.plant.capex_usd),
        usd(c.plant.annual_opex_usd)
    );
    println!(
        "냉각 전력 회피: {:.0} MWh/년 → 절감 {}/년 (@ {:.1} USD/MWh)",
        c.operational.avoided_cooling_mwh,
        usd(c.operational.annual_savings),
        c.electricity_cost_per_mwh
    );
    println!("오프테이크 수익: {}/년", usd(c.offtake_revenue));
    println!("계통 회피 배출: {:.0} tCO₂/년", m.avoided_grid_tco2_per_year);

    let sel = m.ownership.selected_result();
    println!(
        "\n선택 소유 구조 {:?}: 회수기간 {}",
        sel.model,
        years(sel.payback_years)
    );
}

/// 전체 오프테이크 CO₂ 비교표를 출력한다.
pub fn print_co2_table(m: &DerivedMetrics) {
    println!(
        "\n-- CO₂ 저감 비교 (회수 열량 {:.2} MW 기준, kt/년) --",
        m.thermal.recoverable_heat_mw
    );
    println!("{:<34} {:>10} {:>10} {:>10}", "오프테이크", "min", "mid", "max");
    for row in &m.co2_table {
        let mark = if row.at_scale_constant { " *" } else { "" };
        println!(
            "{:<34} {:>10.2} {:>10.2} {:>10.2}{mark}",
            row.label, row.min_kt, row.mid_kt, row.max_kt
        );
    }
    println!("* 대규모 운전 기준 단일 상수");
}

/// 세 소유 구조를 나란히 출력한다.
pub fn print_ownership(m: &DerivedMetrics) {
    println!("\n-- 소유 구조 비교 ({}) --", m.offtake_outputs.offtake);
    for r in m.ownership.iter() {
        print_ownership_row(r, r.model == m.ownership.selected);
    }
}

fn print_ownership_row(r: &OwnershipResult, selected: bool) {
    let title = match r.model {
        OwnershipModel::A => "A 전체 소유",
        OwnershipModel::B => "B 제3자 플랜트(티핑 피)",
        OwnershipModel::C => "C 수익 분배",
    };
    let mark = if selected { " [선택]" } else { "" };
    println!("{title}{mark}");
    println!(
        "  투자비 {}, 운영비 {}/년, 수익 {}/년, 회수기간 {}, NPV {}",
        usd(r.capex),
        usd(r.annual_opex),
        usd(r.annual_revenue),
        years(r.payback_years),
        usd(r.npv)
    );
    if let Some(tp) = &r.third_party {
        println!(
            "  제3자: 투자비 {}, 이익 {}/년, 회수기간 {}",
            usd(tp.capex),
            usd(tp.annual_profit),
            years(tp.payback_years)
        );
    }
}

/// 기준 데이터 목록을 출력한다.
pub fn print_reference(reference: &ReferenceData) {
    println!("\n-- 입지 --");
    for l in reference.locations() {
        println!(
            "{} ({}), {:.1} °C, {:.0} USD/MWh, {:.3} kg/kWh",
            l.name,
            l.region.label(),
            l.ambient_temp_c,
            l.electricity_cost_per_mwh,
            l.grid_emission_factor_kg_per_kwh
        );
    }
    println!("\n-- 시설 --");
    for f in reference.facilities() {
        println!(
            "{} ({:?}), PUE {:.2}, 최대 개선 {:.0}%, WUE {:.2}",
            f.name,
            f.cooling_type,
            f.pue_baseline,
            f.pue_max_improvement_fraction * 100.0,
            f.wue_baseline
        );
    }
    println!("\n-- 오프테이크 --");
    for kind in OfftakeKind::ALL {
        let p = kind.profile();
        println!(
            "{}: 램프 {:.0}→{:.0} °C ({:.2}→{:.2}), 플랜트 {} / {}/년",
            p.label,
            p.ramp.t0_c,
            p.ramp.t1_c,
            p.ramp.v0,
            p.ramp.v1,
            usd(p.plant.capex_usd),
            usd(p.plant.annual_opex_usd)
        );
    }
}

/// 시나리오 편집 메뉴를 처리한다.
pub fn handle_edit_scenario(
    s: &mut ScenarioInputs,
    reference: &ReferenceData,
) -> Result<(), AppError> {
    println!("\n-- 시나리오 편집 --");
    println!("1) IT 부하 [MW]       2) 회수율 [%]        3) 운전 시간 [h/년]");
    println!("4) 환수 온도 [°C]     5) ERF [%]           6) 냉각 COP");
    println!("7) 오프테이크         8) 입지              9) 시설");
    println!("10) 소유 구조        11) 티핑 피 [USD/MWh] 12) 수익 분배율 [%]");
    println!("13) 배관 거리 [km]   14) 열교환기 투자비 [USD/MW]");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => s.it_load_mw = read_f64("IT 부하: ")?,
        "2" => s.recovery_pct = read_f64("회수율: ")?,
        "3" => s.hours_per_year = read_f64("운전 시간: ")?,
        "4" => s.dc_return_temp_c = read_f64("환수 온도: ")?,
        "5" => s.erf_pct = read_f64("ERF: ")?,
        "6" => s.cooling_cop = read_f64("냉각 COP: ")?,
        "7" => {
            for (i, kind) in OfftakeKind::ALL.iter().enumerate() {
                println!("{}) {}", i + 1, kind);
            }
            let n = read_index("선택: ", OfftakeKind::ALL.len())?;
            if let Some(n) = n {
                s.selected_offtake = OfftakeKind::ALL[n];
            }
        }
        "8" => {
            let names: Vec<&str> = reference.locations().iter().map(|l| l.name.as_str()).collect();
            if let Some(name) = pick_name(&names)? {
                s.selected_location = name;
            }
        }
        "9" => {
            let names: Vec<&str> = reference.facilities().iter().map(|f| f.name.as_str()).collect();
            if let Some(name) = pick_name(&names)? {
                s.selected_facility = name;
            }
        }
        "10" => {
            let v = read_line("소유 구조 (A/B/C): ")?;
            s.ownership = match v.trim().to_ascii_uppercase().as_str() {
                "A" => OwnershipModel::A,
                "B" => OwnershipModel::B,
                "C" => OwnershipModel::C,
                _ => {
                    println!("잘못된 입력이므로 변경하지 않습니다.");
                    s.ownership
                }
            };
        }
        "11" => s.tipping_fee_per_mwh = read_f64("티핑 피: ")?,
        "12" => s.revenue_share_pct = read_f64("수익 분배율: ")?,
        "13" => s.intake_distance_km = read_f64("배관 거리: ")?,
        "14" => s.whr_capital_cost_per_mw = read_f64("열교환기 투자비: ")?,
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

fn pick_name(names: &[&str]) -> Result<Option<String>, AppError> {
    for (i, name) in names.iter().enumerate() {
        println!("{}) {}", i + 1, name);
    }
    Ok(read_index("선택: ", names.len())?.map(|i| names[i].to_string()))
}

fn print_output(prefix: &str, out: &OfftakeOutput) {
    match out {
        OfftakeOutput::Water {
            water_m3_per_year,
            people_served,
        } => println!(
            "{prefix}: 물 {:.0} m³/년, 급수 인구 {}",
            water_m3_per_year,
            opt(*people_served, 0)
        ),
        OfftakeOutput::CarbonCapture {
            tco2_per_year,
            water_byproduct_m3_per_year,
        } => println!(
            "{prefix}: 포집 {:.0} tCO₂/년, 부산물 물 {:.0} m³/년",
            tco2_per_year, water_byproduct_m3_per_year
        ),
        OfftakeOutput::DistrictHeat { homes_heated } => {
            println!("{prefix}: 난방 세대 {}", opt(*homes_heated, 0))
        }
        OfftakeOutput::Greenhouse { hectares } => {
            println!("{prefix}: 온실 {:.2} ha", hectares)
        }
        OfftakeOutput::ProcessHeat {
            suitable,
            process_temp_c,
            thermal_mwh_per_year,
        } => println!(
            "{prefix}: 열 {:.0} MWh/년, 공정 온도 {:.0} °C {}",
            thermal_mwh_per_year,
            process_temp_c,
            if *suitable { "적합" } else { "부적합" }
        ),
    }
}

fn fallback_mark(fallback: bool) -> &'static str {
    if fallback {
        " (기본값)"
    } else {
        ""
    }
}

fn opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(v) => format!("{v:.decimals$}"),
        None => UNDEFINED.to_string(),
    }
}

fn pct(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.1}%"),
        None => UNDEFINED.to_string(),
    }
}

fn years(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.1}년"),
        None => UNDEFINED.to_string(),
    }
}

fn usd(v: f64) -> String {
    format!("{:.0} USD", v)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 1부터 시작하는 번호를 읽어 0 기반 인덱스로 돌려준다. 범위 밖이면 `None`.
fn read_index(prompt: &str, len: usize) -> Result<Option<usize>, AppError> {
    let s = read_line(prompt)?;
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Ok(Some(n - 1)),
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            Ok(None)
        }
    }
}
