use serde::Serialize;

use crate::scenario::HOURS_PER_YEAR_MAX;

/// 열 코어 계산 입력.
#[derive(Debug, Clone)]
pub struct ThermalInput {
    /// IT 부하 [MW]
    pub it_load_mw: f64,
    /// 열회수율 [%] (0~100으로 클램프)
    pub recovery_pct: f64,
    /// 연간 운전 시간 [h] (0~8760으로 클램프)
    pub hours_per_year: f64,
    /// DC 환수 온도 [°C]
    pub dc_return_temp_c: f64,
    /// 환수-공급 온도차 [°C]. 공급 온도 = 환수 온도 - 이 값
    pub loop_delta_t_c: f64,
}

/// 열 코어 계산 결과.
#[derive(Debug, Clone, Serialize)]
pub struct ThermalResult {
    /// 회수 가능 열량 [MW]
    pub recoverable_heat_mw: f64,
    /// 연간 회수 열량 [MWh]
    pub annual_heat_mwh: f64,
    /// 부분 연도 운전을 연중 환산한 용량 [MW·년]
    pub effective_mw_yr: f64,
    /// 클램프된 연간 운전 시간 [h]
    pub operating_hours: f64,
    /// DC 공급 온도 [°C]
    pub dc_supply_temp_c: f64,
    /// 환수-공급 온도차 [°C], 최소 1
    pub delta_t_c: f64,
}

/// IT 부하와 회수율, 운전 시간으로 회수 열량을 계산한다.
/// 입력은 거부하지 않고 범위로 클램프한다.
pub fn compute_thermal(input: &ThermalInput) -> ThermalResult {
    let it_load_mw = input.it_load_mw.max(0.0);
    let recovery = input.recovery_pct.clamp(0.0, 100.0) / 100.0;
    let hours = input.hours_per_year.clamp(0.0, HOURS_PER_YEAR_MAX);

    let recoverable_heat_mw = it_load_mw * recovery;
    let dc_supply_temp_c = input.dc_return_temp_c - input.loop_delta_t_c;
    ThermalResult {
        recoverable_heat_mw,
        annual_heat_mwh: recoverable_heat_mw * hours,
        effective_mw_yr: recoverable_heat_mw * hours / HOURS_PER_YEAR_MAX,
        operating_hours: hours,
        dc_supply_temp_c,
        // 하류 나눗셈 보호용 하한
        delta_t_c: (input.dc_return_temp_c - dc_supply_temp_c).max(1.0),
    }
}
