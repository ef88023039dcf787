use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::pipeline;
use crate::reference::{ReferenceData, ReferenceDataError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 기준 데이터 적재/검증 오류
    #[error("기준 데이터 오류: {0}")]
    Reference(#[from] ReferenceDataError),
    /// 결과 JSON 직렬화 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 현재 설정의 기준 데이터 경로로 기준 데이터를 적재·검증한다.
pub fn load_reference(config: &Config) -> Result<ReferenceData, AppError> {
    let reference = ReferenceData::load(
        config.reference.piping_regions.as_deref(),
        config.reference.scenario_rows.as_deref(),
    )?;
    Ok(reference)
}

/// 한 번 계산해 결과를 출력한다. `json`이면 전체 지표를 JSON으로 낸다.
pub fn run_once(config: &Config, reference: &ReferenceData, json: bool) -> Result<(), AppError> {
    let metrics = pipeline::compute_derived_metrics(&config.scenario, reference);
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        ui_cli::print_report(&metrics);
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    reference: &ReferenceData,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Report => {
                let metrics = pipeline::compute_derived_metrics(&config.scenario, reference);
                ui_cli::print_report(&metrics);
            }
            MenuChoice::Co2Comparison => {
                let metrics = pipeline::compute_derived_metrics(&config.scenario, reference);
                ui_cli::print_co2_table(&metrics);
            }
            MenuChoice::Ownership => {
                let metrics = pipeline::compute_derived_metrics(&config.scenario, reference);
                ui_cli::print_ownership(&metrics);
            }
            MenuChoice::EditScenario => {
                ui_cli::handle_edit_scenario(&mut config.scenario, reference)?;
                config.save(config_path)?;
            }
            MenuChoice::ReferenceData => ui_cli::print_reference(reference),
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
