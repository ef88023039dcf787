use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use waste_heat_reuse::reference::OfftakeKind;
use waste_heat_reuse::scenario::OwnershipModel;
use waste_heat_reuse::{app, config};

/// 데이터센터 폐열 재사용 추정기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 선택 오프테이크 덮어쓰기
    #[arg(long, value_enum)]
    offtake: Option<OfftakeKind>,
    /// 소유 구조 덮어쓰기
    #[arg(long, value_enum)]
    ownership: Option<OwnershipModel>,
    /// IT 부하 [MW] 덮어쓰기
    #[arg(long)]
    it_load_mw: Option<f64>,
    /// DC 환수 온도 [°C] 덮어쓰기
    #[arg(long)]
    return_temp_c: Option<f64>,
    /// 전체 결과를 JSON으로 출력
    #[arg(long)]
    json: bool,
    /// 메뉴 방식으로 실행
    #[arg(long)]
    interactive: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 계산을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(kind) = cli.offtake {
        cfg.scenario.selected_offtake = kind;
    }
    if let Some(model) = cli.ownership {
        cfg.scenario.ownership = model;
    }
    if let Some(mw) = cli.it_load_mw {
        cfg.scenario.it_load_mw = mw;
    }
    if let Some(t) = cli.return_temp_c {
        cfg.scenario.dc_return_temp_c = t;
    }
    // 기준 데이터가 잘못되었으면 계산 전에 실패한다
    let reference = app::load_reference(&cfg)?;
    if cli.interactive {
        app::run(&mut cfg, &cli.config, &reference)
    } else {
        app::run_once(&cfg, &reference, cli.json)
    }
}
