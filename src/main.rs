use clap::Parser;
use heatpump_cost_toolbox::{app, config, telemetry, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    telemetry::init_tracing(&cfg.log_filter);
    app::run(cli, &cfg)?;
    Ok(())
}
