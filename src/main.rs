use clap::Parser;
use sandbox_explorer::utils::error::{ErrorSeverity, SandboxError};
use sandbox_explorer::utils::logger;
use sandbox_explorer::{CliConfig, SandboxEngine};

fn exit_with(e: &SandboxError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 設定檔也可能要求 JSON 日誌，所以先解析設定再初始化
    let resolved = config.resolve_settings();
    let log_json = match &resolved {
        Ok(settings) => settings.log_json,
        Err(_) => config.log_json,
    };

    if log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting sandbox-explorer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match resolved {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let engine = match SandboxEngine::new(settings) {
        Ok(engine) => engine,
        Err(e) => exit_with(&e),
    };

    match engine.run(&config.path, config.format).await {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with(&e),
    }

    Ok(())
}
