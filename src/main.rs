use capability_demo::utils::{logger, validation::Validate};
use capability_demo::{CapabilityRegistry, CliConfig, DemoRunner, OutputFormat, StdConsole};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting capability-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code().max(1));
    }

    let result = config.resolve().and_then(|(demos, settings)| {
        let console = StdConsole::new(config.format);
        let mut runner =
            DemoRunner::new(CapabilityRegistry::standard(), console).with_settings(settings);
        runner.run_all(&demos)
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
