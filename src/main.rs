use anyhow::Context;
use clap::Parser;
use roster_manager::core::ConfigProvider;
use roster_manager::utils::logger;
use roster_manager::{AppConfig, CliConfig, Console, CsvRosterStore, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定錯誤時仍需日誌輸出，先用預設值初始化
    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose, config.log_filter());
    tracing::debug!("Resolved config: {:?}", config);
    tracing::info!("📁 Using roster file: {}", config.roster_path());

    let store = CsvRosterStore::new(config.roster_path());
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut session = Session::new(store, console)
        .with_context(|| format!("failed to load roster from {}", config.roster_path()))?;
    session.run().context("interactive session failed")?;

    Ok(())
}
