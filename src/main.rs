use anyhow::Context;
use clap::Parser;
use small_converter::domain::ports::ConfigProvider;
use small_converter::utils::{logger, validation::Validate};
use small_converter::{CliConfig, ConverterEngine, LocalStorage, Session, TomlConfig};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-converter");

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let file = match TomlConfig::from_file(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };
        if let Err(e) = file.validate() {
            tracing::error!("❌ Config file validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
        config = config.merge_file(&file);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = ConverterEngine::new(storage, &config);
    let mut session = Session::new(engine);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("terminal input/output failed")?;

    tracing::info!(
        "Session finished with {} calculations",
        session.engine().history().total_count()
    );

    Ok(())
}
