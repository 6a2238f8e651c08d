use clap::Parser;
use small_calc::app::runner::{exit_code, run};
use small_calc::utils::{logger, validation::Validate};
use small_calc::{CalcConfig, CalcError, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入配置檔 (可選)
    let config = match cli.config.as_deref() {
        Some(path) => match CalcConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => exit_with(&e, exit_code(&e)),
        },
        None => CalcConfig::default(),
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose || config.logging.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e, exit_code(&e));
    }

    match run(cli.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {}", e);
            exit_with(&e, exit_code(&e));
        }
    }
}

fn exit_with(e: &CalcError, code: i32) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(code);
}
