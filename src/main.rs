use clap::Parser;
use serde_json::Value;
use std::process::ExitCode;
use thali_kit::utils::{logger, validation::Validate};
use thali_kit::{
    aggregate_stats, describe, generate_receipt, search, CliConfig, KitError, MenuCommand,
    MenuConfig, MenuProvider, Result,
};

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🍽️ Starting thali-kit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        return ExitCode::from(1);
    }

    // 載入並驗證菜單
    let menu = match MenuConfig::from_file(&config.menu) {
        Ok(menu) => menu,
        Err(e) => {
            eprintln!("❌ Failed to load menu '{}': {}", config.menu, e.user_friendly_message());
            eprintln!("💡 Make sure the file exists and is valid TOML or JSON");
            return ExitCode::from(1);
        }
    };
    if let Err(e) = menu.validate() {
        tracing::error!("❌ Menu validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        return ExitCode::from(1);
    }

    match run(&config.command, &menu) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            if e.is_invalid_input() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn run<P: MenuProvider>(command: &MenuCommand, menu: &P) -> Result<String> {
    let thalis = Value::Array(menu.thalis().to_vec());

    match command {
        MenuCommand::Describe { name } => {
            let lines = menu
                .thalis()
                .iter()
                .filter(|thali| match name {
                    Some(wanted) => thali.get("name").and_then(Value::as_str) == Some(wanted.as_str()),
                    None => true,
                })
                .map(describe)
                .collect::<Result<Vec<_>>>()?;

            if let (true, Some(wanted)) = (lines.is_empty(), name) {
                return Err(KitError::invalid_value("name", wanted, "no thali with this name"));
            }
            Ok(lines.join("\n"))
        }
        MenuCommand::Stats => Ok(serde_json::to_string_pretty(&aggregate_stats(&thalis)?)?),
        MenuCommand::Search { query } => {
            Ok(serde_json::to_string_pretty(&search(&thalis, query)?)?)
        }
        MenuCommand::Receipt { customer } => {
            let customer = customer
                .as_deref()
                .or(menu.customer_name())
                .ok_or_else(|| KitError::MissingField {
                    field: "customer".to_string(),
                })?;
            generate_receipt(customer, &thalis)
        }
    }
}
