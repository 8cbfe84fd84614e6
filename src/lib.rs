pub mod cli;
pub mod core;
pub mod providers;

use crate::core::PriceHistoryService;
use crate::core::config::AppConfig;
use crate::providers::SwitcheoFeed;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Currencies,
    Search { query: String },
    History { currency: String },
    Top { limit: Option<usize> },
    Summary,
    Rate { from: String, to: String },
    Value { symbol: String, amount: String },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Price history starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let service = PriceHistoryService::new(SwitcheoFeed::new(&config.switcheo())?);

    let pb = cli::ui::new_spinner("Fetching prices");
    let refreshed = service.refresh().await;
    pb.finish_and_clear();
    let snapshot = refreshed?;

    match command {
        AppCommand::Currencies => cli::currencies::run_list(&snapshot),
        AppCommand::Search { query } => cli::currencies::run_search(&snapshot, &query),
        AppCommand::History { currency } => cli::history::run(&snapshot, &currency)?,
        AppCommand::Top { limit } => cli::top::run(&snapshot, limit.unwrap_or(config.top_limit)),
        AppCommand::Summary => cli::currencies::run_summary(&snapshot),
        AppCommand::Rate { from, to } => cli::swap::run_rate(&snapshot, &from, &to)?,
        AppCommand::Value { symbol, amount } => {
            cli::swap::run_value(&snapshot, &symbol, &amount)?
        }
    }

    Ok(())
}
