use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use pricehist::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for pricehist::AppCommand {
    fn from(cmd: Commands) -> pricehist::AppCommand {
        match cmd {
            Commands::Currencies => pricehist::AppCommand::Currencies,
            Commands::Search { query } => pricehist::AppCommand::Search { query },
            Commands::History { currency } => pricehist::AppCommand::History { currency },
            Commands::Top { limit } => pricehist::AppCommand::Top { limit },
            Commands::Summary => pricehist::AppCommand::Summary,
            Commands::Rate { from, to } => pricehist::AppCommand::Rate { from, to },
            Commands::Value { symbol, amount } => pricehist::AppCommand::Value { symbol, amount },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List all currencies with their latest price
    Currencies,
    /// Search currencies by symbol (case-insensitive)
    Search { query: String },
    /// Show the price history of one currency
    History { currency: String },
    /// Show top performers
    Top {
        /// Number of currencies to consider
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show latest price and change for every currency
    Summary,
    /// Quote the exchange rate between two tokens
    Rate { from: String, to: String },
    /// Value an amount of a token in USD
    Value { symbol: String, amount: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => pricehist::cli::setup::setup(),
        Some(cmd) => pricehist::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
