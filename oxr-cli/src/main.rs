//! OXR CLI
//!
//! Command-line interface for the Open Exchange Rates API.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oxr_client::{ApiResult, ExchangeRateClient, HttpTransport, ReqwestTransport};

use crate::config::{Settings, parse_date};

#[derive(Parser)]
#[command(name = "oxr")]
#[command(author, version, about = "Open Exchange Rates CLI client", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest exchange rates
    Latest {
        /// Currency codes to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
        /// Base currency for this call only
        #[arg(long)]
        base: Option<String>,
    },
    /// List all available currencies
    Currencies,
    /// Convert a value between two currencies
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Currency to convert from
        from: String,
        /// Currency to convert to
        to: String,
    },
    /// Rates on a past day, against the configured base currency
    Historical {
        /// Day in YYYY-MM-DD form
        #[arg(value_parser = parse_date)]
        date: chrono::NaiveDate,
    },
}

fn init_tracing() {
    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,oxr_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run<T: HttpTransport>(client: &ExchangeRateClient<T>, command: Commands) -> ApiResult {
    match command {
        Commands::Latest { symbols, base } => {
            // Filter out empty strings left by a trailing comma
            let symbols: Vec<&str> = symbols
                .iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            client.latest(&symbols, base.as_deref()).await
        }
        Commands::Currencies => client.currencies().await,
        Commands::Convert { value, from, to } => client.convert(value, &from, &to).await,
        Commands::Historical { date } => client.historical(date).await,
    }
}

/// Process exit status for a printed result.
fn exit_code(result: &ApiResult) -> i32 {
    if result.is_error() { 1 } else { 0 }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = ExchangeRateClient::new(
        cli.settings.app_id.clone(),
        cli.settings.api_options(),
        ReqwestTransport::new(),
    )?;

    tracing::debug!(?client, "Client configured");

    let result = run(&client, cli.command).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
