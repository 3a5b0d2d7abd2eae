mod commands;
mod output;
mod validation;

use anyhow::Result;
use capital_gains_api::{BuildMode, Client};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "capgains")]
#[command(about = "Compute capital gains reports through the calculate API")]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value = "text", global = true)]
    output: String,

    /// Build mode used to resolve the base URL: development or production
    #[arg(long, global = true)]
    mode: Option<BuildMode>,

    /// Use this base URL instead of resolving one from the build mode
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload transactions and save the generated report
    Calculate(commands::calculate::CalculateArgs),
    /// Show the resolved API configuration
    Config,
}

/// Log filter: `RUST_LOG` plus info for this binary and the API crate.
fn log_filter(base: EnvFilter) -> Result<EnvFilter> {
    Ok(base
        .add_directive("capgains=info".parse()?)
        .add_directive("capital_gains_api=info".parse()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    // a missing .env is fine; it may set RUST_LOG, so load it first
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env())?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    let config = commands::config::resolve(cli.mode, cli.base_url.as_deref());

    match &cli.command {
        Commands::Calculate(args) => {
            let client = Client::new(config);
            commands::calculate::run(args, &client, &format).await?
        }
        Commands::Config => commands::config::run(&config, &format),
    }

    Ok(())
}
