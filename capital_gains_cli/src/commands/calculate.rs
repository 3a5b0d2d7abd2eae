use std::path::PathBuf;

use anyhow::{Context, Result};
use capital_gains_api::{CalculateRequest, Client};
use clap::{ArgAction, Args};

use crate::output::{print_saved, OutputFormat, SavedReport};
use crate::validation;

#[derive(Args)]
pub struct CalculateArgs {
    /// Transactions CSV file
    #[arg(long)]
    pub transactions: PathBuf,

    /// Fair market value prices (.json)
    #[arg(long)]
    pub fmv: Option<PathBuf>,

    /// Tax rates file
    #[arg(long)]
    pub tax_rates: Option<PathBuf>,

    /// Ask the backend for a verbose report
    #[arg(long)]
    pub verbose_report: bool,

    /// Only match sells against buys from the same source
    #[arg(long)]
    pub same_source_only: bool,

    /// Use simple FIFO lot matching
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub simple_fifo_mode: bool,

    /// Include a dividends report
    #[arg(long)]
    pub include_dividends: bool,

    /// Days after which a gain is long-term
    #[arg(long, default_value_t = CalculateRequest::DEFAULT_LTCG_THRESHOLD_DAYS)]
    pub ltcg_threshold_days: u32,

    /// Output file (defaults to the name the server suggests)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: &CalculateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let request = build_request(args)?;
    tracing::info!("Uploading {}", args.transactions.display());

    let blob = client.calculate_request(request).await?;

    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(blob.suggested_file_name()));
    tokio::fs::write(&path, &blob.data)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    print_saved(&SavedReport::new(&path, &blob), format);
    Ok(())
}

fn build_request(args: &CalculateArgs) -> Result<CalculateRequest> {
    let days = validation::validate_ltcg_threshold_days(args.ltcg_threshold_days)?;
    let transactions = validation::load_upload(&args.transactions, Some("csv"), "transactions")?;

    let mut request = CalculateRequest::new(transactions)
        .with_verbose(args.verbose_report)
        .with_same_source_only(args.same_source_only)
        .with_simple_fifo_mode(args.simple_fifo_mode)
        .with_include_dividends(args.include_dividends)
        .with_ltcg_threshold_days(days);

    if let Some(path) = &args.fmv {
        request = request.with_fmv(validation::load_upload(path, Some("json"), "fmv")?);
    }
    if let Some(path) = &args.tax_rates {
        request = request.with_tax_rates(validation::load_upload(path, None, "tax rates")?);
    }
    Ok(request)
}
