//! TripSync split preview.
//!
//! Runs the split engine locally so an expense can be checked before it is
//! submitted.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tripsync_core::currency::{
    convert_minor, currency_meta, format_minor, is_known_currency, major_to_minor,
};
use tripsync_core::split::{SplitResult, compute_currency_aware_splits};
use tripsync_shared::AppConfig;
use tripsync_shared::config::LogConfig;

#[derive(Parser, Debug)]
#[command(name = "tripsync-preview")]
#[command(about = "Preview how a shared trip expense is split and converted")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an expense among the payer and debtors
    #[command(alias = "s")]
    Split(SplitArgs),
    /// Convert an amount in minor units between currencies
    #[command(alias = "c")]
    Convert(ConvertArgs),
    /// Show registry metadata for a currency code
    Currency {
        /// Currency code, e.g. USD
        code: String,
    },
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Expense total in major units, e.g. 100.00
    #[arg(long)]
    total: Decimal,
    /// Currency the expense was paid in (defaults to the configured currency)
    #[arg(long)]
    currency: Option<String>,
    /// Currency debtors settle in (defaults to the expense currency)
    #[arg(long)]
    target: Option<String>,
    /// Target units per one source unit
    #[arg(long, default_value = "1")]
    rate: String,
    /// Debtor id, repeat for each debtor in order
    #[arg(long = "debtor", required = true)]
    debtors: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Amount in source minor units
    #[arg(long)]
    amount: Decimal,
    /// Source currency code
    #[arg(long)]
    from: String,
    /// Target currency code
    #[arg(long)]
    to: String,
    /// Target units per one source unit
    #[arg(long)]
    rate: String,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.log);

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    match cli.command {
        Command::Split(args) => run_split(args, &config.preview.default_currency),
        Command::Convert(args) => run_convert(&args),
        Command::Currency { code } => {
            show_currency(&code);
            Ok(())
        }
    }
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout is reserved for results
    if log.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run_split(args: SplitArgs, default_currency: &str) -> anyhow::Result<()> {
    let source_code = args.currency.as_deref().unwrap_or(default_currency);
    let target_code = args.target.as_deref().unwrap_or(source_code);
    warn_if_unknown(source_code);
    warn_if_unknown(target_code);

    let source = currency_meta(source_code);
    let total = major_to_minor(args.total, &source)?;

    let result = compute_currency_aware_splits(
        Decimal::from(total),
        &args.debtors,
        source_code,
        target_code,
        &args.rate,
    )?;
    info!(
        debtors = result.shares.len(),
        total_target = %result.total_target_minor_units,
        "Split computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_split(&result);
    }
    Ok(())
}

fn print_split(result: &SplitResult) {
    let source = currency_meta(result.source_currency.as_str());
    let target = currency_meta(result.target_currency.as_str());
    let width = result
        .shares
        .iter()
        .map(|s| s.debtor_id.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("payer".len());

    println!(
        "{} -> {} @ {}",
        result.source_currency, result.target_currency, result.fx_rate
    );
    for share in &result.shares {
        println!(
            "  {:<width$}  {:>16}  {:>16}",
            share.debtor_id.as_str(),
            format_minor(share.source_minor_units, &source),
            format_minor(share.target_minor_units, &target),
        );
    }
    println!(
        "  {:<width$}  {:>16}",
        "payer",
        format_minor(result.payer_share_minor_units, &source),
    );
    println!(
        "Total owed: {} ({} paid)",
        format_minor(result.total_target_minor_units, &target),
        format_minor(result.total_source_minor_units, &source),
    );
}

fn run_convert(args: &ConvertArgs) -> anyhow::Result<()> {
    warn_if_unknown(&args.from);
    warn_if_unknown(&args.to);
    let source = currency_meta(&args.from);
    let target = currency_meta(&args.to);

    let converted = convert_minor(args.amount, source.exponent, target.exponent, &args.rate)?;
    println!("{converted} ({})", format_minor(converted, &target));
    Ok(())
}

fn show_currency(code: &str) {
    warn_if_unknown(code);
    let meta = currency_meta(code);
    println!(
        "{} exponent={} symbol={}",
        meta.code, meta.exponent, meta.symbol
    );
}

fn warn_if_unknown(code: &str) {
    if !is_known_currency(code) {
        warn!(code, "Unknown currency, assuming two decimal places");
    }
}
