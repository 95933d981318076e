use clap::Parser;
use miette::{IntoDiagnostic, Result};
use patterns_demo::application::script::{self, ScriptOptions};
use patterns_demo::domain::rates::RateTable;
use patterns_demo::interfaces::rates_file;
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount due in the payment demo, in USD
    #[arg(long, default_value = "100.0")]
    amount: Decimal,

    /// Pre-selected payment method (1 - card, 2 - crypto, 3 - wallet).
    /// When omitted, the choice is read from standard input.
    #[arg(long)]
    choice: Option<String>,

    /// JSON file with the initial currency rates (optional)
    #[arg(long)]
    rates: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rates = match cli.rates {
        Some(path) => rates_file::load_rates(&path).into_diagnostic()?,
        None => RateTable::with_defaults(),
    };

    let options = ScriptOptions {
        amount: cli.amount,
        choice: cli.choice,
        rates,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    script::run(options, stdin.lock(), stdout.lock()).into_diagnostic()?;

    Ok(())
}
