//! Sums the integers supplied on the command line and prints the total. Each computation emits
//! trace records describing its inputs and result, which are visible on stderr when the log level
//! is lowered to debug.

#![forbid(unsafe_code)]

mod logging;
mod sum;
mod trace;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Integers to sum. No arguments sums to 0.
    #[clap(value_name = "INT", allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Logging verbosity. Trace records for the computation are emitted at debug level, so they're
    /// suppressed unless this is lowered to "debug" or "trace".
    #[clap(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(args) {
        eprintln!("{} {:#}", "ERROR:".red(), error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    logging::init(args.log_level)?;
    let total = sum::sum_with_trace(&args.values, &trace::LogSink);
    println!("{total}");
    Ok(())
}
