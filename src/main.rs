// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point.
//!
//! Usage:
//!     prime-pairs                     # five primes below 10000
//!     prime-pairs --bound 1000 -k 4   # four primes below 1000
//!     prime-pairs --all -v            # list every combination, log progress

use std::process::ExitCode;

use clap::Parser;

use prime_pair_search::config::{SearchConfig, DEFAULT_BOUND, DEFAULT_SIZE};
use prime_pair_search::logging::init_logging;
use prime_pair_search::search::{run_search, SearchOutcome, SearchReport};

/// Find the lowest sum for a set of primes in which any two primes
/// concatenate, in either order, to another prime.
#[derive(Parser, Debug)]
#[command(name = "prime-pairs")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Upper bound (inclusive) for candidate primes
    #[arg(short, long, default_value_t = DEFAULT_BOUND)]
    bound: u64,

    /// Number of primes in each set
    #[arg(short = 'k', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Print every set found, not just the lowest sum
    #[arg(short, long)]
    all: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_report(report: &SearchReport, all: bool) {
    println!(
        "Minimum sum calculation time: {} seconds",
        report.elapsed.as_secs_f64()
    );

    match &report.outcome {
        SearchOutcome::Found {
            min_sum,
            combination,
        } => {
            println!("Lowest sum: {}", min_sum);
            println!("Combination: {}", combination);
        }
        SearchOutcome::NoSolution => {
            println!("No prime number combinations found. Please increase the maximum bound.");
        }
    }

    if all {
        for combination in &report.combinations {
            println!("{} (sum {})", combination, combination.sum());
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SearchConfig::new(cli.bound, cli.size);
    match run_search(&config) {
        Ok(report) => {
            print_report(&report, cli.all);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
