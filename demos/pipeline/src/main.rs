//! Filter positive numbers, round them, and sum them up.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --bin functools-pipeline -- --values=-5.3,2.8,-1.0,8.9,0.1
//! ```
//!
//! ```txt
//! [-5.3, 2.8, -1.0, 8.9, 0.1] filtered by positive numbers, rounded and summed up is 12
//! ```

use clap::{value_parser, Arg, Command};
use pipeline::{parse_level, parse_values, report, summarize, DEFAULT_VALUES};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Parse arguments
    let matches = Command::new("functools-pipeline")
        .about("filter positive numbers, round them, and sum them up")
        .arg(
            Arg::new("values")
                .long("values")
                .required(false)
                .allow_hyphen_values(true)
                .value_delimiter(',')
                .default_values(DEFAULT_VALUES)
                .value_parser(value_parser!(String))
                .help("Comma-delimited numbers to summarize"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .required(false)
                .allow_negative_numbers(true)
                .default_value("0")
                .value_parser(value_parser!(f64))
                .help("Only values strictly greater than this are kept"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .required(false)
                .default_value("info")
                .value_parser(value_parser!(String))
                .help("Maximum log level (trace, debug, info, warn, error)"),
        )
        .get_matches();

    // Create logger
    let level = matches.get_one::<String>("log-level").unwrap();
    let level = match parse_level(level) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Parse values
    let raw: Vec<String> = matches
        .get_many::<String>("values")
        .unwrap()
        .cloned()
        .collect();
    let values = match parse_values(&raw) {
        Ok(values) => values,
        Err(err) => {
            error!(?err, "failed to parse values");
            return ExitCode::FAILURE;
        }
    };
    let threshold = *matches.get_one::<f64>("threshold").unwrap();
    info!(count = values.len(), threshold, "parsed values");

    // Run pipeline
    let summary = match summarize(&values, threshold) {
        Ok(summary) => summary,
        Err(err) => {
            error!(?err, "failed to summarize values");
            return ExitCode::FAILURE;
        }
    };
    info!(kept = ?summary.kept, rounded = ?summary.rounded, "summarized");
    println!("{}", report(&values, threshold, &summary));
    ExitCode::SUCCESS
}
