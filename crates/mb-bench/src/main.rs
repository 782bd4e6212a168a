//! Quick benchmark sweep over the default matrix sizes.
//!
//! Usage: `mb-bench [text|csv|json] [iterations]`
//!
//! The Criterion benchmarks under `benches/` produce the statistically
//! rigorous numbers; this binary is the one-shot sweep for eyeballing
//! throughput and memory on the current machine.

use std::env;
use std::process;

use mb_bench::{render, run, BenchConfig, OutputFormat};

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = args
        .get(1)
        .map(|arg| OutputFormat::from_arg(arg))
        .unwrap_or(OutputFormat::Text);

    let mut config = BenchConfig::default();
    if let Some(arg) = args.get(2) {
        match parse_iterations(arg) {
            Some(n) => config.iterations = n,
            None => {
                eprintln!("invalid iteration count: {arg} (expected a positive integer)");
                eprintln!("usage: mb-bench [text|csv|json] [iterations]");
                process::exit(2);
            }
        }
    }

    let results = match run(&config) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("benchmark failed: {err}");
            process::exit(1);
        }
    };

    match render(&results, &config, format) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("failed to render results: {err}");
            process::exit(1);
        }
    }
}

/// Parse the iteration-count argument. Zero is rejected; a sweep with no
/// measured iterations would report nothing.
fn parse_iterations(arg: &str) -> Option<u32> {
    match arg.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}
