//! Wall-clock measurement loop behind the `mb-bench` binary.
//!
//! Criterion owns the statistically rigorous numbers (see `benches/`);
//! this runner produces the quick sweep the binary prints, with warmup
//! iterations to populate caches before anything is timed.

use std::hint::black_box;
use std::time::{Duration, Instant};

use mb_matrix::{multiply, random_matrix};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::memory::{current_rss_kb, peak_rss_kb};
use crate::report::BenchResult;

/// Run the full sweep described by `config`, one result per size.
pub fn run(config: &BenchConfig) -> Result<Vec<BenchResult>> {
    config
        .sizes
        .iter()
        .map(|&size| run_size(size, config))
        .collect()
}

fn run_size(size: usize, config: &BenchConfig) -> Result<BenchResult> {
    let rss_before = current_rss_kb();
    let a = random_matrix(size, config.seed_a)?;
    let b = random_matrix(size, config.seed_b)?;
    let rss_after_alloc = current_rss_kb();
    let alloc_delta_kb = alloc_delta(rss_before, rss_after_alloc);

    for _ in 0..config.warmup_iterations {
        black_box(multiply(&a, &b)?);
    }

    let mut timings = Vec::with_capacity(config.iterations as usize);
    for _ in 0..config.iterations {
        let start = Instant::now();
        let product = multiply(&a, &b)?;
        let elapsed = start.elapsed();
        black_box(product);
        timings.push(elapsed);
    }

    let mut result = summarize(size, config, &timings);
    result.alloc_delta_kb = alloc_delta_kb;
    result.rss_after_kb = current_rss_kb();
    result.peak_rss_kb = peak_rss_kb();
    Ok(result)
}

/// RSS growth across operand allocation, in kB.
///
/// The delta goes negative when the allocator returns pages to the
/// kernel mid-run; `checked_sub` collapses that case to unavailable,
/// and a missing sample on either side stays unavailable.
fn alloc_delta(before: Option<u64>, after: Option<u64>) -> Option<u64> {
    match (before, after) {
        (Some(before), Some(after)) => after.checked_sub(before),
        _ => None,
    }
}

/// Fold raw timings into the per-size report row. Memory fields are
/// left unset; `run_size` fills them from the process counters.
fn summarize(size: usize, config: &BenchConfig, timings: &[Duration]) -> BenchResult {
    let total: Duration = timings.iter().sum();
    let min = timings.iter().copied().min().unwrap_or_default();
    let max = timings.iter().copied().max().unwrap_or_default();
    let count = timings.len().max(1) as f64;
    let mean_secs = total.as_secs_f64() / count;

    BenchResult {
        size,
        iterations: config.iterations,
        warmup_iterations: config.warmup_iterations,
        mean_ms: mean_secs * 1e3,
        min_ms: min.as_secs_f64() * 1e3,
        max_ms: max.as_secs_f64() * 1e3,
        total_ms: total.as_secs_f64() * 1e3,
        gflops: gflops(size, mean_secs),
        matrices_mb: matrices_mb(size),
        alloc_delta_kb: None,
        rss_after_kb: None,
        peak_rss_kb: None,
    }
}

/// Naive multiplication performs `2 * n^3` floating point operations
/// (one multiply and one add per inner step).
pub fn gflops(dim: usize, seconds: f64) -> f64 {
    let flops = 2.0 * (dim as f64).powi(3);
    flops / seconds / 1e9
}

/// Theoretical footprint of two operands plus the product, in MB.
pub fn matrices_mb(dim: usize) -> f64 {
    let elements = (dim as f64) * (dim as f64);
    3.0 * elements * std::mem::size_of::<f64>() as f64 / (1024.0 * 1024.0)
}
