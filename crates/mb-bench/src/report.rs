use serde::Serialize;

use crate::config::{BenchConfig, OutputFormat};
use crate::error::Result;

/// Result of measuring one matrix size.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub size: usize,
    pub iterations: u32,
    pub warmup_iterations: u32,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub total_ms: f64,
    pub gflops: f64,
    /// Theoretical footprint of the two operands plus the product, in MB.
    pub matrices_mb: f64,
    /// RSS growth across operand allocation, when the signal is usable.
    pub alloc_delta_kb: Option<u64>,
    /// RSS after the measured iterations.
    pub rss_after_kb: Option<u64>,
    /// High-water RSS of the whole process so far.
    pub peak_rss_kb: Option<u64>,
}

pub const CSV_HEADER: &str = "size,iterations,mean_ms,min_ms,max_ms,total_ms,gflops,\
                              matrices_mb,alloc_delta_kb,rss_after_kb,peak_rss_kb";

/// Render results in the selected format, ready to print on stdout.
pub fn render(
    results: &[BenchResult],
    config: &BenchConfig,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results, config)),
        OutputFormat::Csv => Ok(render_csv(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

fn render_csv(results: &[BenchResult]) -> String {
    let mut out = String::from(CSV_HEADER);
    for r in results {
        out.push('\n');
        out.push_str(&csv_row(r));
    }
    out
}

/// One result as a CSV row; unavailable memory samples render as `N/A`.
fn csv_row(r: &BenchResult) -> String {
    format!(
        "{},{},{:.6},{:.6},{:.6},{:.6},{:.3},{:.2},{},{},{}",
        r.size,
        r.iterations,
        r.mean_ms,
        r.min_ms,
        r.max_ms,
        r.total_ms,
        r.gflops,
        r.matrices_mb,
        opt_kb(r.alloc_delta_kb),
        opt_kb(r.rss_after_kb),
        opt_kb(r.peak_rss_kb),
    )
}

fn render_text(results: &[BenchResult], config: &BenchConfig) -> String {
    let mut out = String::new();
    out.push_str("========================================\n");
    out.push_str("Matrix Multiplication Benchmark\n");
    out.push_str("========================================\n");
    out.push_str("Algorithm: naive O(n^3)\n");
    out.push_str("Element type: f64 (8 bytes)\n");
    out.push_str(&format!(
        "Warmup iterations: {}, measured iterations: {}\n",
        config.warmup_iterations, config.iterations
    ));
    out.push_str("========================================\n");

    for r in results {
        out.push_str(&format!("\n--- Results for {}x{} ---\n", r.size, r.size));
        out.push_str(&format!(
            "Matrix memory: {:.2} MB theoretical, allocation delta {}\n",
            r.matrices_mb,
            opt_mb(r.alloc_delta_kb),
        ));
        out.push_str(&format!(
            "Process RSS: {} after run, {} peak\n",
            opt_mb(r.rss_after_kb),
            opt_mb(r.peak_rss_kb),
        ));
        out.push_str(&format!(
            "Average time: {:.3} ms (min {:.3} ms, max {:.3} ms, total {:.3} ms)\n",
            r.mean_ms, r.min_ms, r.max_ms, r.total_ms
        ));
        out.push_str(&format!("GFLOPS: {:.3}\n", r.gflops));
    }
    out
}

fn opt_kb(v: Option<u64>) -> String {
    v.map_or("N/A".to_string(), |kb| kb.to_string())
}

/// Render a kB sample as MB text, or `N/A` when unavailable.
fn opt_mb(v: Option<u64>) -> String {
    v.map_or("N/A".to_string(), |kb| {
        format!("{:.2} MB", kb as f64 / 1024.0)
    })
}
