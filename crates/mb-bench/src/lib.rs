//! Benchmark harness for the naive matrix multiplication kernel.
//!
//! The library half exists so the timing loop, report rendering, and
//! memory sampling stay unit-testable; the `mb-bench` binary is a thin
//! CLI over [`run`] and [`render`].

pub mod config;
pub mod error;
pub mod memory;
pub mod report;
pub mod runner;

// Re-export the pieces the binary and external callers need.
pub use config::{BenchConfig, OutputFormat};
pub use error::{BenchError, Result};
pub use report::{render, BenchResult};
pub use runner::run;
