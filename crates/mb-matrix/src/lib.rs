//! `mb-matrix` - Square matrix kernels for matrix-benchmark.
//!
//! This crate provides:
//! - A row-major square `Matrix` container with value semantics
//! - Seeded, reproducible random matrix generation
//! - The naive O(n³) multiplication the harness measures
//!
//! Both operations are pure and synchronous with no shared state, so they
//! may be called concurrently on disjoint inputs without locking.

pub mod error;
pub mod generate;
pub mod matrix;
pub mod multiply;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use generate::random_matrix;
pub use matrix::Matrix;
pub use multiply::multiply;
