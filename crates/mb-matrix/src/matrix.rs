use crate::error::{MatrixError, Result};

/// A dense square matrix of `f64` values.
///
/// Elements are stored contiguously in row-major order: cell `(row, col)`
/// lives at `data[row * dim + col]`. A matrix is a plain value with no
/// shared state; it is mutated only while being built and treated as
/// read-only by every operation that consumes it.
///
/// `dim = 0` is valid and denotes the empty matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled `dim` x `dim` matrix.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the element count `dim * dim` overflows.
    pub fn zeros(dim: usize) -> Result<Self> {
        let n = element_count(dim)?;
        Ok(Matrix {
            dim,
            data: vec![0.0; n],
        })
    }

    /// Create the `dim` x `dim` identity matrix.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the element count `dim * dim` overflows.
    pub fn identity(dim: usize) -> Result<Self> {
        let mut m = Matrix::zeros(dim)?;
        for i in 0..dim {
            m.data[i * dim + i] = 1.0;
        }
        Ok(m)
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `data.len() != dim * dim`.
    pub fn from_vec(dim: usize, data: Vec<f64>) -> Result<Self> {
        let n = element_count(dim)?;
        if data.len() != n {
            return Err(MatrixError::InvalidArgument(format!(
                "data length {} does not match {}x{} matrix ({} elements)",
                data.len(),
                dim,
                dim,
                n
            )));
        }
        Ok(Matrix { dim, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell in strict
    /// row-major order: row 0 left to right, then row 1, and so on.
    ///
    /// The visit order is part of the contract; seeded generation relies on
    /// it to draw values in a fixed sequence.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the element count `dim * dim` overflows.
    pub fn from_fn<F>(dim: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let n = element_count(dim)?;
        let mut data = Vec::with_capacity(n);
        for row in 0..dim {
            for col in 0..dim {
                data.push(f(row, col));
            }
        }
        Ok(Matrix { dim, data })
    }

    /// Side length of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of elements (`dim * dim`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for the 0 x 0 matrix.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `(row, col)`, or `None` if either index is
    /// out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.dim && col < self.dim {
            Some(self.data[row * self.dim + col])
        } else {
            None
        }
    }

    /// Row-major view of the underlying data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.dim && col < self.dim,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.dim,
            self.dim
        );
        &self.data[row * self.dim + col]
    }
}

/// Element count of a `dim` x `dim` matrix, guarding `dim * dim` overflow.
fn element_count(dim: usize) -> Result<usize> {
    dim.checked_mul(dim).ok_or_else(|| {
        MatrixError::InvalidArgument(format!("dimension {} overflows element count", dim))
    })
}
