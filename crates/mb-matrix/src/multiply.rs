use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Compute the matrix product `C = A * B` for two square matrices of equal
/// dimension using the canonical O(n³) definition:
///
/// ```text
/// C[i][j] = sum over k of A[i][k] * B[k][j]
/// ```
///
/// Each output cell accumulates its partial products in increasing `k`
/// starting from 0.0. Floating-point addition is not associative, so this
/// fixed accumulation order is what makes the result reproducible
/// bit-for-bit.
///
/// Inputs are not mutated; the result is freshly allocated. Multiplying two
/// 0 x 0 matrices yields the empty matrix.
///
/// # Errors
/// Returns `DimensionMismatch` if the operand dimensions differ.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let n = a.dim();
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut out = vec![0.0; lhs.len()];

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += lhs[i * n + k] * rhs[k * n + j];
            }
            out[i * n + j] = sum;
        }
    }

    Matrix::from_vec(n, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::random_matrix;

    #[test]
    fn test_multiply_basic() {
        // [1,2;3,4] * [5,6;7,8] = [19,22;43,50]
        let a = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_multiply_identity_is_exact() {
        let a = random_matrix(64, 42).unwrap();
        let i = Matrix::identity(64).unwrap();
        assert_eq!(multiply(&a, &i).unwrap(), a);
        assert_eq!(multiply(&i, &a).unwrap(), a);
    }

    #[test]
    fn test_multiply_zero_matrix() {
        let a = random_matrix(8, 43).unwrap();
        let z = Matrix::zeros(8).unwrap();
        assert_eq!(multiply(&z, &a).unwrap(), z);
        assert_eq!(multiply(&a, &z).unwrap(), z);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = Matrix::zeros(2).unwrap();
        let b = Matrix::zeros(3).unwrap();
        let err = multiply(&a, &b).unwrap_err();
        assert_eq!(err, MatrixError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_multiply_empty() {
        let a = Matrix::zeros(0).unwrap();
        let b = Matrix::zeros(0).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_multiply_matches_per_cell_accumulation() {
        let a = random_matrix(5, 1).unwrap();
        let b = random_matrix(5, 2).unwrap();
        let c = multiply(&a, &b).unwrap();

        for i in 0..5 {
            for j in 0..5 {
                let mut sum = 0.0;
                for k in 0..5 {
                    sum += a[(i, k)] * b[(k, j)];
                }
                assert_eq!(c[(i, j)], sum);
            }
        }
    }

    #[test]
    fn test_multiply_allocates_fresh_result() {
        let a = random_matrix(4, 9).unwrap();
        let b = random_matrix(4, 10).unwrap();
        let before_a = a.clone();
        let before_b = b.clone();
        let _ = multiply(&a, &b).unwrap();
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }
}
