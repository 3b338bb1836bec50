//! Dense linear solver for the normal equations.

use forecast_spi::{ForecastError, Result};

const PIVOT_EPSILON: f64 = 1e-10;

/// Solve `A X = B` by Gauss-Jordan elimination with partial pivoting.
///
/// `a` is `n x n` and `b` is `n x m`, both row-major. Returns `X` as `n x m`
/// row-major. A column whose pivot vanishes is left at zero.
pub(crate) fn solve(a: &[f64], b: &[f64], n: usize, m: usize) -> Result<Vec<f64>> {
    if a.len() != n * n || b.len() != n * m {
        return Err(ForecastError::NumericalError(format!(
            "dimension mismatch: A has {} entries, B has {}, expected {}x{} and {}x{}",
            a.len(),
            b.len(),
            n,
            n,
            n,
            m
        )));
    }

    let mut a = a.to_vec();
    let mut x = b.to_vec();
    let mut singular = vec![false; n];

    for i in 0..n {
        // Find pivot
        let mut max_row = i;
        for k in (i + 1)..n {
            if a[k * n + i].abs() > a[max_row * n + i].abs() {
                max_row = k;
            }
        }

        if max_row != i {
            for j in 0..n {
                a.swap(i * n + j, max_row * n + j);
            }
            for j in 0..m {
                x.swap(i * m + j, max_row * m + j);
            }
        }

        let pivot = a[i * n + i];
        if pivot.abs() < PIVOT_EPSILON {
            singular[i] = true;
            continue;
        }

        // Scale row
        for j in 0..n {
            a[i * n + j] /= pivot;
        }
        for j in 0..m {
            x[i * m + j] /= pivot;
        }

        // Eliminate column
        for k in 0..n {
            if k != i {
                let factor = a[k * n + i];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    a[k * n + j] -= factor * a[i * n + j];
                }
                for j in 0..m {
                    x[k * m + j] -= factor * x[i * m + j];
                }
            }
        }
    }

    for (i, _) in singular.iter().enumerate().filter(|(_, s)| **s) {
        for j in 0..m {
            x[i * m + j] = 0.0;
        }
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::NumericalError(
            "non-finite coefficient in least squares solution".to_string(),
        ));
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_identity() {
        let a = [1.0, 0.0, 0.0, 1.0];
        let b = [3.0, 4.0];
        let x = solve(&a, &b, 2, 1).unwrap();
        assert_eq!(x, vec![3.0, 4.0]);
    }

    #[test]
    fn test_solve_needs_pivoting() {
        // [0 1; 2 1] x = [1; 4] -> x = [1.5, 1]
        let a = [0.0, 1.0, 2.0, 1.0];
        let b = [1.0, 4.0];
        let x = solve(&a, &b, 2, 1).unwrap();
        assert!((x[0] - 1.5).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_multiple_right_hand_sides() {
        let a = [2.0, 0.0, 0.0, 4.0];
        let b = [2.0, 4.0, 8.0, 12.0];
        let x = solve(&a, &b, 2, 2).unwrap();
        assert_eq!(x, vec![1.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_solve_zero_column_gives_zero() {
        let a = [1.0, 0.0, 0.0, 0.0];
        let b = [5.0, 0.0];
        let x = solve(&a, &b, 2, 1).unwrap();
        assert_eq!(x, vec![5.0, 0.0]);
    }

    #[test]
    fn test_solve_dimension_mismatch() {
        let err = solve(&[1.0], &[1.0, 2.0], 2, 1).unwrap_err();
        assert!(matches!(err, ForecastError::NumericalError(_)));
    }
}
