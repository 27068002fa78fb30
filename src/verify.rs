//! Independent correctness check of a computed product.
//!
//! The reference product is recomputed with an unoptimized triple loop
//! against the *original* B — never Bᵀ — so a broken transpose stage shows
//! up here as a mismatch. Intended for small dimensions; it is O(d³) serial
//! work on top of the measured run.

use crate::EPSILON;

/// At most this many mismatching cells are printed; the scan itself always
/// covers all d² cells.
pub const MAX_REPORTED: usize = 3;

/// Returns true iff every cell of `c` matches the reference product of `a`
/// and `b` within [`EPSILON`] absolute tolerance.
///
/// The first [`MAX_REPORTED`] mismatches are reported to stderr with their
/// coordinates and expected/actual values.
pub fn verify(a: &[f64], b: &[f64], c: &[f64], d: usize) -> bool {
    let mut mismatches = 0usize;

    for i in 0..d {
        for j in 0..d {
            let mut sum = 0.0;
            for k in 0..d {
                sum += a[i * d + k] * b[k * d + j];
            }
            if (sum - c[i * d + j]).abs() > EPSILON {
                if mismatches < MAX_REPORTED {
                    eprintln!(
                        "verification mismatch at ({}, {}): expected {:.6}, got {:.6}",
                        i,
                        j,
                        sum,
                        c[i * d + j]
                    );
                }
                mismatches += 1;
            }
        }
    }

    mismatches == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{multiply_rows, multiply_rows_transposed};
    use crate::matrix::transpose;
    use crate::partition::RowRange;

    fn product(a: &[f64], b: &[f64], d: usize) -> Vec<f64> {
        let mut c = vec![0.0; d * d];
        multiply_rows(a, b, &mut c, d, RowRange { start: 0, end: d });
        c
    }

    #[test]
    fn test_correct_product_passes() {
        let d = 4;
        let a: Vec<f64> = (0..d * d).map(|i| 1.0 + (i % 5) as f64).collect();
        let b: Vec<f64> = (0..d * d).map(|i| 5.0 + (i % 5) as f64).collect();
        let c = product(&a, &b, d);
        assert!(verify(&a, &b, &c, d));
    }

    #[test]
    fn test_perturbation_beyond_tolerance_fails() {
        let d = 3;
        let a: Vec<f64> = (0..d * d).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..d * d).map(|i| (i + 1) as f64).collect();
        let mut c = product(&a, &b, d);

        c[d + 2] += 1e-3;
        assert!(!verify(&a, &b, &c, d));
    }

    #[test]
    fn test_perturbation_within_tolerance_passes() {
        let d = 3;
        let a: Vec<f64> = (0..d * d).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..d * d).map(|i| (i + 1) as f64).collect();
        let mut c = product(&a, &b, d);

        c[0] += 1e-9;
        assert!(verify(&a, &b, &c, d));
    }

    #[test]
    fn test_many_mismatches_still_detected() {
        // Every cell wrong; reporting caps out but the verdict must not.
        let d = 5;
        let a = vec![1.0; d * d];
        let b = vec![1.0; d * d];
        let c = vec![-100.0; d * d];
        assert!(!verify(&a, &b, &c, d));
    }

    #[test]
    fn test_transposed_kernel_verifies_against_original_b() {
        let d = 4;
        let a: Vec<f64> = (0..d * d).map(|i| (i as f64) * 0.25).collect();
        let b: Vec<f64> = (0..d * d).map(|i| 9.0 - (i as f64) * 0.5).collect();
        let mut bt = vec![0.0; d * d];
        transpose(&b, &mut bt, d);

        let mut c = vec![0.0; d * d];
        multiply_rows_transposed(&a, &bt, &mut c, d, RowRange { start: 0, end: d });
        // Checked against B, not Bᵀ: validates the transpose stage too.
        assert!(verify(&a, &b, &c, d));
    }
}
