//! Multiply kernels over a row range of the result matrix.
//!
//! Both variants compute `C[i,j] = Σ_k A[i,k] · B[k,j]` for the rows of one
//! [`RowRange`]; they differ only in how the second operand is walked:
//!
//! - [`multiply_rows`] reads B by column, jumping `d` elements between
//!   consecutive terms of the inner sum. This is the deliberately
//!   cache-unfriendly baseline.
//! - [`multiply_rows_transposed`] reads a precomputed Bᵀ by row, so both
//!   operands are walked sequentially. One transpose pass buys the locality;
//!   no further blocking is done.
//!
//! Kernels receive `c_rows`, the disjoint block of C holding exactly the
//! rows of their range: reads of A use global row indices, writes into
//! `c_rows` use range-local offsets. They are pure and reentrant, so
//! concurrent invocation over disjoint ranges is safe without locks.

use crate::partition::RowRange;

/// Selects which multiply variant a backend dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Strided column access into B.
    Direct,
    /// Sequential row access into a precomputed Bᵀ.
    Transposed,
}

impl Kernel {
    /// Runs the selected variant. For [`Kernel::Transposed`], `b` must be
    /// the transpose of the original second operand.
    pub fn run(self, a: &[f64], b: &[f64], c_rows: &mut [f64], d: usize, rows: RowRange) {
        match self {
            Kernel::Direct => multiply_rows(a, b, c_rows, d, rows),
            Kernel::Transposed => multiply_rows_transposed(a, b, c_rows, d, rows),
        }
    }
}

impl std::str::FromStr for Kernel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Kernel::Direct),
            "transposed" => Ok(Kernel::Transposed),
            other => Err(format!("unknown kernel '{}'", other)),
        }
    }
}

/// Direct variant: A row-sequential, B column-strided (stride `d`).
///
/// `c_rows` must hold exactly `rows.len() * d` elements, the rows
/// `[rows.start, rows.end)` of C.
pub fn multiply_rows(a: &[f64], b: &[f64], c_rows: &mut [f64], d: usize, rows: RowRange) {
    debug_assert_eq!(c_rows.len(), rows.len() * d);

    for i in rows.start..rows.end {
        let a_row = &a[i * d..(i + 1) * d];
        let c_row = &mut c_rows[(i - rows.start) * d..(i - rows.start + 1) * d];
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum += a_ik * b[k * d + j];
            }
            *c_ij = sum;
        }
    }
}

/// Transposed variant: `C[i,j] = Σ_k A[i,k] · Bᵀ[j,k]`, both operands walked
/// row-sequentially.
pub fn multiply_rows_transposed(a: &[f64], bt: &[f64], c_rows: &mut [f64], d: usize, rows: RowRange) {
    debug_assert_eq!(c_rows.len(), rows.len() * d);

    for i in rows.start..rows.end {
        let a_row = &a[i * d..(i + 1) * d];
        let c_row = &mut c_rows[(i - rows.start) * d..(i - rows.start + 1) * d];
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            let bt_row = &bt[j * d..(j + 1) * d];
            let mut sum = 0.0;
            for (a_ik, bt_jk) in a_row.iter().zip(bt_row.iter()) {
                sum += a_ik * bt_jk;
            }
            *c_ij = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transpose;
    use crate::EPSILON;

    fn full_range(d: usize) -> RowRange {
        RowRange { start: 0, end: d }
    }

    #[test]
    fn test_identity_product() {
        let d = 3;
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let identity = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let mut c = vec![0.0; d * d];

        multiply_rows(&a, &identity, &mut c, d, full_range(d));
        assert_eq!(c, a);
    }

    #[test]
    fn test_known_2x2_product() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];

        multiply_rows(&a, &b, &mut c, 2, full_range(2));
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_scalar_case() {
        let a = vec![3.0];
        let b = vec![4.0];
        let mut c = vec![0.0];

        multiply_rows(&a, &b, &mut c, 1, full_range(1));
        assert_eq!(c, vec![12.0]);

        let mut ct = vec![0.0];
        multiply_rows_transposed(&a, &b, &mut ct, 1, full_range(1));
        assert_eq!(ct, vec![12.0]);
    }

    #[test]
    fn test_partial_range_writes_local_offsets() {
        let d = 4;
        let a: Vec<f64> = (0..d * d).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..d * d).map(|i| (i % 5) as f64).collect();

        let mut c_full = vec![0.0; d * d];
        multiply_rows(&a, &b, &mut c_full, d, full_range(d));

        // Recompute rows 2..4 into a detached block and compare.
        let rows = RowRange { start: 2, end: 4 };
        let mut block = vec![0.0; rows.len() * d];
        multiply_rows(&a, &b, &mut block, d, rows);
        assert_eq!(block, c_full[2 * d..4 * d]);
    }

    #[test]
    fn test_direct_and_transposed_agree() {
        let d = 7;
        let a: Vec<f64> = (0..d * d).map(|i| (i as f64).sin()).collect();
        let b: Vec<f64> = (0..d * d).map(|i| (i as f64).cos()).collect();
        let mut bt = vec![0.0; d * d];
        transpose(&b, &mut bt, d);

        let mut c_direct = vec![0.0; d * d];
        let mut c_trans = vec![0.0; d * d];
        multiply_rows(&a, &b, &mut c_direct, d, full_range(d));
        multiply_rows_transposed(&a, &bt, &mut c_trans, d, full_range(d));

        for (x, y) in c_direct.iter().zip(c_trans.iter()) {
            assert!((x - y).abs() <= EPSILON, "{} != {}", x, y);
        }
    }

    #[test]
    fn test_empty_range_is_a_noop() {
        let d = 3;
        let a = vec![1.0; d * d];
        let b = vec![1.0; d * d];
        let mut block: Vec<f64> = vec![];

        multiply_rows(&a, &b, &mut block, d, RowRange { start: 1, end: 1 });
        assert!(block.is_empty());
    }

    #[test]
    fn test_kernel_dispatch() {
        let d = 2;
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut bt = vec![0.0; 4];
        transpose(&b, &mut bt, d);

        let mut c1 = vec![0.0; 4];
        let mut c2 = vec![0.0; 4];
        Kernel::Direct.run(&a, &b, &mut c1, d, full_range(d));
        Kernel::Transposed.run(&a, &bt, &mut c2, d, full_range(d));
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_kernel_from_str() {
        assert_eq!("direct".parse::<Kernel>().unwrap(), Kernel::Direct);
        assert_eq!("transposed".parse::<Kernel>().unwrap(), Kernel::Transposed);
        assert!("blocked".parse::<Kernel>().is_err());
    }
}
