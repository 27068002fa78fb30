//! Static row-range partitioning of the result matrix.
//!
//! `d` rows are divided among `workers` contiguous, pairwise-disjoint
//! half-open ranges whose union is exactly `[0, d)`. The split is computed
//! once and never rebalanced; reproducible work assignment matters more here
//! than fairness, since the point is to compare execution models on identical
//! partitions.

use crate::error::{invalid_partition, Result};

/// A half-open interval `[start, end)` of result-matrix rows assigned to one
/// worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row of the range (inclusive).
    pub start: usize,
    /// One past the last row of the range (exclusive).
    pub end: usize,
}

impl RowRange {
    /// Number of rows in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no rows. Empty ranges arise when the worker
    /// count exceeds the dimension and are valid no-op work units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Computes the row range for one worker out of `workers`.
///
/// Every worker gets `d / workers` rows; the last worker's range ends at `d`,
/// absorbing the remainder of `d % workers` (up to `workers - 1` extra rows).
/// The uneven tail is intentional and must match what a forked child computes
/// for itself from its own index.
#[must_use]
pub fn worker_range(d: usize, workers: usize, index: usize) -> RowRange {
    let chunk = d / workers;
    RowRange {
        start: index * chunk,
        end: if index == workers - 1 {
            d
        } else {
            (index + 1) * chunk
        },
    }
}

/// Computes the full partition plan: one [`RowRange`] per worker.
///
/// Fails with `InvalidPartition` when `workers == 0`. When `d < workers`,
/// some ranges are empty; callers must treat those as no-op work units, not
/// errors.
pub fn plan(d: usize, workers: usize) -> Result<Vec<RowRange>> {
    if workers == 0 {
        return Err(invalid_partition(workers));
    }
    Ok((0..workers).map(|i| worker_range(d, workers, i)).collect())
}
