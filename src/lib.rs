//! Benchmark of dense square matrix multiplication under three parallel
//! execution models — shared-memory threads, forked processes over a shared
//! anonymous mapping, and a rayon-managed parallel loop — against a serial
//! baseline.
//!
//! All matrices are flat row-major `f64` buffers of dimension `d * d`. The
//! result matrix C is partitioned into contiguous row ranges, one per worker,
//! so concurrent writers never touch the same cell; A and B (or Bᵀ) are
//! read-only during the parallel phase. That disjointness is the entire
//! concurrency-safety argument: no lock protects the numeric data.
//!
//! ## Usage
//!
//! ```
//! use matbench::backend::{Backend, ThreadBackend};
//! use matbench::kernel::Kernel;
//!
//! let d = 3;
//! let a = vec![1.0f64; d * d];
//! let b = vec![2.0f64; d * d];
//! let mut c = vec![0.0f64; d * d];
//!
//! ThreadBackend.execute(&a, &b, &mut c, d, 2, Kernel::Direct).unwrap();
//! assert!((c[0] - 6.0).abs() < 1e-6);
//! ```

pub mod arena;
pub mod backend;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod partition;
pub mod timer;
pub mod verify;

/// Matrices at or above this dimension are never pretty-printed or
/// auto-verified by the CLI.
pub const DISPLAY_MAX: usize = 9;

/// Absolute per-cell tolerance when comparing two products.
pub const EPSILON: f64 = 1e-6;
