//! Matrix buffer helpers: random initialization, transposition and the
//! small-matrix console printer.
//!
//! A matrix of dimension `d` is a flat row-major slice of `d * d` doubles;
//! element `(i, j)` lives at offset `i * d + j`. Ownership of the buffers
//! stays with the run's orchestrator, these helpers only borrow them.

use rand::Rng;

use crate::DISPLAY_MAX;

/// Fills A with values in `[1.0, 5.0)` and B with values in `[5.0, 9.0)`.
///
/// The disjoint ranges make it obvious at a glance which operand a stray
/// value came from when debugging small runs.
pub fn random_fill(a: &mut [f64], b: &mut [f64], rng: &mut impl Rng) {
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        *x = rng.random_range(1.0..5.0);
        *y = rng.random_range(5.0..9.0);
    }
}

/// Writes the transpose of `src` into `dst`: `dst[j,i] = src[i,j]`.
///
/// `src` is untouched; `dst` must be a separate buffer of the same size.
pub fn transpose(src: &[f64], dst: &mut [f64], d: usize) {
    debug_assert_eq!(src.len(), d * d);
    debug_assert_eq!(dst.len(), d * d);

    for i in 0..d {
        for j in 0..d {
            dst[j * d + i] = src[i * d + j];
        }
    }
}

/// Prints a matrix to stdout, but only when `d` is below [`DISPLAY_MAX`] —
/// purely diagnostic, large matrices would just flood the console.
pub fn print_matrix(m: &[f64], d: usize) {
    if d >= DISPLAY_MAX {
        return;
    }
    println!();
    for row in m.chunks(d) {
        for v in row {
            print!(" {:.2} ", v);
        }
        println!();
    }
    println!(">-------------------->");
}
