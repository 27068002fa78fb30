//! Thread backend: one scoped OS thread per row range.
//!
//! All workers share the process address space, so A, B (or Bᵀ) and C are
//! visible to every thread without copying. C is handed out as disjoint
//! `split_at_mut` blocks, one per range, so no mutex is needed for
//! correctness; the scope's join-all on exit is the sole synchronization
//! point. The original pthread version bracketed an empty critical section
//! with a mutex after the kernel call; that lock guarded nothing and is
//! omitted here.

use std::mem;
use std::thread;

use crate::backend::Backend;
use crate::error::{worker_spawn_error, Result};
use crate::kernel::Kernel;
use crate::partition;

pub struct ThreadBackend;

impl Backend for ThreadBackend {
    fn execute(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        d: usize,
        workers: usize,
        kernel: Kernel,
    ) -> Result<()> {
        let ranges = partition::plan(d, workers)?;

        thread::scope(|scope| -> Result<()> {
            let mut rest = c;
            for (idx, rows) in ranges.iter().copied().enumerate() {
                let (block, tail) = mem::take(&mut rest).split_at_mut(rows.len() * d);
                rest = tail;

                // On spawn failure the early return still runs the scope's
                // join-all, so previously spawned workers are not leaked.
                thread::Builder::new()
                    .name(format!("mm-worker-{}", idx))
                    .spawn_scoped(scope, move || kernel.run(a, b, block, d, rows))
                    .map_err(|e| worker_spawn_error(idx, e.to_string()))?;
            }
            Ok(())
        })
    }
}
