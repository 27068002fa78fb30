//! Rayon backend: the outer row loop handed to a runtime-managed pool.
//!
//! Where the other backends apply the static partition themselves, this one
//! only declares the row loop parallelizable — C is split into per-row
//! mutable chunks and rayon's scheduler decides how the `d` iterations are
//! divided among the pool's threads. The running sum and cursors live inside
//! the kernel call, so every logical iteration has private temporaries; that
//! privacy is a correctness requirement, not an optimization. The implicit
//! barrier at the end of the parallel call is the join point.
//!
//! The worker count is applied once by building a dedicated pool, the
//! crate's analogue of a process-wide thread-team setting.

use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use crate::backend::Backend;
use crate::error::{invalid_partition, worker_spawn_error, Result};
use crate::kernel::Kernel;
use crate::partition::RowRange;

pub struct RayonBackend;

impl Backend for RayonBackend {
    fn execute(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        d: usize,
        workers: usize,
        kernel: Kernel,
    ) -> Result<()> {
        if workers == 0 {
            return Err(invalid_partition(workers));
        }
        if d == 0 {
            return Ok(());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("mm-rayon-{}", i))
            .build()
            .map_err(|e| worker_spawn_error(0, e.to_string()))?;

        pool.install(|| {
            c.par_chunks_mut(d).enumerate().for_each(|(i, c_row)| {
                kernel.run(a, b, c_row, d, RowRange { start: i, end: i + 1 });
            });
        });

        Ok(())
    }
}
