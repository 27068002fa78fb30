//! Process backend: one forked child per row range.
//!
//! The caller must allocate A, B and C from [`Sharing::Shared`] arenas
//! *before* dispatch, so that rows written by a child are observable by the
//! parent once the child exits. Each child recomputes its own row range from
//! its worker index with the same partition rule — nothing is communicated
//! between processes — runs the kernel against the inherited mapping and
//! exits without ever returning into the parent's control flow.
//!
//! The parent waits on every forked child before returning, in fork order
//! (completion order is neither guaranteed nor relied upon). When a fork
//! fails mid-spawn, the partial set of children is still waited on so none
//! are orphaned, and the error is propagated afterwards. The shared mappings
//! outlive `execute`, so they are unmapped only after all children exited.
//!
//! [`Sharing::Shared`]: crate::arena::Sharing::Shared

use std::io;

use crate::backend::Backend;
use crate::error::{worker_spawn_error, Result};
use crate::kernel::Kernel;
use crate::partition;

pub struct ProcessBackend;

impl Backend for ProcessBackend {
    fn execute(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        d: usize,
        workers: usize,
        kernel: Kernel,
    ) -> Result<()> {
        // Validates the worker count with the same rule the children apply.
        partition::plan(d, workers)?;

        let mut children: Vec<libc::pid_t> = Vec::with_capacity(workers);
        let mut failed = None;

        for idx in 0..workers {
            // SAFETY: the child branch only touches the inherited matrix
            // buffers and then _exits; it never unwinds or runs drops.
            let pid = unsafe { libc::fork() };

            if pid < 0 {
                failed = Some(worker_spawn_error(
                    idx,
                    io::Error::last_os_error().to_string(),
                ));
                break;
            }

            if pid == 0 {
                // Child: recompute the assigned range from the worker index.
                let rows = partition::worker_range(d, workers, idx);
                let block = &mut c[rows.start * d..rows.end * d];
                kernel.run(a, b, block, d, rows);
                // SAFETY: terminate immediately, skipping atexit handlers
                // and drops that belong to the parent.
                unsafe { libc::_exit(0) };
            }

            children.push(pid);
        }

        // Wait on every child that was actually forked, also when a later
        // fork failed, so no child is left orphaned.
        for pid in children {
            wait_child(pid);
        }

        match failed {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn wait_child(pid: libc::pid_t) {
    let mut status = 0;
    // SAFETY: waitpid on a pid we forked ourselves; retried on EINTR.
    while unsafe { libc::waitpid(pid, &mut status, 0) } == -1 {
        if io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
            break;
        }
    }
}
