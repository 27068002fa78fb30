//! Concurrency backends: interchangeable strategies for executing the
//! partitioned multiply.
//!
//! Every backend implements the same dispatch contract — run the selected
//! kernel over each row range of a static partition, then act as a join-all
//! barrier so all writes to C are visible before `execute` returns. No
//! ordering is guaranteed between workers; the only guarantee is that all of
//! them complete before the result buffer is considered ready. There is no
//! retry, cancellation or timeout: a hung worker blocks its backend's
//! barrier, accepted as a limitation of the benchmark.

pub mod process;
pub mod rayon_loop;
pub mod threads;

pub use process::ProcessBackend;
pub use rayon_loop::RayonBackend;
pub use threads::ThreadBackend;

use crate::arena::Sharing;
use crate::error::Result;
use crate::kernel::Kernel;

/// The uniform dispatch contract shared by all execution strategies.
///
/// `b` is the second operand as the kernel expects it: B itself for
/// [`Kernel::Direct`], Bᵀ for [`Kernel::Transposed`]. `c` must be zeroed and
/// of length `d * d`; for [`ProcessBackend`] all three buffers must come
/// from [`Sharing::Shared`] arenas allocated before the call.
pub trait Backend {
    fn execute(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        d: usize,
        workers: usize,
        kernel: Kernel,
    ) -> Result<()>;
}

/// Selects one concrete backend, typically from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Threads,
    Process,
    Rayon,
}

impl BackendKind {
    /// The sharing mode the backend's buffers must be allocated with.
    #[must_use]
    pub fn sharing(self) -> Sharing {
        match self {
            BackendKind::Process => Sharing::Shared,
            BackendKind::Threads | BackendKind::Rayon => Sharing::Private,
        }
    }

    /// Human-readable backend name for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BackendKind::Threads => "threads",
            BackendKind::Process => "process",
            BackendKind::Rayon => "rayon",
        }
    }

    /// Dispatches to the concrete backend.
    pub fn execute(
        self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        d: usize,
        workers: usize,
        kernel: Kernel,
    ) -> Result<()> {
        match self {
            BackendKind::Threads => ThreadBackend.execute(a, b, c, d, workers, kernel),
            BackendKind::Process => ProcessBackend.execute(a, b, c, d, workers, kernel),
            BackendKind::Rayon => RayonBackend.execute(a, b, c, d, workers, kernel),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "threads" => Ok(BackendKind::Threads),
            "process" => Ok(BackendKind::Process),
            "rayon" => Ok(BackendKind::Rayon),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}
