//! Wall-clock bracket around the dispatch step.
//!
//! The handle returned by [`Stopwatch::start`] *is* the bracket: elapsed
//! time is read off the handle, so there is no process-wide timing state.

use std::time::Instant;

/// A running wall-clock capture.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Starts the capture.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Microseconds elapsed since [`Stopwatch::start`].
    #[must_use]
    pub fn elapsed_micros(&self) -> u128 {
        self.started.elapsed().as_micros()
    }
}
