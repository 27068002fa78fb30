//! Error types for matbench operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing the front-end to report a diagnostic and exit
//! with a non-zero status instead of aborting mid-run.

use std::fmt;

/// Errors that can occur while setting up or dispatching a multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatbenchError {
    /// Buffer or shared-memory allocation failed.
    AllocationError {
        /// Number of `f64` elements that were requested.
        requested_len: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A worker thread or process could not be created.
    WorkerSpawnError {
        /// Index of the worker that failed to spawn.
        worker: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A partition was requested for zero workers.
    InvalidPartition {
        /// The offending worker count.
        workers: usize,
    },
}

impl fmt::Display for MatbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatbenchError::AllocationError {
                requested_len,
                message,
            } => write!(
                f,
                "Allocation failed: {} (requested {} elements)",
                message, requested_len
            ),
            MatbenchError::WorkerSpawnError { worker, message } => {
                write!(f, "Could not spawn worker {}: {}", worker, message)
            }
            MatbenchError::InvalidPartition { workers } => {
                write!(f, "Invalid partition: worker count must be >= 1, got {}", workers)
            }
        }
    }
}

impl std::error::Error for MatbenchError {}

/// Result type alias for matbench operations.
pub type Result<T> = std::result::Result<T, MatbenchError>;

/// Creates an allocation error.
pub fn allocation_error(requested_len: usize, message: impl Into<String>) -> MatbenchError {
    MatbenchError::AllocationError {
        requested_len,
        message: message.into(),
    }
}

/// Creates a worker spawn error.
pub fn worker_spawn_error(worker: usize, message: impl Into<String>) -> MatbenchError {
    MatbenchError::WorkerSpawnError {
        worker,
        message: message.into(),
    }
}

/// Creates an invalid partition error.
pub fn invalid_partition(workers: usize) -> MatbenchError {
    MatbenchError::InvalidPartition { workers }
}
