//! Buffer arena with a declared sharing mode.
//!
//! Matrix buffers are allocated before any worker is created. For the thread
//! and rayon backends an ordinary heap vector is enough, since every worker
//! lives in the same address space. The process backend instead needs writes
//! made by a forked child to be observable by the parent after the child
//! exits, so its buffers come from an anonymous `MAP_SHARED` mapping — the
//! classic pre-fork shared-memory arrangement, expressed here as an owned
//! arena that unmaps on drop.
//!
//! The arena is zero-initialized in both modes (anonymous mappings are
//! zero-filled by the kernel).

use crate::error::{allocation_error, Result};

/// How an arena's memory behaves across worker boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sharing {
    /// Ordinary heap allocation, visible to threads of this process only.
    Private,
    /// Anonymous shared mapping, visible to forked child processes.
    Shared,
}

enum Storage {
    Private(Vec<f64>),
    Mapped(*mut f64),
}

/// A zeroed `f64` buffer of fixed length with a declared [`Sharing`] mode.
pub struct Arena {
    storage: Storage,
    len: usize,
    sharing: Sharing,
}

impl Arena {
    /// Allocates a zeroed arena of `len` doubles.
    ///
    /// Fails with `AllocationError` when the shared mapping cannot be
    /// created. A zero-length arena never maps anything.
    pub fn new(len: usize, sharing: Sharing) -> Result<Self> {
        let storage = match sharing {
            Sharing::Private => Storage::Private(vec![0.0; len]),
            Sharing::Shared if len == 0 => Storage::Private(Vec::new()),
            Sharing::Shared => {
                let bytes = len * std::mem::size_of::<f64>();
                // SAFETY: anonymous mapping, fd -1, offset 0; the result is
                // checked against MAP_FAILED before use.
                let ptr = unsafe {
                    libc::mmap(
                        std::ptr::null_mut(),
                        bytes,
                        libc::PROT_READ | libc::PROT_WRITE,
                        libc::MAP_SHARED | libc::MAP_ANONYMOUS,
                        -1,
                        0,
                    )
                };
                if ptr == libc::MAP_FAILED {
                    return Err(allocation_error(
                        len,
                        std::io::Error::last_os_error().to_string(),
                    ));
                }
                Storage::Mapped(ptr.cast::<f64>())
            }
        };
        Ok(Self {
            storage,
            len,
            sharing,
        })
    }

    /// The sharing mode this arena was allocated with.
    #[must_use]
    pub fn sharing(&self) -> Sharing {
        self.sharing
    }

    /// Number of `f64` elements in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only view of the whole buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match &self.storage {
            Storage::Private(v) => v,
            // SAFETY: the mapping is len * 8 bytes, lives until Drop, and
            // &self forbids a concurrent &mut through this arena.
            Storage::Mapped(ptr) => unsafe { std::slice::from_raw_parts(*ptr, self.len) },
        }
    }

    /// Mutable view of the whole buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        match &mut self.storage {
            Storage::Private(v) => v,
            // SAFETY: as above, and &mut self makes this the only live view.
            Storage::Mapped(ptr) => unsafe { std::slice::from_raw_parts_mut(*ptr, self.len) },
        }
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        if let Storage::Mapped(ptr) = self.storage {
            let bytes = self.len * std::mem::size_of::<f64>();
            // SAFETY: ptr/bytes are exactly what mmap returned. The process
            // backend waits for every child before the arena can be dropped,
            // so no worker still reaches through this mapping.
            unsafe {
                libc::munmap(ptr.cast(), bytes);
            }
        }
    }
}
