//! Memory counter acquisition.
//!
//! The sampling loop consumes memory readings through the [`MemoryProvider`]
//! trait, keeping the OS-specific acquisition behind a single seam. The
//! default implementation reads counters via the sysinfo crate.

mod system;

pub use system::SystemMemoryProvider;

use anyhow::Result;

use crate::models::MemorySnapshot;

/// Source of point-in-time memory counter readings.
///
/// A provider must be safely invocable once per sampling cycle with no
/// setup or teardown visible to the caller: any OS handles it needs are
/// acquired and released within a single `sample` call.
#[cfg_attr(test, mockall::automock)]
pub trait MemoryProvider: Send {
    /// Reads the current memory counters.
    ///
    /// Fails when the underlying counters cannot be read (permission
    /// denied, counters unavailable, transient OS query failure). A
    /// failed cycle is retried implicitly on the next one.
    fn sample(&mut self) -> Result<MemorySnapshot>;
}
