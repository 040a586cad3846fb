//! sysinfo-backed memory provider.

use anyhow::{bail, Result};
use log::debug;
use sysinfo::{System, SystemExt};

use crate::models::MemorySnapshot;
use crate::provider::MemoryProvider;

/// Reads host memory counters through the sysinfo crate.
///
/// Commit accounting is mapped onto the portable counters sysinfo
/// exposes: the commit limit is physical plus swap capacity, and
/// committed bytes are physical plus swap usage.
pub struct SystemMemoryProvider;

impl MemoryProvider for SystemMemoryProvider {
    fn sample(&mut self) -> Result<MemorySnapshot> {
        // A fresh System per call keeps counter handles scoped to this
        // one iteration; nothing persists between samples.
        let mut system = System::new();
        system.refresh_memory();

        let total_physical = system.total_memory();
        if total_physical == 0 {
            bail!("Memory counters are unavailable on this system");
        }

        // commit_limit >= total_physical > 0, so the division is safe
        let commit_limit = total_physical + system.total_swap();
        let committed = system.used_memory() + system.used_swap();
        let committed_percent = committed as f64 / commit_limit as f64 * 100.0;

        debug!(
            "Sampled memory counters: {} of {} bytes committed",
            committed, commit_limit
        );

        Ok(MemorySnapshot {
            committed_percent,
            committed_bytes: committed,
            commit_limit_bytes: commit_limit,
            available_bytes: system.available_memory(),
            total_physical_bytes: total_physical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reads_live_counters() {
        let mut provider = SystemMemoryProvider;
        let snapshot = provider.sample().expect("sampling the host should work");

        assert!(snapshot.total_physical_bytes > 0);
        assert!(snapshot.commit_limit_bytes >= snapshot.total_physical_bytes);
        assert!(snapshot.committed_bytes <= snapshot.commit_limit_bytes);
        assert!(snapshot.available_bytes <= snapshot.total_physical_bytes);
        assert!((0.0..=100.0).contains(&snapshot.committed_percent));
    }

    #[test]
    fn test_consecutive_samples_are_independent() {
        let mut provider = SystemMemoryProvider;

        let first = provider.sample().expect("first sample should work");
        let second = provider.sample().expect("second sample should work");

        // Installed memory does not change between samples
        assert_eq!(first.total_physical_bytes, second.total_physical_bytes);
    }
}
