//! Core data models for memory sampling.

use std::fmt;

use serde::Serialize;

use crate::constants::BYTES_PER_GB;

/// One point-in-time reading of the host's memory counters.
///
/// Produced fresh by the metrics provider on every sampling cycle,
/// forwarded to the output sink, and then discarded. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemorySnapshot {
    /// Percent of the commit limit currently in use (0-100)
    pub committed_percent: f64,
    /// Committed (physical + page file) bytes currently in use
    pub committed_bytes: u64,
    /// Upper bound on committable bytes (physical + page file)
    pub commit_limit_bytes: u64,
    /// Physical bytes currently available to new allocations
    pub available_bytes: u64,
    /// Total installed physical memory in bytes
    pub total_physical_bytes: u64,
}

impl MemorySnapshot {
    /// Committed bytes expressed in gigabytes.
    pub fn committed_gb(&self) -> f64 {
        self.committed_bytes as f64 / BYTES_PER_GB
    }

    /// Commit limit expressed in gigabytes.
    pub fn commit_limit_gb(&self) -> f64 {
        self.commit_limit_bytes as f64 / BYTES_PER_GB
    }

    /// Available physical memory expressed in gigabytes.
    pub fn available_gb(&self) -> f64 {
        self.available_bytes as f64 / BYTES_PER_GB
    }

    /// Installed physical memory expressed in gigabytes.
    pub fn total_physical_gb(&self) -> f64 {
        self.total_physical_bytes as f64 / BYTES_PER_GB
    }
}

impl fmt::Display for MemorySnapshot {
    /// Renders the two-line report emitted once per sampling cycle.
    ///
    /// This text is the externally observable data contract of the
    /// monitor, so the wording and formatting are fixed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Virtual (physical + page file) Bytes In Use: {:.1} %, i.e. {:.1} GB of {:.1} GB",
            self.committed_percent,
            self.committed_gb(),
            self.commit_limit_gb()
        )?;
        write!(
            f,
            "\t'Physical' Bytes Available: {:.1} GB (of installed {:.1} GB)",
            self.available_gb(),
            self.total_physical_gb()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GB: u64 = 1024 * 1024 * 1024;

    fn sample_snapshot() -> MemorySnapshot {
        MemorySnapshot {
            committed_percent: 42.0,
            committed_bytes: 8 * GB,
            commit_limit_bytes: 16 * GB,
            // 7.9 GB, rounded to one decimal when rendered
            available_bytes: 8_482_560_410,
            total_physical_bytes: 16 * GB,
        }
    }

    #[test]
    fn test_gb_conversions() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.committed_gb(), 8.0);
        assert_eq!(snapshot.commit_limit_gb(), 16.0);
        assert_eq!(snapshot.total_physical_gb(), 16.0);
        assert!((snapshot.available_gb() - 7.9).abs() < 0.01);
    }

    #[test]
    fn test_display_format() {
        let snapshot = sample_snapshot();
        let rendered = format!("{}", snapshot);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Virtual (physical + page file) Bytes In Use: 42.0 %, i.e. 8.0 GB of 16.0 GB"
        );
        assert_eq!(
            lines[1],
            "\t'Physical' Bytes Available: 7.9 GB (of installed 16.0 GB)"
        );
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        let snapshot = MemorySnapshot {
            committed_percent: 33.333,
            committed_bytes: 5 * GB + GB / 2,
            commit_limit_bytes: 16 * GB,
            available_bytes: 10 * GB,
            total_physical_bytes: 16 * GB,
        };
        let rendered = format!("{}", snapshot);

        assert!(rendered.contains("33.3 %"));
        assert!(rendered.contains("5.5 GB of 16.0 GB"));
    }
}
