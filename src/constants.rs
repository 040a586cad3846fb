//! Global constants for the ram-watcher application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

use std::time::Duration;

// Timing constants
/// Delay between consecutive memory samples (1 second)
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(1_000);

/// Longest time `stop` waits for the sampling loop to confirm exit (5 seconds)
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(5_000);

// Unit conversion constants
/// Bytes per gigabyte (1024^3)
pub const BYTES_PER_GB: f64 = (1024u64 * 1024 * 1024) as f64;
