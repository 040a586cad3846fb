//! # ram-watcher
//!
//! A long-running host memory utilization monitor.
//!
//! ## Overview
//!
//! ram-watcher samples system memory counters once per second and reports
//! them as human-readable text. The sampling loop is lifecycle-controlled:
//! it starts idempotently, runs until cancellation is requested, and shuts
//! down within a bounded grace period, so it integrates cleanly with a
//! process supervisor as well as an interactive terminal.
//!
//! ## Usage
//!
//! ```no_run
//! use ram_watcher::provider::SystemMemoryProvider;
//! use ram_watcher::sink::ConsoleSink;
//! use ram_watcher::watcher::RamWatcher;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut watcher = RamWatcher::new(SystemMemoryProvider, ConsoleSink::new());
//! watcher.start()?;
//! // ... host runs until its stop signal arrives ...
//! watcher.stop().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: The memory snapshot value type and its text rendering
//! - [`provider`]: Memory counter acquisition (the metrics provider)
//! - [`sink`]: Output sinks that receive each snapshot
//! - [`watcher`]: The sampling lifecycle controller
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Application constants and fixed timing values
pub mod constants;

/// Core data models
pub mod models;

/// Memory counter acquisition
pub mod provider;

/// Snapshot output sinks
pub mod sink;

/// Sampling lifecycle controller
pub mod watcher;
