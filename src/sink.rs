//! Output sinks for memory snapshots.
//!
//! The sampling loop forwards every snapshot to a [`SampleSink`]. The
//! default sink writes the two-line human-readable report to standard
//! output; alternative sinks (a structured format, a test buffer) slot in
//! without changing the loop.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::models::MemorySnapshot;

/// Destination for sampled memory snapshots.
pub trait SampleSink: Send {
    /// Reports one snapshot.
    fn report(&mut self, snapshot: &MemorySnapshot) -> Result<()>;
}

/// Writes each snapshot as human-readable text, two lines per sample.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    /// Creates a sink writing to standard output.
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stdout()),
        }
    }

    /// Creates a sink writing to an arbitrary stream.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSink for ConsoleSink {
    fn report(&mut self, snapshot: &MemorySnapshot) -> Result<()> {
        writeln!(self.out, "{}", snapshot).context("Failed to write sample to output")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Write adapter that lets the test read back what the sink wrote.
    #[derive(Clone)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn test_snapshot() -> MemorySnapshot {
        const GB: u64 = 1024 * 1024 * 1024;
        MemorySnapshot {
            committed_percent: 42.0,
            committed_bytes: 8 * GB,
            commit_limit_bytes: 16 * GB,
            available_bytes: 8_482_560_410,
            total_physical_bytes: 16 * GB,
        }
    }

    #[test]
    fn test_console_sink_writes_two_lines_per_sample() {
        let buffer = SharedBuffer(Arc::new(Mutex::new(Vec::new())));
        let mut sink = ConsoleSink::with_writer(Box::new(buffer.clone()));

        sink.report(&test_snapshot()).unwrap();

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
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
    fn test_console_sink_appends_on_each_report() {
        let buffer = SharedBuffer(Arc::new(Mutex::new(Vec::new())));
        let mut sink = ConsoleSink::with_writer(Box::new(buffer.clone()));

        sink.report(&test_snapshot()).unwrap();
        sink.report(&test_snapshot()).unwrap();

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written.lines().count(), 4);
    }
}
