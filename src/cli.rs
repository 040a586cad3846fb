use clap::Parser;

/// Command-line arguments for the ram-watcher tool.
///
/// The monitor takes no tuning knobs: the sampling interval and shutdown
/// grace period are fixed. The flags only select the entry mode and the
/// logging verbosity.
#[derive(Parser, Debug)]
#[clap(name = "ram-watcher", about = "Host memory utilization monitor")]
pub struct Args {
    /// Run under a process supervisor: stop gracefully on SIGTERM as well as Ctrl+C
    #[clap(long)]
    pub service: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_values() {
        let args = Args::parse_from(&["ram-watcher"]);

        assert!(!args.service);
        assert!(!args.verbose);
    }

    #[test]
    fn test_service_mode() {
        let args = Args::parse_from(&["ram-watcher", "--service"]);

        assert!(args.service);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(&["ram-watcher", "-v"]);

        assert!(args.verbose);
    }
}
