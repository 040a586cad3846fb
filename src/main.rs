use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use ram_watcher::cli::Args;
use ram_watcher::provider::SystemMemoryProvider;
use ram_watcher::sink::ConsoleSink;
use ram_watcher::watcher::RamWatcher;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    info!("Starting RAM watcher");

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    runtime.block_on(run(&args))?;

    info!("RAM watcher exited");
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Start the sampling loop and block until the host's stop signal arrives.
///
/// Interactively the monitor runs for the remainder of the process
/// lifetime and Ctrl+C triggers a graceful stop. Under a supervisor
/// (`--service`) SIGTERM is honored the same way.
async fn run(args: &Args) -> Result<()> {
    let mut watcher = RamWatcher::new(SystemMemoryProvider, ConsoleSink::new());
    watcher.start()?;

    if args.service {
        wait_for_shutdown_signal().await?;
    } else {
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for interrupt")?;
        info!("Interrupt received, shutting down");
    }

    watcher.stop().await;
    Ok(())
}

/// Wait for the supervisor's stop signal (SIGTERM) or an interrupt.
#[cfg(unix)]
async fn wait_for_shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;

    tokio::select! {
        _ = sigterm.recv() => info!("SIGTERM received, shutting down"),
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for interrupt")?;
            info!("Interrupt received, shutting down");
        }
    }
    Ok(())
}

/// Wait for the supervisor's stop signal.
#[cfg(not(unix))]
async fn wait_for_shutdown_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for interrupt")?;
    info!("Interrupt received, shutting down");
    Ok(())
}
