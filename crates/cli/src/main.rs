//! Dataset inspection tool for starmap
//!
//! Loads a universe SQLite export the same way library consumers do and
//! prints what came out of it.
//! Run with: `starmap <command> [DB]`

mod commands;
mod dirs;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Islands, Jumps, Schema, Summary, Systems};
use starmap_loader::LoaderConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directory for a persistent log file; stderr only when unset.
const ENV_LOG_DIR: &str = "STARMAP_LOG_DIR";

/// Inspect universe datasets
#[derive(Parser)]
#[command(name = "starmap")]
#[command(about = "Inspect schema-tolerant universe datasets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Entity counts and cache fingerprint
    Summary(Summary),

    /// List loaded systems
    Systems(Systems),

    /// List jump links
    Jumps(Jumps),

    /// Show how logical tables and columns resolve
    Schema(Schema),

    /// Find triangles of systems linked only to each other
    Islands(Islands),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for STARMAP_DB and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = setup_logging()?;
    let config = LoaderConfig::from_env();

    match cli.command {
        Command::Summary(cmd) => cmd.execute(&config),
        Command::Systems(cmd) => cmd.execute(&config),
        Command::Jumps(cmd) => cmd.execute(&config),
        Command::Schema(cmd) => cmd.execute(&config),
        Command::Islands(cmd) => cmd.execute(&config),
    }
}

/// Setup logging to stderr, and to a file when `STARMAP_LOG_DIR` is set.
///
/// The returned guard flushes the file writer on drop.
fn setup_logging() -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match std::env::var_os(ENV_LOG_DIR) {
        Some(dir) => {
            let dir = std::path::PathBuf::from(dir);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(&dir, "starmap.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
