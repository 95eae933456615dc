//! List jump links, optionally restricted to a set of systems.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use starmap_core::{Jump, SystemId};
use starmap_loader::{DatasetLoader, LoaderConfig};

use super::DatabaseArg;

/// List jump links stored in a dataset
#[derive(Parser)]
pub struct Jumps {
    #[command(flatten)]
    database: DatabaseArg,

    /// Keep only links whose endpoints are both in this list (e.g., 1,2,3)
    #[arg(short, long, value_name = "IDS", value_delimiter = ',')]
    systems: Option<Vec<i64>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per link
    Summary,
    /// Full JSON output
    Json,
}

impl Jumps {
    pub fn execute(self, config: &LoaderConfig) -> Result<()> {
        let path = self.database.resolve(config);
        let filter: Option<Vec<SystemId>> = self
            .systems
            .map(|ids| ids.into_iter().map(SystemId).collect());

        let jumps = DatasetLoader::new(config.clone())
            .load_jumps(&path, filter.as_deref())
            .with_context(|| format!("Failed to load jumps: {}", path.display()))?;

        match self.format {
            OutputFormat::Summary => print_summary(&jumps),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&*jumps)
                    .context("Failed to serialize jumps to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn print_summary(jumps: &[Jump]) {
    println!(
        "{}",
        style(format!("=== {} jump links ===", jumps.len())).bold().green()
    );
    for jump in jumps {
        println!("  {} -> {}", jump.from, jump.to);
    }
}
