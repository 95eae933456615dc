//! List systems with their planets and moons.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use starmap_core::System;
use starmap_loader::{DatasetLoader, LoadOptions, LoaderConfig};

use super::DatabaseArg;

/// List systems loaded from a dataset
#[derive(Parser)]
pub struct Systems {
    #[command(flatten)]
    database: DatabaseArg,

    /// Only load the first N systems by id
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per system
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Systems {
    pub fn execute(self, config: &LoaderConfig) -> Result<()> {
        let path = self.database.resolve(config);
        let options = LoadOptions {
            limit_systems: self.limit,
            enable_cache: false,
        };
        let systems = DatasetLoader::new(config.clone())
            .load_data(&path, options)
            .with_context(|| format!("Failed to load dataset: {}", path.display()))?;

        match self.format {
            OutputFormat::Summary => print_summary(&systems),
            OutputFormat::Json => print_json(&systems)?,
            OutputFormat::Debug => println!("{:#?}", systems),
        }

        Ok(())
    }
}

fn print_summary(systems: &[System]) {
    println!(
        "{}",
        style(format!("=== {} systems ===", systems.len())).bold().green()
    );
    for system in systems {
        let security = system
            .security
            .map(|s| format!("{:.1}", s))
            .unwrap_or_else(|| "-".to_string());
        let region = system.region_name.as_deref().unwrap_or("-");
        println!(
            "  {} {} [sec {}] region={} planets={} moons={} stations={}",
            style(system.id).dim(),
            style(&system.name).bold(),
            security,
            region,
            system.planets.len(),
            system.moon_count(),
            system.npc_station_count
        );
    }
}

fn print_json(systems: &[System]) -> Result<()> {
    let json = serde_json::to_string_pretty(systems).context("Failed to serialize systems to JSON")?;
    println!("{}", json);
    Ok(())
}
