//! Dataset overview: entity counts, optional data coverage, cache key.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use starmap_core::{JumpGraph, LoadSummary, System};
use starmap_loader::{DatasetLoader, Fingerprint, LoadOptions, LoaderConfig};

use super::DatabaseArg;

/// Print entity counts for a dataset
#[derive(Parser)]
pub struct Summary {
    #[command(flatten)]
    database: DatabaseArg,

    /// Only load the first N systems by id
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,
}

impl Summary {
    pub fn execute(self, config: &LoaderConfig) -> Result<()> {
        let path = self.database.resolve(config);
        let mut loader = DatasetLoader::new(config.clone());

        let options = LoadOptions {
            limit_systems: self.limit,
            ..LoadOptions::default()
        };
        let systems = loader
            .load_data(&path, options)
            .with_context(|| format!("Failed to load dataset: {}", path.display()))?;
        let jumps = loader
            .load_jumps(&path, None)
            .with_context(|| format!("Failed to load jumps: {}", path.display()))?;
        let fingerprint = Fingerprint::of(&path, self.limit)?;

        println!("{} {}", style("Dataset:").bold().cyan(), path.display());
        println!(
            "{} {}",
            style("Fingerprint:").bold().cyan(),
            fingerprint.digest()
        );
        println!();

        let summary = LoadSummary::of(&systems);
        println!("{}", style("Entities:").bold().yellow());
        println!("  Systems: {}", summary.systems);
        println!("  Planets: {}", summary.planets);
        println!("  Moons: {}", summary.moons);
        println!("  Jump links: {}", jumps.len());
        println!();

        println!("{}", style("Optional data:").bold().yellow());
        print_coverage("Security", &systems, |s| s.security.is_some());
        print_coverage("Region name", &systems, |s| s.region_name.is_some());
        print_coverage("Constellation name", &systems, |s| {
            s.constellation_name.is_some()
        });
        print_coverage("NPC stations", &systems, |s| s.npc_station_count > 0);
        println!();

        let graph = JumpGraph::from_jumps(&jumps);
        println!("{}", style("Network:").bold().yellow());
        println!("  Linked systems: {}", graph.system_count());
        println!("  Undirected links: {}", graph.link_count());

        Ok(())
    }
}

fn print_coverage(label: &str, systems: &[System], has: impl Fn(&System) -> bool) {
    let count = systems.iter().filter(|system| has(system)).count();
    println!("  {}: {}/{}", label, count, systems.len());
}
