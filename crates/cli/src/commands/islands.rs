//! Triangles of systems linked only to each other.

use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use starmap_core::{JumpGraph, SystemId};
use starmap_loader::{DatasetLoader, LoadOptions, LoaderConfig};

use super::DatabaseArg;

/// Find isolated three-system loops in the jump network
#[derive(Parser)]
pub struct Islands {
    #[command(flatten)]
    database: DatabaseArg,

    /// Print every triangle, not only isolated ones
    #[arg(short, long)]
    all: bool,
}

impl Islands {
    pub fn execute(self, config: &LoaderConfig) -> Result<()> {
        let path = self.database.resolve(config);
        let mut loader = DatasetLoader::new(config.clone());

        let jumps = loader
            .load_jumps(&path, None)
            .with_context(|| format!("Failed to load jumps: {}", path.display()))?;
        let graph = JumpGraph::from_jumps(&jumps);
        let triangles = if self.all {
            graph.triangles()
        } else {
            graph.isolated_triangles()
        };

        // Datasets without a usable systems table still report ids.
        let names: HashMap<SystemId, String> = match loader.load_data(&path, LoadOptions::default()) {
            Ok(systems) => systems
                .iter()
                .map(|system| (system.id, system.name.clone()))
                .collect(),
            Err(err) => {
                tracing::warn!("System names unavailable: {}", err);
                HashMap::new()
            }
        };
        let label = |id: SystemId| match names.get(&id) {
            Some(name) => format!("{name} ({id})"),
            None => id.to_string(),
        };

        let heading = if self.all { "triangles" } else { "isolated triangles" };
        println!(
            "{}",
            style(format!("=== {} {} ===", triangles.len(), heading))
                .bold()
                .green()
        );
        for triangle in &triangles {
            let [a, b, c] = triangle.members();
            println!("  {} / {} / {}", label(a), label(b), label(c));
        }

        Ok(())
    }
}
