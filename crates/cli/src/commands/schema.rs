//! Show how a dataset's tables and columns map onto logical names.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use starmap_loader::{LoaderConfig, SchemaReport, describe, open_read_only};

use super::DatabaseArg;

/// Report schema resolution for a dataset
#[derive(Parser)]
pub struct Schema {
    #[command(flatten)]
    database: DatabaseArg,
}

impl Schema {
    pub fn execute(self, config: &LoaderConfig) -> Result<()> {
        let path = self.database.resolve(config);
        if !path.is_file() {
            anyhow::bail!("Dataset not found: {}", path.display());
        }

        let conn = open_read_only(&path)
            .with_context(|| format!("Failed to open dataset: {}", path.display()))?;
        let report = describe(&conn).context("Failed to read schema")?;

        println!("{} {}", style("Dataset:").bold().cyan(), path.display());
        println!();
        print_report(&report);

        Ok(())
    }
}

fn print_report(report: &SchemaReport) {
    for table in &report.tables {
        let kind = if table.table.is_required() {
            "required"
        } else {
            "optional"
        };
        let concrete = match &table.concrete {
            Some(name) => style(name.clone()).green(),
            None => style("(missing)".to_string()).red(),
        };
        println!(
            "{} {} -> {}",
            style(table.table.to_string()).bold().yellow(),
            style(format!("[{kind}]")).dim(),
            concrete
        );

        if table.concrete.is_none() {
            continue;
        }
        for column in &table.columns {
            let marker = if column.required { "*" } else { " " };
            let concrete = match &column.concrete {
                Some(name) => style(name.clone()).green(),
                None if column.required => style("(missing)".to_string()).red(),
                None => style("-".to_string()).dim(),
            };
            println!("  {}{:<18} {}", marker, column.logical, concrete);
        }
    }

    println!();
    if report.is_loadable() {
        println!("{}", style("Loadable: yes").bold().green());
    } else {
        println!("{}", style("Loadable: no").bold().red());
    }
}
