//! Command implementations for starmap
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod islands;
mod jumps;
mod schema;
mod summary;
mod systems;

pub use islands::Islands;
pub use jumps::Jumps;
pub use schema::Schema;
pub use summary::Summary;
pub use systems::Systems;

use std::path::PathBuf;

use clap::Args;
use starmap_loader::LoaderConfig;

use crate::dirs;

/// Dataset location shared by every command.
#[derive(Args, Clone, Debug)]
pub struct DatabaseArg {
    /// SQLite dataset (defaults to $STARMAP_DB, then the platform data directory)
    #[arg(value_name = "DB")]
    database: Option<PathBuf>,
}

impl DatabaseArg {
    /// Explicit argument first, then the environment, then the platform default.
    pub fn resolve(&self, config: &LoaderConfig) -> PathBuf {
        self.database
            .clone()
            .or_else(|| config.dataset_path.clone())
            .unwrap_or_else(dirs::default_database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn dataset() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("static.db");
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE systems (id INTEGER, name TEXT, x REAL, y REAL, z REAL);
             INSERT INTO systems VALUES (1, 'Alpha', 0, 0, 0), (2, 'Beta', 0, 0, 0), (3, 'Gamma', 0, 0, 0);
             CREATE TABLE planets (id INTEGER, system_id INTEGER, name TEXT);
             INSERT INTO planets VALUES (10, 1, 'Alpha I');
             CREATE TABLE moons (id INTEGER, planet_id INTEGER, name TEXT);
             CREATE TABLE jumps (from_id INTEGER, to_id INTEGER);
             INSERT INTO jumps VALUES (1, 2), (2, 1), (2, 3), (3, 2), (3, 1), (1, 3);",
        )
        .unwrap();
        let path = path.to_str().unwrap().to_string();
        (dir, path)
    }

    #[test]
    fn every_command_runs_against_a_dataset() {
        let (_dir, db) = dataset();
        let config = LoaderConfig::default();

        Summary::try_parse_from(["summary", db.as_str()])
            .unwrap()
            .execute(&config)
            .unwrap();
        Systems::try_parse_from(["systems", db.as_str(), "--format", "json", "--limit", "2"])
            .unwrap()
            .execute(&config)
            .unwrap();
        Jumps::try_parse_from(["jumps", db.as_str(), "--systems", "1,2"])
            .unwrap()
            .execute(&config)
            .unwrap();
        Schema::try_parse_from(["schema", db.as_str()])
            .unwrap()
            .execute(&config)
            .unwrap();
        Islands::try_parse_from(["islands", db.as_str()])
            .unwrap()
            .execute(&config)
            .unwrap();
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let config = LoaderConfig::default();
        let result = Summary::try_parse_from(["summary", "/definitely/not/here.db"])
            .unwrap()
            .execute(&config);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_path_beats_environment() {
        let config = LoaderConfig {
            dataset_path: Some(PathBuf::from("/env/static.db")),
            ..LoaderConfig::default()
        };

        let explicit = DatabaseArg {
            database: Some(PathBuf::from("local.db")),
        };
        assert_eq!(explicit.resolve(&config), PathBuf::from("local.db"));

        let implicit = DatabaseArg { database: None };
        assert_eq!(implicit.resolve(&config), PathBuf::from("/env/static.db"));
        assert_eq!(
            implicit.resolve(&LoaderConfig::default()),
            dirs::default_database()
        );
    }
}
