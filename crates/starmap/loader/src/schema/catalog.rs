//! Live table and column listings.
//!
//! The resolver only needs names, so it talks to a [`SchemaCatalog`] rather
//! than to SQLite directly. Tests use [`MemoryCatalog`].
use rusqlite::Connection;

use crate::error::Result;

/// Source of table and column names for schema resolution.
pub trait SchemaCatalog {
    /// Names of every user table.
    fn tables(&self) -> Result<Vec<String>>;

    /// Column names of `table` in declaration order. Empty for unknown tables.
    fn columns(&self, table: &str) -> Result<Vec<String>>;
}

impl SchemaCatalog for Connection {
    fn tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    fn columns(&self, table: &str) -> Result<Vec<String>> {
        let mut stmt = self.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
        let names = stmt
            .query_map([table], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }
}

/// In-memory catalog for resolver tests and offline tooling.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    tables: Vec<(String, Vec<String>)>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table with the given columns.
    pub fn with_table(mut self, name: &str, columns: &[&str]) -> Self {
        self.tables.push((
            name.to_string(),
            columns.iter().map(|c| c.to_string()).collect(),
        ));
        self
    }
}

impl SchemaCatalog for MemoryCatalog {
    fn tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|(name, _)| name.clone()).collect())
    }

    fn columns(&self, table: &str) -> Result<Vec<String>> {
        Ok(self
            .tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, columns)| columns.clone())
            .unwrap_or_default())
    }
}
