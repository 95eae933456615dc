//! SQL building blocks shared by the loaders.
//!
//! Filter sets are split into chunks so a single statement never binds more
//! than [`MAX_SQL_VARS`] parameters (SQLite's classic ceiling is 999).
use rusqlite::{Connection, Row, ToSql, params_from_iter};

use crate::error::Result;

/// Largest number of bound parameters per statement.
pub const MAX_SQL_VARS: usize = 900;

/// Quotes an identifier for interpolation into SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `?, ?, ?` with `count` placeholders.
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Quoted, comma separated select list.
pub fn select_list<'a>(columns: impl IntoIterator<Item = &'a str>) -> String {
    columns
        .into_iter()
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Clamps a configured chunk size into `1..=MAX_SQL_VARS`.
pub fn clamp_chunk(chunk_size: usize) -> usize {
    chunk_size.clamp(1, MAX_SQL_VARS)
}

/// Runs one statement per chunk of `keys` and concatenates the mapped rows.
///
/// `sql_for` receives the placeholder list for the chunk. An empty key set
/// issues no query.
pub fn query_chunked<K, T, S, F>(
    conn: &Connection,
    keys: &[K],
    chunk_size: usize,
    sql_for: S,
    mut map_row: F,
) -> Result<Vec<T>>
where
    K: ToSql,
    S: Fn(&str) -> String,
    F: FnMut(&Row<'_>) -> Result<T>,
{
    let mut out = Vec::new();
    for chunk in keys.chunks(clamp_chunk(chunk_size)) {
        let sql = sql_for(&placeholders(chunk.len()));
        let mut stmt = conn.prepare_cached(&sql)?;
        let mut rows = stmt.query(params_from_iter(chunk.iter()))?;
        while let Some(row) = rows.next()? {
            out.push(map_row(row)?);
        }
    }
    Ok(out)
}

/// Reads column `idx` as a dynamically typed value.
pub fn value(row: &Row<'_>, idx: usize) -> Result<rusqlite::types::Value> {
    Ok(row.get(idx)?)
}
