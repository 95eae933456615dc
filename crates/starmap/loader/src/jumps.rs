//! Jump link loading.
//!
//! Jumps are an optional relation: a dataset without a jumps table or its
//! endpoint columns yields no links rather than an error. Database errors
//! still surface. Links are returned sorted by `(from, to)` with duplicate
//! rows kept.
use std::collections::HashSet;

use rusqlite::Connection;
use starmap_core::{Jump, SystemId};
use tracing::debug;

use crate::coerce;
use crate::enrich::absent_on_schema;
use crate::error::Result;
use crate::query::{self, quote_ident};
use crate::schema::{JumpColumns, LogicalTable, resolve_optional_table};

/// Reads jump links, optionally restricted to links whose endpoints are both
/// in `filter`.
pub fn read_jumps(
    conn: &Connection,
    filter: Option<&[SystemId]>,
    chunk_size: usize,
) -> Result<Vec<Jump>> {
    match query_jumps(conn, filter, chunk_size)? {
        Some(jumps) => Ok(jumps),
        None => {
            debug!("Skipping jump links: not present in dataset");
            Ok(Vec::new())
        }
    }
}

fn query_jumps(
    conn: &Connection,
    filter: Option<&[SystemId]>,
    chunk_size: usize,
) -> Result<Option<Vec<Jump>>> {
    let Some(table) = resolve_optional_table(conn, LogicalTable::Jumps)? else {
        return Ok(None);
    };
    let Some(columns) = absent_on_schema(JumpColumns::resolve(conn, &table))? else {
        return Ok(None);
    };

    let select = format!(
        "SELECT {}, {} FROM {}",
        quote_ident(&columns.from),
        quote_ident(&columns.to),
        quote_ident(&table)
    );
    let map_row = |row: &rusqlite::Row<'_>| -> Result<Option<Jump>> {
        let from = coerce::as_integer(&query::value(row, 0)?);
        let to = coerce::as_integer(&query::value(row, 1)?);
        Ok(from
            .zip(to)
            .map(|(from, to)| Jump::new(SystemId(from), SystemId(to))))
    };

    let rows = match filter {
        None => {
            let mut stmt = conn.prepare(&select)?;
            let mut rows = stmt.query([])?;
            let mut out = Vec::new();
            while let Some(row) = rows.next()? {
                out.push(map_row(row)?);
            }
            out
        }
        Some(ids) => {
            let keys: Vec<i64> = ids
                .iter()
                .map(|id| id.get())
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            let allowed: HashSet<SystemId> = ids.iter().copied().collect();
            let from_column = quote_ident(&columns.from);
            // Only `from` goes into SQL; `to` is checked against the whole set
            // so links crossing chunk boundaries survive.
            query::query_chunked(
                conn,
                &keys,
                chunk_size,
                |marks| format!("{select} WHERE {from_column} IN ({marks})"),
                map_row,
            )?
            .into_iter()
            .map(|jump| jump.filter(|jump| allowed.contains(&jump.to)))
            .collect()
        }
    };

    let total = rows.len();
    let mut jumps: Vec<Jump> = rows.into_iter().flatten().collect();
    if jumps.len() < total && filter.is_none() {
        debug!("Skipped {} jump rows with unusable endpoints", total - jumps.len());
    }
    jumps.sort();
    Ok(Some(jumps))
}
