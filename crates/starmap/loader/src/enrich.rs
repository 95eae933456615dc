//! Optional attributes layered onto loaded systems.
//!
//! Region and constellation names come from lookup tables joined through the
//! system's foreign keys; station counts come from a stations table. Each is
//! attempted through [`degrade`], so a missing table, a missing column, or a
//! failing query leaves the attribute unset instead of failing the load.
use std::collections::{BTreeSet, HashMap};

use rusqlite::Connection;
use starmap_core::System;
use tracing::{debug, warn};

use crate::coerce;
use crate::error::{LoaderError, Result};
use crate::query::{self, quote_ident};
use crate::schema::{LogicalTable, LookupColumns, StationColumns, TableIndex};

/// Runs an optional lookup.
///
/// `Ok(None)` means the data is not present in this dataset; errors are logged
/// and swallowed. Either way the caller gets `None`.
pub fn degrade<T>(feature: &str, attempt: impl FnOnce() -> Result<Option<T>>) -> Option<T> {
    match attempt() {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            debug!("Skipping {}: not present in dataset", feature);
            None
        }
        Err(err) => {
            warn!("Skipping {}: {}", feature, err);
            None
        }
    }
}

/// Maps a schema miss to `Ok(None)`; every other error passes through.
pub fn absent_on_schema<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(LoaderError::Schema(err)) => {
            debug!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Fills region names, constellation names and station counts in place.
pub fn annotate(conn: &Connection, index: &TableIndex, systems: &mut [System], chunk_size: usize) {
    let region_keys = distinct(systems.iter().filter_map(|system| system.region_id));
    if let Some(names) = degrade("region names", || {
        lookup_names(conn, index, LogicalTable::Regions, &region_keys, chunk_size)
    }) {
        for system in systems.iter_mut() {
            system.region_name = system.region_id.and_then(|id| names.get(&id).cloned());
        }
    }

    let constellation_keys = distinct(systems.iter().filter_map(|system| system.constellation_id));
    if let Some(names) = degrade("constellation names", || {
        lookup_names(
            conn,
            index,
            LogicalTable::Constellations,
            &constellation_keys,
            chunk_size,
        )
    }) {
        for system in systems.iter_mut() {
            system.constellation_name = system
                .constellation_id
                .and_then(|id| names.get(&id).cloned());
        }
    }

    let system_keys: Vec<i64> = systems.iter().map(|system| system.id.get()).collect();
    if let Some(counts) = degrade("station counts", || {
        station_counts(conn, index, &system_keys, chunk_size)
    }) {
        for system in systems.iter_mut() {
            system.npc_station_count = counts.get(&system.id.get()).copied().unwrap_or(0);
        }
    }
}

fn distinct(keys: impl Iterator<Item = i64>) -> Vec<i64> {
    keys.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Names keyed by id from a region or constellation table.
pub fn lookup_names(
    conn: &Connection,
    index: &TableIndex,
    lookup: LogicalTable,
    keys: &[i64],
    chunk_size: usize,
) -> Result<Option<HashMap<i64, String>>> {
    if keys.is_empty() {
        return Ok(None);
    }
    let Some(table) = index.find(lookup) else {
        return Ok(None);
    };
    let Some(columns) = absent_on_schema(LookupColumns::resolve(conn, lookup, table))? else {
        return Ok(None);
    };

    let select = format!(
        "SELECT {}, {} FROM {} WHERE {}",
        quote_ident(&columns.id),
        quote_ident(&columns.name),
        quote_ident(table),
        quote_ident(&columns.id)
    );
    let rows = query::query_chunked(
        conn,
        keys,
        chunk_size,
        |marks| format!("{select} IN ({marks})"),
        |row| {
            let id = coerce::as_integer(&query::value(row, 0)?);
            let name = coerce::as_text(&query::value(row, 1)?);
            Ok(id.zip(name))
        },
    )?;

    let mut names = HashMap::new();
    for (id, name) in rows.into_iter().flatten() {
        names.entry(id).or_insert(name);
    }
    Ok(Some(names))
}

/// Number of station rows referencing each of `system_keys`.
pub fn station_counts(
    conn: &Connection,
    index: &TableIndex,
    system_keys: &[i64],
    chunk_size: usize,
) -> Result<Option<HashMap<i64, u32>>> {
    let Some(table) = index.find(LogicalTable::Stations) else {
        return Ok(None);
    };
    let Some(columns) = absent_on_schema(StationColumns::resolve(conn, table))? else {
        return Ok(None);
    };

    let column = quote_ident(&columns.system);
    let table = quote_ident(table);
    let rows = query::query_chunked(
        conn,
        system_keys,
        chunk_size,
        |marks| {
            format!("SELECT {column}, COUNT(*) FROM {table} WHERE {column} IN ({marks}) GROUP BY {column}")
        },
        |row| {
            let system = coerce::as_integer(&query::value(row, 0)?);
            let count: i64 = row.get(1)?;
            Ok(system.map(|system| (system, count)))
        },
    )?;

    let mut counts: HashMap<i64, u32> = HashMap::new();
    for (system, count) in rows.into_iter().flatten() {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let slot = counts.entry(system).or_default();
        *slot = slot.saturating_add(count);
    }
    Ok(Some(counts))
}
