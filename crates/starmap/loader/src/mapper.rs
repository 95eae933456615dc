//! Row mapping for systems, planets and moons.
//!
//! Each loader reads only the resolved columns, converts them through
//! [`coerce`](crate::coerce), and returns rows sorted by id. When a table
//! repeats an id the first row wins.
use rusqlite::Connection;
use rusqlite::types::Value;
use starmap_core::{Moon, MoonId, Planet, PlanetId, Position, System, SystemId};
use tracing::{debug, warn};

use crate::coerce::{self, Field};
use crate::error::Result;
use crate::query::{self, quote_ident, select_list};
use crate::schema::{MoonColumns, PlanetColumns, SystemColumns};

/// Select list under construction; remembers where each column landed.
#[derive(Default)]
struct Projection<'a> {
    columns: Vec<&'a str>,
}

impl<'a> Projection<'a> {
    fn push(&mut self, column: &'a str) -> usize {
        self.columns.push(column);
        self.columns.len() - 1
    }

    fn push_optional(&mut self, column: Option<&'a str>) -> Option<usize> {
        column.map(|column| self.push(column))
    }

    fn sql(&self) -> String {
        select_list(self.columns.iter().copied())
    }

    fn read(&self, row: &rusqlite::Row<'_>) -> Result<Vec<Value>> {
        (0..self.columns.len())
            .map(|idx| query::value(row, idx))
            .collect()
    }
}

fn optional<T>(values: &[Value], idx: Option<usize>, view: fn(&Value) -> Option<T>) -> Option<T> {
    idx.and_then(|idx| view(&values[idx]))
}

/// Reads systems in ascending id order, at most `limit` of them.
pub fn load_systems(
    conn: &Connection,
    table: &str,
    columns: &SystemColumns,
    limit: Option<usize>,
) -> Result<Vec<System>> {
    if limit == Some(0) {
        return Ok(Vec::new());
    }

    let mut projection = Projection::default();
    let id = projection.push(&columns.id);
    let name = projection.push(&columns.name);
    let x = projection.push(&columns.x);
    let y = projection.push(&columns.y);
    let z = projection.push(&columns.z);
    let security = projection.push_optional(columns.security.as_deref());
    let region = projection.push_optional(columns.region.as_deref());
    let constellation = projection.push_optional(columns.constellation.as_deref());

    // Ids may be stored as TEXT, which SQLite orders lexically, so the limit
    // is applied after sorting on the coerced value.
    let sql = format!("SELECT {} FROM {}", projection.sql(), quote_ident(table));

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut systems = Vec::new();
    while let Some(row) = rows.next()? {
        let values = projection.read(row)?;
        let mut system = System::new(
            SystemId(Field::new(table, &columns.id).integer(&values[id])?),
            coerce::as_name(&values[name]),
            Position::new(
                Field::new(table, &columns.x).real(&values[x])?,
                Field::new(table, &columns.y).real(&values[y])?,
                Field::new(table, &columns.z).real(&values[z])?,
            ),
        );
        system.security = optional(&values, security, coerce::as_real);
        system.region_id = optional(&values, region, coerce::as_integer);
        system.constellation_id = optional(&values, constellation, coerce::as_integer);
        systems.push(system);
    }

    keep_first(&mut systems, table, |system| system.id.get());
    if let Some(limit) = limit {
        systems.truncate(limit);
    }
    debug!("Read {} systems from {}", systems.len(), table);
    Ok(systems)
}

/// Reads the planets of `system_ids`, batching the id filter.
pub fn load_planets(
    conn: &Connection,
    table: &str,
    columns: &PlanetColumns,
    system_ids: &[SystemId],
    chunk_size: usize,
) -> Result<Vec<Planet>> {
    let mut projection = Projection::default();
    let id = projection.push(&columns.id);
    let system = projection.push(&columns.system);
    let name = projection.push(&columns.name);
    let orbit = projection.push_optional(columns.orbit.as_deref());
    let planet_type = projection.push_optional(columns.planet_type.as_deref());

    let select = format!(
        "SELECT {} FROM {} WHERE {}",
        projection.sql(),
        quote_ident(table),
        quote_ident(&columns.system)
    );
    let keys: Vec<i64> = system_ids.iter().map(|id| id.get()).collect();

    let mut planets = query::query_chunked(
        conn,
        &keys,
        chunk_size,
        |marks| format!("{select} IN ({marks})"),
        |row| {
            let values = projection.read(row)?;
            let mut planet = Planet::new(
                PlanetId(Field::new(table, &columns.id).integer(&values[id])?),
                SystemId(Field::new(table, &columns.system).integer(&values[system])?),
                coerce::as_name(&values[name]),
            );
            planet.orbit_index = optional(&values, orbit, coerce::as_integer);
            planet.planet_type = optional(&values, planet_type, coerce::as_text);
            Ok(planet)
        },
    )?;

    keep_first(&mut planets, table, |planet| planet.id.get());
    debug!("Read {} planets from {}", planets.len(), table);
    Ok(planets)
}

/// Reads the moons of `planet_ids`, batching the id filter.
pub fn load_moons(
    conn: &Connection,
    table: &str,
    columns: &MoonColumns,
    planet_ids: &[PlanetId],
    chunk_size: usize,
) -> Result<Vec<Moon>> {
    let mut projection = Projection::default();
    let id = projection.push(&columns.id);
    let planet = projection.push(&columns.planet);
    let name = projection.push(&columns.name);
    let orbit = projection.push_optional(columns.orbit.as_deref());

    let select = format!(
        "SELECT {} FROM {} WHERE {}",
        projection.sql(),
        quote_ident(table),
        quote_ident(&columns.planet)
    );
    let keys: Vec<i64> = planet_ids.iter().map(|id| id.get()).collect();

    let mut moons = query::query_chunked(
        conn,
        &keys,
        chunk_size,
        |marks| format!("{select} IN ({marks})"),
        |row| {
            let values = projection.read(row)?;
            let mut moon = Moon::new(
                MoonId(Field::new(table, &columns.id).integer(&values[id])?),
                PlanetId(Field::new(table, &columns.planet).integer(&values[planet])?),
                coerce::as_name(&values[name]),
            );
            moon.orbit_index = optional(&values, orbit, coerce::as_integer);
            Ok(moon)
        },
    )?;

    keep_first(&mut moons, table, |moon| moon.id.get());
    debug!("Read {} moons from {}", moons.len(), table);
    Ok(moons)
}

/// Sorts by id and drops repeated ids, keeping the first row read.
fn keep_first<T>(items: &mut Vec<T>, table: &str, key: impl Fn(&T) -> i64) {
    items.sort_by_key(|item| key(item));
    let before = items.len();
    items.dedup_by(|later, earlier| key(later) == key(earlier));
    let dropped = before - items.len();
    if dropped > 0 {
        warn!("Ignored {} rows with repeated ids in {}", dropped, table);
    }
}
