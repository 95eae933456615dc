//! Maps logical tables and columns onto the names a database actually uses.
//!
//! Everything here is a pure function of (available names, synonym lists);
//! the only I/O is the name listing obtained through [`SchemaCatalog`].
use strum::IntoEnumIterator;

use crate::error::{Result, SchemaError};
use crate::schema::catalog::SchemaCatalog;
use crate::schema::synonyms::{self, ColumnSpec, LogicalTable};

/// Finds the first synonym present in `available`, ignoring case.
///
/// Synonym order decides priority; the concrete spelling from `available` is
/// returned.
pub fn resolve_name<'a, S: AsRef<str>>(available: &'a [S], synonyms: &[&str]) -> Option<&'a str> {
    synonyms.iter().find_map(|candidate| {
        available
            .iter()
            .map(|name| -> &'a str { name.as_ref() })
            .find(|name| name.eq_ignore_ascii_case(candidate))
    })
}

/// Resolves one logical column against a table's column list.
pub fn resolve_column<S: AsRef<str>>(columns: &[S], spec: ColumnSpec) -> Option<String> {
    resolve_name(columns, spec.synonyms).map(str::to_string)
}

/// Snapshot of the table names present in a database.
#[derive(Clone, Debug)]
pub struct TableIndex {
    names: Vec<String>,
}

impl TableIndex {
    pub fn load(catalog: &impl SchemaCatalog) -> Result<Self> {
        Ok(Self::new(catalog.tables()?))
    }

    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Concrete name of a logical table, if any synonym is present.
    pub fn find(&self, table: LogicalTable) -> Option<&str> {
        resolve_name(&self.names, table.synonyms())
    }

    /// Like [`find`](Self::find) but fails with the synonyms tried and the
    /// tables that exist.
    pub fn require(&self, table: LogicalTable) -> std::result::Result<&str, SchemaError> {
        self.find(table).ok_or_else(|| {
            let mut available = self.names.clone();
            available.sort();
            SchemaError::MissingTable {
                table,
                synonyms: table.synonyms(),
                available,
            }
        })
    }
}

/// Concrete names of the three required tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTables {
    pub systems: String,
    pub planets: String,
    pub moons: String,
}

impl ResolvedTables {
    pub fn from_index(index: &TableIndex) -> std::result::Result<Self, SchemaError> {
        Ok(Self {
            systems: index.require(LogicalTable::Systems)?.to_string(),
            planets: index.require(LogicalTable::Planets)?.to_string(),
            moons: index.require(LogicalTable::Moons)?.to_string(),
        })
    }
}

/// Resolves the systems, planets and moons tables.
pub fn resolve_tables(catalog: &impl SchemaCatalog) -> Result<ResolvedTables> {
    let index = TableIndex::load(catalog)?;
    Ok(ResolvedTables::from_index(&index)?)
}

/// Resolves an optional logical table; `None` when no synonym is present.
pub fn resolve_optional_table(
    catalog: &impl SchemaCatalog,
    table: LogicalTable,
) -> Result<Option<String>> {
    let index = TableIndex::load(catalog)?;
    Ok(index.find(table).map(str::to_string))
}

/// Collects column lookups for one table and reports every missing required
/// column at once.
#[derive(Debug)]
pub struct ColumnResolver {
    table: String,
    available: Vec<String>,
    missing: Vec<&'static str>,
}

impl ColumnResolver {
    pub fn new(table: &str, available: Vec<String>) -> Self {
        Self {
            table: table.to_string(),
            available,
            missing: Vec::new(),
        }
    }

    pub fn load(catalog: &impl SchemaCatalog, table: &str) -> Result<Self> {
        Ok(Self::new(table, catalog.columns(table)?))
    }

    /// Resolves a required column. A miss is recorded and surfaces from
    /// [`finish`](Self::finish); the returned placeholder is never used then.
    pub fn required(&mut self, spec: ColumnSpec) -> String {
        match resolve_column(&self.available, spec) {
            Some(name) => name,
            None => {
                self.missing.push(spec.logical);
                String::new()
            }
        }
    }

    pub fn optional(&self, spec: ColumnSpec) -> Option<String> {
        resolve_column(&self.available, spec)
    }

    /// Returns `columns` if every required lookup succeeded.
    pub fn finish<T>(self, columns: T) -> std::result::Result<T, SchemaError> {
        if self.missing.is_empty() {
            Ok(columns)
        } else {
            Err(SchemaError::MissingColumns {
                table: self.table,
                missing: self.missing,
                available: self.available,
            })
        }
    }
}

/// Concrete column names of the systems table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemColumns {
    pub id: String,
    pub name: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub security: Option<String>,
    pub region: Option<String>,
    pub constellation: Option<String>,
}

impl SystemColumns {
    pub fn resolve(catalog: &impl SchemaCatalog, table: &str) -> Result<Self> {
        let mut columns = ColumnResolver::load(catalog, table)?;
        let resolved = Self {
            id: columns.required(synonyms::SYSTEM_ID),
            name: columns.required(synonyms::SYSTEM_NAME),
            x: columns.required(synonyms::SYSTEM_X),
            y: columns.required(synonyms::SYSTEM_Y),
            z: columns.required(synonyms::SYSTEM_Z),
            security: columns.optional(synonyms::SYSTEM_SECURITY),
            region: columns.optional(synonyms::SYSTEM_REGION),
            constellation: columns.optional(synonyms::SYSTEM_CONSTELLATION),
        };
        Ok(columns.finish(resolved)?)
    }
}

/// Concrete column names of the planets table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanetColumns {
    pub id: String,
    pub system: String,
    pub name: String,
    pub orbit: Option<String>,
    pub planet_type: Option<String>,
}

impl PlanetColumns {
    pub fn resolve(catalog: &impl SchemaCatalog, table: &str) -> Result<Self> {
        let mut columns = ColumnResolver::load(catalog, table)?;
        let resolved = Self {
            id: columns.required(synonyms::PLANET_ID),
            system: columns.required(synonyms::PLANET_SYSTEM),
            name: columns.required(synonyms::PLANET_NAME),
            orbit: columns.optional(synonyms::PLANET_ORBIT),
            planet_type: columns.optional(synonyms::PLANET_TYPE),
        };
        Ok(columns.finish(resolved)?)
    }
}

/// Concrete column names of the moons table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoonColumns {
    pub id: String,
    pub planet: String,
    pub name: String,
    pub orbit: Option<String>,
}

impl MoonColumns {
    pub fn resolve(catalog: &impl SchemaCatalog, table: &str) -> Result<Self> {
        let mut columns = ColumnResolver::load(catalog, table)?;
        let resolved = Self {
            id: columns.required(synonyms::MOON_ID),
            planet: columns.required(synonyms::MOON_PLANET),
            name: columns.required(synonyms::MOON_NAME),
            orbit: columns.optional(synonyms::MOON_ORBIT),
        };
        Ok(columns.finish(resolved)?)
    }
}

/// Endpoint columns of the jumps table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpColumns {
    pub from: String,
    pub to: String,
}

impl JumpColumns {
    pub fn resolve(catalog: &impl SchemaCatalog, table: &str) -> Result<Self> {
        let mut columns = ColumnResolver::load(catalog, table)?;
        let resolved = Self {
            from: columns.required(synonyms::JUMP_FROM),
            to: columns.required(synonyms::JUMP_TO),
        };
        Ok(columns.finish(resolved)?)
    }
}

/// System reference column of the stations table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationColumns {
    pub system: String,
}

impl StationColumns {
    pub fn resolve(catalog: &impl SchemaCatalog, table: &str) -> Result<Self> {
        let mut columns = ColumnResolver::load(catalog, table)?;
        let resolved = Self {
            system: columns.required(synonyms::STATION_SYSTEM),
        };
        Ok(columns.finish(resolved)?)
    }
}

/// Id and name columns of a region or constellation lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupColumns {
    pub id: String,
    pub name: String,
}

impl LookupColumns {
    pub fn resolve(
        catalog: &impl SchemaCatalog,
        lookup: LogicalTable,
        table: &str,
    ) -> Result<Self> {
        let (id, name) = match lookup {
            LogicalTable::Constellations => {
                (synonyms::CONSTELLATION_ID, synonyms::CONSTELLATION_NAME)
            }
            _ => (synonyms::REGION_ID, synonyms::REGION_NAME),
        };
        let mut columns = ColumnResolver::load(catalog, table)?;
        let resolved = Self {
            id: columns.required(id),
            name: columns.required(name),
        };
        Ok(columns.finish(resolved)?)
    }
}

/// How one logical column resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnReport {
    pub logical: &'static str,
    pub required: bool,
    pub concrete: Option<String>,
}

/// How one logical table and its columns resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableReport {
    pub table: LogicalTable,
    pub concrete: Option<String>,
    pub columns: Vec<ColumnReport>,
}

impl TableReport {
    /// True when the table exists and all of its required columns resolved.
    pub fn is_usable(&self) -> bool {
        self.concrete.is_some()
            && self
                .columns
                .iter()
                .all(|column| !column.required || column.concrete.is_some())
    }
}

/// Resolution outcome for every logical table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaReport {
    pub tables: Vec<TableReport>,
}

impl SchemaReport {
    /// True when a full load would pass schema resolution.
    pub fn is_loadable(&self) -> bool {
        self.tables
            .iter()
            .filter(|report| report.table.is_required())
            .all(TableReport::is_usable)
    }

    pub fn table(&self, table: LogicalTable) -> Option<&TableReport> {
        self.tables.iter().find(|report| report.table == table)
    }
}

/// Resolves every logical table and column without failing on absences.
pub fn describe(catalog: &impl SchemaCatalog) -> Result<SchemaReport> {
    let index = TableIndex::load(catalog)?;
    let mut tables = Vec::new();

    for table in LogicalTable::iter() {
        let concrete = index.find(table).map(str::to_string);
        let available = match &concrete {
            Some(name) => catalog.columns(name)?,
            None => Vec::new(),
        };
        let (required, optional) = synonyms::columns_of(table);
        let columns = required
            .iter()
            .map(|spec| (spec, true))
            .chain(optional.iter().map(|spec| (spec, false)))
            .map(|(spec, required)| ColumnReport {
                logical: spec.logical,
                required,
                concrete: resolve_column(&available, *spec),
            })
            .collect();
        tables.push(TableReport {
            table,
            concrete,
            columns,
        });
    }

    Ok(SchemaReport { tables })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoaderError;
    use crate::schema::catalog::MemoryCatalog;

    fn eve_catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_table(
                "SolarSystems",
                &["solarSystemId", "name", "centerX", "centerY", "centerZ", "regionId"],
            )
            .with_table("Planets", &["planetId", "solarSystemId", "planetName"])
            .with_table("Moons", &["moonId", "planetId", "moonName", "orbitIndex"])
            .with_table("Jumps", &["fromSystemId", "toSystemId"])
    }

    #[test]
    fn resolve_name_ignores_case_and_keeps_concrete_spelling() {
        let columns = ["id", "Name", "centerX", "securitystatus"];
        assert_eq!(resolve_name(&columns, &["name", "system_name"]), Some("Name"));
        assert_eq!(resolve_name(&columns, &["centerx"]), Some("centerX"));
        assert_eq!(resolve_name(&columns, &["x", "posx"]), None);
        assert_eq!(resolve_name(&columns, &["nonexistent"]), None);
    }

    #[test]
    fn synonym_order_beats_column_order() {
        let columns = ["solarSystemId", "id"];
        assert_eq!(
            resolve_column(&columns, synonyms::SYSTEM_ID).as_deref(),
            Some("id")
        );
    }

    #[test]
    fn tables_resolve_under_alternate_names() {
        let tables = resolve_tables(&eve_catalog()).unwrap();
        assert_eq!(
            tables,
            ResolvedTables {
                systems: "SolarSystems".to_string(),
                planets: "Planets".to_string(),
                moons: "Moons".to_string(),
            }
        );
    }

    #[test]
    fn missing_required_table_names_synonyms_and_available() {
        let catalog = MemoryCatalog::new().with_table("foo", &["id"]);
        let err = resolve_tables(&catalog).unwrap_err();
        match err {
            LoaderError::Schema(SchemaError::MissingTable {
                table, available, ..
            }) => {
                assert_eq!(table, LogicalTable::Systems);
                assert_eq!(available, vec!["foo"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_planets_table_is_reported_by_logical_name() {
        let catalog = MemoryCatalog::new()
            .with_table("systems", &["id"])
            .with_table("moons", &["id"]);
        let message = resolve_tables(&catalog).unwrap_err().to_string();
        assert!(message.contains("'planets'"), "{message}");
        assert!(message.contains("planets, planet, mapPlanets"), "{message}");
    }

    #[test]
    fn optional_tables_resolve_or_are_absent() {
        let catalog = eve_catalog();
        assert_eq!(
            resolve_optional_table(&catalog, LogicalTable::Jumps).unwrap(),
            Some("Jumps".to_string())
        );
        assert_eq!(
            resolve_optional_table(&catalog, LogicalTable::Stations).unwrap(),
            None
        );
    }

    #[test]
    fn system_columns_resolve_required_and_optional() {
        let columns = SystemColumns::resolve(&eve_catalog(), "SolarSystems").unwrap();
        assert_eq!(columns.id, "solarSystemId");
        assert_eq!(columns.x, "centerX");
        assert_eq!(columns.security, None);
        assert_eq!(columns.region.as_deref(), Some("regionId"));
        assert_eq!(columns.constellation, None);
    }

    #[test]
    fn missing_required_columns_are_reported_together() {
        let catalog = MemoryCatalog::new().with_table("Planets", &["solarSystemId", "planetName"]);
        let err = PlanetColumns::resolve(&catalog, "Planets").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required columns on 'Planets': id (have: solarSystemId, planetName)"
        );

        let catalog = MemoryCatalog::new().with_table("Moons", &["planetRef", "moonName"]);
        let err = MoonColumns::resolve(&catalog, "Moons").unwrap_err();
        assert!(err.to_string().contains("id, planet_id"));
    }

    #[test]
    fn lookup_columns_prefer_specific_id() {
        let catalog = MemoryCatalog::new().with_table("Regions", &["id", "regionId", "name"]);
        let columns = LookupColumns::resolve(&catalog, LogicalTable::Regions, "Regions").unwrap();
        assert_eq!(columns.id, "regionId");
        assert_eq!(columns.name, "name");
    }

    #[test]
    fn describe_reports_every_logical_table() {
        let report = describe(&eve_catalog()).unwrap();
        assert!(report.is_loadable());
        assert_eq!(report.tables.len(), 7);

        let jumps = report.table(LogicalTable::Jumps).unwrap();
        assert!(jumps.is_usable());

        let stations = report.table(LogicalTable::Stations).unwrap();
        assert_eq!(stations.concrete, None);
        assert!(!stations.is_usable());

        let moons = report.table(LogicalTable::Moons).unwrap();
        let orbit = moons
            .columns
            .iter()
            .find(|column| column.logical == "orbit_index")
            .unwrap();
        assert_eq!(orbit.concrete.as_deref(), Some("orbitIndex"));
        assert!(!orbit.required);
    }

    #[test]
    fn describe_flags_unloadable_schema() {
        let catalog = MemoryCatalog::new()
            .with_table("systems", &["id", "name"])
            .with_table("planets", &["id", "system_id", "name"])
            .with_table("moons", &["id", "planet_id", "name"]);
        let report = describe(&catalog).unwrap();
        assert!(!report.is_loadable());
        assert!(!report.table(LogicalTable::Systems).unwrap().is_usable());
    }
}
