//! Schema resolution: logical tables and columns to concrete names.
mod catalog;
mod resolver;
mod synonyms;

pub use catalog::{MemoryCatalog, SchemaCatalog};
pub use resolver::{
    ColumnReport, ColumnResolver, JumpColumns, LookupColumns, MoonColumns, PlanetColumns,
    ResolvedTables, SchemaReport, StationColumns, SystemColumns, TableIndex, TableReport,
    describe, resolve_column, resolve_name, resolve_optional_table, resolve_tables,
};
pub use synonyms::{ColumnSpec, LogicalTable, columns_of};

/// Column synonym constants, one per logical column.
pub mod columns {
    pub use super::synonyms::{
        CONSTELLATION_ID, CONSTELLATION_NAME, JUMP_FROM, JUMP_TO, MOON_ID, MOON_NAME, MOON_ORBIT,
        MOON_PLANET, PLANET_ID, PLANET_NAME, PLANET_ORBIT, PLANET_SYSTEM, PLANET_TYPE, REGION_ID,
        REGION_NAME, STATION_SYSTEM, SYSTEM_CONSTELLATION, SYSTEM_ID, SYSTEM_NAME, SYSTEM_REGION,
        SYSTEM_SECURITY, SYSTEM_X, SYSTEM_Y, SYSTEM_Z,
    };
}
