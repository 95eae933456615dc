//! Ordered synonym lists for every logical table and column.
//!
//! Matching is case-insensitive; list order is priority. Spellings keep the
//! casing seen in real exports so error messages read naturally.
use strum::{Display, EnumIter, IntoStaticStr};

/// A table concept of the normalized schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LogicalTable {
    Systems,
    Planets,
    Moons,
    Jumps,
    Stations,
    Regions,
    Constellations,
}

impl LogicalTable {
    /// Acceptable concrete names, highest priority first.
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Systems => &[
                "systems",
                "system",
                "solarSystems",
                "solar_systems",
                "mapSolarSystems",
            ],
            Self::Planets => &["planets", "planet", "mapPlanets"],
            Self::Moons => &["moons", "moon", "mapMoons"],
            Self::Jumps => &[
                "jumps",
                "jump",
                "systemJumps",
                "solarSystemJumps",
                "mapSolarSystemJumps",
            ],
            Self::Stations => &["npcStations", "npc_stations", "stations", "staStations"],
            Self::Regions => &["regions", "region", "mapRegions"],
            Self::Constellations => &["constellations", "constellation", "mapConstellations"],
        }
    }

    /// Required tables fail the load when absent; the rest only disable features.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Systems | Self::Planets | Self::Moons)
    }
}

/// A column concept of the normalized schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub logical: &'static str,
    pub synonyms: &'static [&'static str],
}

impl ColumnSpec {
    const fn new(logical: &'static str, synonyms: &'static [&'static str]) -> Self {
        Self { logical, synonyms }
    }
}

// Systems
pub const SYSTEM_ID: ColumnSpec = ColumnSpec::new(
    "id",
    &["id", "system_id", "solarSystemId", "solar_system_id"],
);
pub const SYSTEM_NAME: ColumnSpec = ColumnSpec::new(
    "name",
    &["name", "system_name", "solarSystemName", "solar_system_name"],
);
pub const SYSTEM_X: ColumnSpec =
    ColumnSpec::new("x", &["x", "posx", "positionX", "centerX", "center_x"]);
pub const SYSTEM_Y: ColumnSpec =
    ColumnSpec::new("y", &["y", "posy", "positionY", "centerY", "center_y"]);
pub const SYSTEM_Z: ColumnSpec =
    ColumnSpec::new("z", &["z", "posz", "positionZ", "centerZ", "center_z"]);
pub const SYSTEM_SECURITY: ColumnSpec = ColumnSpec::new(
    "security",
    &["security", "securityStatus", "security_status"],
);
pub const SYSTEM_REGION: ColumnSpec = ColumnSpec::new("region_id", &["regionId", "region_id"]);
pub const SYSTEM_CONSTELLATION: ColumnSpec =
    ColumnSpec::new("constellation_id", &["constellationId", "constellation_id"]);

// Planets
pub const PLANET_ID: ColumnSpec = ColumnSpec::new("id", &["id", "planetId", "planet_id"]);
pub const PLANET_SYSTEM: ColumnSpec = ColumnSpec::new(
    "system_id",
    &["system_id", "solarSystemId", "solar_system_id", "systemId"],
);
pub const PLANET_NAME: ColumnSpec =
    ColumnSpec::new("name", &["name", "planetName", "planet_name"]);
pub const PLANET_ORBIT: ColumnSpec = ColumnSpec::new(
    "orbit_index",
    &["orbit_index", "orbitIndex", "celestialIndex"],
);
pub const PLANET_TYPE: ColumnSpec = ColumnSpec::new(
    "planet_type",
    &["planet_type", "planetType", "typeId", "type"],
);

// Moons
pub const MOON_ID: ColumnSpec = ColumnSpec::new("id", &["id", "moonId", "moon_id"]);
pub const MOON_PLANET: ColumnSpec = ColumnSpec::new("planet_id", &["planet_id", "planetId"]);
pub const MOON_NAME: ColumnSpec = ColumnSpec::new("name", &["name", "moonName", "moon_name"]);
pub const MOON_ORBIT: ColumnSpec = ColumnSpec::new(
    "orbit_index",
    &["orbit_index", "orbitIndex", "celestialIndex"],
);

// Jumps
pub const JUMP_FROM: ColumnSpec = ColumnSpec::new(
    "from_system_id",
    &[
        "fromSystemId",
        "from_system_id",
        "fromSolarSystemId",
        "from_solar_system_id",
        "from_id",
        "source",
    ],
);
pub const JUMP_TO: ColumnSpec = ColumnSpec::new(
    "to_system_id",
    &[
        "toSystemId",
        "to_system_id",
        "toSolarSystemId",
        "to_solar_system_id",
        "to_id",
        "target",
    ],
);

// Stations
pub const STATION_SYSTEM: ColumnSpec = ColumnSpec::new(
    "system_id",
    &["solarSystemId", "solar_system_id", "system_id", "systemId"],
);

// Region / constellation lookups
pub const REGION_ID: ColumnSpec = ColumnSpec::new("id", &["regionId", "region_id", "id"]);
pub const REGION_NAME: ColumnSpec =
    ColumnSpec::new("name", &["name", "regionName", "region_name"]);
pub const CONSTELLATION_ID: ColumnSpec =
    ColumnSpec::new("id", &["constellationId", "constellation_id", "id"]);
pub const CONSTELLATION_NAME: ColumnSpec = ColumnSpec::new(
    "name",
    &["name", "constellationName", "constellation_name"],
);

/// Every column concept of a logical table, required ones first.
pub fn columns_of(table: LogicalTable) -> (&'static [ColumnSpec], &'static [ColumnSpec]) {
    match table {
        LogicalTable::Systems => (
            &[SYSTEM_ID, SYSTEM_NAME, SYSTEM_X, SYSTEM_Y, SYSTEM_Z],
            &[SYSTEM_SECURITY, SYSTEM_REGION, SYSTEM_CONSTELLATION],
        ),
        LogicalTable::Planets => (
            &[PLANET_ID, PLANET_SYSTEM, PLANET_NAME],
            &[PLANET_ORBIT, PLANET_TYPE],
        ),
        LogicalTable::Moons => (&[MOON_ID, MOON_PLANET, MOON_NAME], &[MOON_ORBIT]),
        LogicalTable::Jumps => (&[JUMP_FROM, JUMP_TO], &[]),
        LogicalTable::Stations => (&[STATION_SYSTEM], &[]),
        LogicalTable::Regions => (&[REGION_ID, REGION_NAME], &[]),
        LogicalTable::Constellations => (&[CONSTELLATION_ID, CONSTELLATION_NAME], &[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn logical_names_are_snake_case() {
        assert_eq!(LogicalTable::Systems.to_string(), "systems");
        let name: &'static str = LogicalTable::Constellations.into();
        assert_eq!(name, "constellations");
    }

    #[test]
    fn only_the_celestial_tree_is_required() {
        let required: Vec<_> = LogicalTable::iter().filter(|t| t.is_required()).collect();
        assert_eq!(
            required,
            vec![
                LogicalTable::Systems,
                LogicalTable::Planets,
                LogicalTable::Moons
            ]
        );
    }

    #[test]
    fn synonym_lists_have_no_case_insensitive_duplicates() {
        for table in LogicalTable::iter() {
            let (required, optional) = columns_of(table);
            let lists = std::iter::once(table.synonyms())
                .chain(required.iter().chain(optional).map(|c| c.synonyms));
            for list in lists {
                let mut lowered: Vec<String> = list.iter().map(|s| s.to_lowercase()).collect();
                lowered.sort();
                lowered.dedup();
                assert_eq!(lowered.len(), list.len(), "duplicate synonym in {list:?}");
            }
        }
    }
}
