#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

/// Temporary SQLite file populated from a SQL script.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new(sql: &str) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("static.db");
        let conn = Connection::open(&path).expect("database should open");
        conn.execute_batch(sql).expect("fixture SQL should apply");
        Self { _dir: dir, path }
    }

    /// Applies more SQL to the fixture database.
    pub fn execute(&self, sql: &str) {
        let conn = Connection::open(&self.path).expect("database should open");
        conn.execute_batch(sql).expect("fixture SQL should apply");
    }
}

/// Two systems, one planet, one moon, a bidirectional jump.
pub const ALPHA_BETA: &str = "
    CREATE TABLE systems (id INTEGER PRIMARY KEY, name TEXT, x REAL, y REAL, z REAL, security REAL);
    INSERT INTO systems VALUES (1, 'Alpha', 1000, 2000, 3000, 0.7), (2, 'Beta', -10, 0, 5, -0.2);
    CREATE TABLE planets (id INTEGER PRIMARY KEY, system_id INTEGER, name TEXT, orbit_index INTEGER, planet_type TEXT);
    INSERT INTO planets VALUES (10, 1, 'Alpha I', 1, 'Gas');
    CREATE TABLE moons (id INTEGER PRIMARY KEY, planet_id INTEGER, name TEXT, orbit_index INTEGER);
    INSERT INTO moons VALUES (100, 10, 'Alpha I-a', 1);
    CREATE TABLE jumps (from_system_id INTEGER, to_system_id INTEGER);
    INSERT INTO jumps VALUES (1, 2), (2, 1);
";

/// The same logical data as [`ALPHA_BETA`] in static-export spelling.
pub const ALPHA_BETA_EXPORT: &str = "
    CREATE TABLE mapSolarSystems (solarSystemID INTEGER PRIMARY KEY, solarSystemName TEXT, centerX REAL, centerY REAL, centerZ REAL, securityStatus TEXT, regionID INTEGER, constellationID INTEGER);
    INSERT INTO mapSolarSystems VALUES (2, 'Beta', -10, 0, 5, '-0.2', 10, 100), (1, 'Alpha', 1000, 2000, 3000, '0.7', 10, 100);
    CREATE TABLE mapPlanets (planetID INTEGER PRIMARY KEY, solarSystemID INTEGER, planetName TEXT, celestialIndex INTEGER, typeID INTEGER);
    INSERT INTO mapPlanets VALUES (10, 1, 'Alpha I', 1, 11);
    CREATE TABLE mapMoons (moonID INTEGER PRIMARY KEY, planetID INTEGER, moonName TEXT, celestialIndex INTEGER);
    INSERT INTO mapMoons VALUES (100, 10, 'Alpha I-a', 1);
    CREATE TABLE mapSolarSystemJumps (fromSolarSystemID INTEGER, toSolarSystemID INTEGER);
    INSERT INTO mapSolarSystemJumps VALUES (1, 2), (2, 1);
    CREATE TABLE mapRegions (regionID INTEGER PRIMARY KEY, regionName TEXT);
    INSERT INTO mapRegions VALUES (10, 'Heimatar');
    CREATE TABLE mapConstellations (constellationID INTEGER PRIMARY KEY, constellationName TEXT);
    INSERT INTO mapConstellations VALUES (100, 'Hed');
    CREATE TABLE staStations (stationID INTEGER PRIMARY KEY, solarSystemID INTEGER);
    INSERT INTO staStations VALUES (60000001, 1), (60000002, 1);
";
