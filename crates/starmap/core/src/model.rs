//! Value objects produced by a dataset load.
//!
//! A load yields a forest: each [`System`] owns its [`Planet`]s, each planet
//! owns its [`Moon`]s. Children keep their parent's id as a plain back
//! reference. [`Jump`]s are loaded separately and refer to systems by id only,
//! so jump loading never depends on system loading.
use std::fmt;

use crate::ids::{MoonId, PlanetId, SystemId};

/// Position of a system in universe coordinates (metres in most exports).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A star system with its planets attached in ascending id order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    pub id: SystemId,
    pub name: String,
    pub position: Position,
    /// Security status; always finite when present.
    pub security: Option<f64>,
    pub region_id: Option<i64>,
    pub constellation_id: Option<i64>,
    pub region_name: Option<String>,
    pub constellation_name: Option<String>,
    /// Number of NPC stations in the system, zero when the dataset has none.
    pub npc_station_count: u32,
    pub planets: Vec<Planet>,
}

impl System {
    /// Creates a system with no optional attributes and no planets.
    pub fn new(id: SystemId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            security: None,
            region_id: None,
            constellation_id: None,
            region_name: None,
            constellation_name: None,
            npc_station_count: 0,
            planets: Vec::new(),
        }
    }

    /// Number of moons across every planet of this system.
    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|planet| planet.moons.len()).sum()
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.id == id)
    }
}

/// A planet orbiting a [`System`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planet {
    pub id: PlanetId,
    pub system_id: SystemId,
    pub name: String,
    pub orbit_index: Option<i64>,
    pub planet_type: Option<String>,
    pub moons: Vec<Moon>,
}

impl Planet {
    pub fn new(id: PlanetId, system_id: SystemId, name: impl Into<String>) -> Self {
        Self {
            id,
            system_id,
            name: name.into(),
            orbit_index: None,
            planet_type: None,
            moons: Vec::new(),
        }
    }
}

/// A moon orbiting a [`Planet`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moon {
    pub id: MoonId,
    pub planet_id: PlanetId,
    pub name: String,
    pub orbit_index: Option<i64>,
}

impl Moon {
    pub fn new(id: MoonId, planet_id: PlanetId, name: impl Into<String>) -> Self {
        Self {
            id,
            planet_id,
            name: name.into(),
            orbit_index: None,
        }
    }
}

/// A traversable link between two systems.
///
/// Datasets usually store both directions as separate rows; each row is one
/// `Jump`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jump {
    pub from: SystemId,
    pub to: SystemId,
}

impl Jump {
    pub const fn new(from: SystemId, to: SystemId) -> Self {
        Self { from, to }
    }

    /// The same link walked the other way.
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns true if `id` is either endpoint.
    pub fn touches(&self, id: SystemId) -> bool {
        self.from == id || self.to == id
    }
}

/// Entity counts for a loaded forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadSummary {
    pub systems: usize,
    pub planets: usize,
    pub moons: usize,
}

impl LoadSummary {
    pub fn of(systems: &[System]) -> Self {
        let planets = systems.iter().map(|system| system.planets.len()).sum();
        let moons = systems.iter().map(System::moon_count).sum();
        Self {
            systems: systems.len(),
            planets,
            moons,
        }
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "systems={} planets={} moons={}",
            self.systems, self.planets, self.moons
        )
    }
}
