//! Data model for universe datasets.
//!
//! `starmap-core` defines the plain value objects a dataset load produces
//! (systems, planets, moons, jump links) and pure analysis over them. It does
//! no I/O; `starmap-loader` fills these types from SQLite and other crates
//! consume them read-only.
pub mod ids;
pub mod model;
pub mod network;

pub use ids::{MoonId, PlanetId, SystemId};
pub use model::{Jump, LoadSummary, Moon, Planet, Position, System};
pub use network::{JumpGraph, Triangle};
