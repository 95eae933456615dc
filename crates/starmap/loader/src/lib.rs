//! SQLite dataset loader for the star map.
//!
//! Reads systems, planets and moons from a static export whose table and
//! column names vary between sources, and returns them as a
//! [`starmap_core::System`] forest. Names are matched through ordered synonym
//! lists (see [`schema`]); optional data (security, region and constellation
//! names, station counts, jump links) is loaded when present and silently
//! skipped when not.
//!
//! The free functions [`load_data`], [`load_jumps`] and [`clear_cache`] share
//! one process-wide [`DatasetLoader`]. Construct a `DatasetLoader` directly for
//! an isolated cache.
//!
//! ```no_run
//! use starmap_loader::{LoadOptions, load_data};
//!
//! let systems = load_data("data/static.db", LoadOptions::default().limit(100))?;
//! println!("{} systems", systems.len());
//! # Ok::<(), starmap_loader::LoaderError>(())
//! ```
pub mod assemble;
pub mod cache;
pub mod coerce;
pub mod config;
pub mod enrich;
pub mod error;
pub mod jumps;
pub mod loader;
pub mod mapper;
pub mod query;
pub mod schema;
pub mod state;

use std::path::Path;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use starmap_core::{Jump, System, SystemId};

pub use cache::{Fingerprint, IdentityCache};
pub use config::LoaderConfig;
pub use error::{LoaderError, Result, SchemaError};
pub use loader::{DatasetLoader, LoadOptions, open_read_only, read_systems};
pub use query::MAX_SQL_VARS;
pub use schema::{LogicalTable, SchemaReport, describe};
pub use state::DatasetState;

static SHARED: LazyLock<Mutex<DatasetLoader>> =
    LazyLock::new(|| Mutex::new(DatasetLoader::new(LoaderConfig::from_env())));

fn shared() -> MutexGuard<'static, DatasetLoader> {
    // The cache holds only complete results, so a panic elsewhere leaves it usable.
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Loads the system forest at `path` through the shared loader.
pub fn load_data(path: impl AsRef<Path>, options: LoadOptions) -> Result<Arc<[System]>> {
    shared().load_data(path, options)
}

/// Loads jump links at `path`, optionally restricted to `filter`.
pub fn load_jumps(path: impl AsRef<Path>, filter: Option<&[SystemId]>) -> Result<Arc<[Jump]>> {
    let config = shared().config().clone();
    loader::read_jump_file(path.as_ref(), filter, &config)
}

/// Drops every entry of the shared cache.
pub fn clear_cache() {
    shared().clear_cache();
}
