//! Load orchestration: file checks, connection setup, caching.
use std::path::Path;
use std::sync::Arc;

use rusqlite::{Connection, OpenFlags};
use starmap_core::{Jump, LoadSummary, PlanetId, System, SystemId};
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::cache::{Fingerprint, IdentityCache};
use crate::config::LoaderConfig;
use crate::enrich;
use crate::error::{LoaderError, Result};
use crate::jumps;
use crate::mapper;
use crate::schema::{MoonColumns, PlanetColumns, ResolvedTables, SystemColumns, TableIndex};

/// Per-call load parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep only the first N systems by ascending id.
    pub limit_systems: Option<usize>,
    /// Consult and populate the identity cache.
    pub enable_cache: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            limit_systems: None,
            enable_cache: true,
        }
    }
}

impl LoadOptions {
    pub fn limit(mut self, systems: usize) -> Self {
        self.limit_systems = Some(systems);
        self
    }

    pub fn uncached(mut self) -> Self {
        self.enable_cache = false;
        self
    }
}

/// Loads datasets and remembers results by file identity.
#[derive(Debug, Default)]
pub struct DatasetLoader {
    cache: IdentityCache,
    config: LoaderConfig,
}

impl DatasetLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_cache(config, IdentityCache::new())
    }

    pub fn with_cache(config: LoaderConfig, cache: IdentityCache) -> Self {
        Self { cache, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn cache(&self) -> &IdentityCache {
        &self.cache
    }

    /// Loads the system forest from the SQLite file at `path`.
    ///
    /// With caching enabled, an unchanged file and limit return the very same
    /// allocation as the previous call.
    pub fn load_data(&mut self, path: impl AsRef<Path>, options: LoadOptions) -> Result<Arc<[System]>> {
        let path = path.as_ref();
        ensure_exists(path)?;
        let fingerprint = Fingerprint::of(path, options.limit_systems)?;

        if options.enable_cache
            && let Some(systems) = self.cache.get(&fingerprint)
        {
            debug!("Cache hit for {} [{}]", path.display(), fingerprint.digest());
            return Ok(systems);
        }

        let conn = open_read_only(path)?;
        let systems: Arc<[System]> = read_systems(&conn, options.limit_systems, &self.config)?.into();
        self.report(path, &fingerprint, &systems);

        if options.enable_cache {
            self.cache.insert(fingerprint, Arc::clone(&systems));
        }
        Ok(systems)
    }

    /// Loads jump links, keeping only links with both endpoints in `filter`
    /// when one is given.
    pub fn load_jumps(&self, path: impl AsRef<Path>, filter: Option<&[SystemId]>) -> Result<Arc<[Jump]>> {
        read_jump_file(path.as_ref(), filter, &self.config)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn report(&self, path: &Path, fingerprint: &Fingerprint, systems: &[System]) {
        let summary = LoadSummary::of(systems);
        if self.config.debug_summary {
            info!("Loaded {} [{}]: {}", path.display(), fingerprint.digest(), summary);
        } else {
            debug!("Loaded {} [{}]: {}", path.display(), fingerprint.digest(), summary);
        }
    }
}

pub(crate) fn read_jump_file(
    path: &Path,
    filter: Option<&[SystemId]>,
    config: &LoaderConfig,
) -> Result<Arc<[Jump]>> {
    ensure_exists(path)?;
    let conn = open_read_only(path)?;
    let jumps = jumps::read_jumps(&conn, filter, config.chunk_size)?;
    debug!("Loaded {} jump links from {}", jumps.len(), path.display());
    Ok(jumps.into())
}

/// Runs the full resolve, read, enrich and assemble pipeline on `conn`.
///
/// Every required table and column is resolved before any rows are read.
pub fn read_systems(
    conn: &Connection,
    limit: Option<usize>,
    config: &LoaderConfig,
) -> Result<Vec<System>> {
    let index = TableIndex::load(conn)?;
    let tables = ResolvedTables::from_index(&index)?;
    let system_columns = SystemColumns::resolve(conn, &tables.systems)?;
    let planet_columns = PlanetColumns::resolve(conn, &tables.planets)?;
    let moon_columns = MoonColumns::resolve(conn, &tables.moons)?;

    let mut systems = mapper::load_systems(conn, &tables.systems, &system_columns, limit)?;
    if systems.is_empty() {
        return Ok(systems);
    }

    let system_ids: Vec<SystemId> = systems.iter().map(|system| system.id).collect();
    let planets = mapper::load_planets(
        conn,
        &tables.planets,
        &planet_columns,
        &system_ids,
        config.chunk_size,
    )?;

    let planet_ids: Vec<PlanetId> = planets.iter().map(|planet| planet.id).collect();
    let moons = mapper::load_moons(
        conn,
        &tables.moons,
        &moon_columns,
        &planet_ids,
        config.chunk_size,
    )?;

    enrich::annotate(conn, &index, &mut systems, config.chunk_size);
    Ok(assemble(systems, planets, moons))
}

/// Opens `path` read-only; the loader never writes to a dataset.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(Connection::open_with_flags(path, flags)?)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LoaderError::NotFound {
            path: path.to_path_buf(),
        })
    }
}
