//! Loader configuration.
use std::env;
use std::path::PathBuf;

use crate::query::{MAX_SQL_VARS, clamp_chunk};

/// Enables the post-load summary line at `info` level.
pub const ENV_DEBUG: &str = "STARMAP_LOADER_DEBUG";
/// Overrides the number of ids bound per filtered query.
pub const ENV_QUERY_CHUNK: &str = "STARMAP_QUERY_CHUNK";
/// Default dataset location for tools built on the loader.
pub const ENV_DATABASE: &str = "STARMAP_DB";

/// Tunables shared by every load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Log a one-line summary at `info` after each uncached load.
    pub debug_summary: bool,
    /// Ids bound per `IN (...)` statement, within `1..=MAX_SQL_VARS`.
    pub chunk_size: usize,
    /// Dataset path from the environment, if any.
    pub dataset_path: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            debug_summary: false,
            chunk_size: MAX_SQL_VARS,
            dataset_path: None,
        }
    }
}

impl LoaderConfig {
    /// Construct loader configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STARMAP_LOADER_DEBUG` - any value except `0`/`false`/`off`/`no` enables the summary
    /// - `STARMAP_QUERY_CHUNK` - ids per filtered query (default: 900, clamped to 1..=900)
    /// - `STARMAP_DB` - default dataset path
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(flag) = lookup(ENV_DEBUG) {
            config.debug_summary = is_enabled(&flag);
        }
        if let Some(chunk) = read_var::<usize>(&lookup, ENV_QUERY_CHUNK) {
            config.chunk_size = clamp_chunk(chunk);
        }
        config.dataset_path = lookup(ENV_DATABASE)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

fn is_enabled(flag: &str) -> bool {
    !matches!(
        flag.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    )
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
