//! Galaxy map resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use starport_lib::GalaxyMap;

/// Environment variable naming a galaxy map CSV file.
pub const GALAXY_MAP_ENV: &str = "STARPORT_GALAXY_MAP";

/// Pick the galaxy map file to load.
///
/// Searches in the following order:
/// 1. The `--map` argument
/// 2. The `STARPORT_GALAXY_MAP` environment variable (ignored when empty)
///
/// Returns `None` when neither is set, meaning the built-in galaxy is used.
pub fn resolve_map_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    std::env::var_os(GALAXY_MAP_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the galaxy map selected by [`resolve_map_path`].
pub fn load_galaxy(cli_path: Option<&Path>) -> Result<GalaxyMap> {
    match resolve_map_path(cli_path) {
        Some(path) => GalaxyMap::from_path(&path)
            .with_context(|| format!("failed to load galaxy map from {}", path.display())),
        None => {
            let galaxy = GalaxyMap::builtin();
            info!(ports = galaxy.len(), "using built-in galaxy map");
            Ok(galaxy)
        }
    }
}
