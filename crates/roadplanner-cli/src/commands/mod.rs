// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and dispatches
// to these handlers.

pub mod cities;
pub mod route;
pub mod seed;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roadplanner_lib::{resolve_database_path, SqliteRouteSource};

/// Resolve the database path from `--db` or the platform default.
pub fn database_path(target: Option<&Path>) -> Result<PathBuf> {
    resolve_database_path(target).context("failed to resolve the road network database path")
}

/// Open the road network database, pointing at `seed` when it is missing.
pub fn open_source(target: Option<&Path>) -> Result<SqliteRouteSource> {
    let path = database_path(target)?;
    SqliteRouteSource::open(&path).with_context(|| {
        format!(
            "failed to open road network at {}; run `roadplanner seed` first",
            path.display()
        )
    })
}
