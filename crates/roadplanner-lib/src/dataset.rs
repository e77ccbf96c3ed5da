use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Default filename for the road network database.
pub const DATABASE_FILENAME: &str = "nh_routes.db";

/// Resolve the default database location using platform-specific project directories.
pub fn default_database_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "roadplanner", "roadplanner")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATABASE_FILENAME))
}

/// Resolve an explicit override or fall back to [`default_database_path`].
///
/// A directory override resolves to [`DATABASE_FILENAME`] inside it.
pub fn resolve_database_path(target: Option<&Path>) -> Result<PathBuf> {
    match target {
        Some(path) if path.is_dir() => Ok(path.join(DATABASE_FILENAME)),
        Some(path) => Ok(path.to_path_buf()),
        None => default_database_path(),
    }
}
