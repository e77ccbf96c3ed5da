//! Seed command handler for creating the road network database.

use std::path::Path;

use anyhow::{Context, Result};

use roadplanner_cli::output::{OutputFormat, SeedOutput};
use roadplanner_lib::seed_database;

use super::database_path;

/// Handle the seed subcommand.
///
/// Creates (or resets) the `routes` table and fills it with the bundled network.
pub fn handle_seed(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = database_path(target)?;
    let routes = seed_database(&path)
        .with_context(|| format!("failed to seed road network at {}", path.display()))?;

    format.render_seed(&SeedOutput {
        database: path.display().to_string(),
        routes,
    })
}
