//! Cities command handler for listing the cities in the road network.

use std::path::Path;

use anyhow::{Context, Result};

use roadplanner_cli::output::{CitiesOutput, OutputFormat};
use roadplanner_lib::{RouteService, TravelConfig};

use super::open_source;

/// Handle the cities subcommand.
pub fn handle_cities(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let source = open_source(target)?;
    let service = RouteService::from_source(&source, TravelConfig::default());
    let graph = service.graph().with_context(|| {
        format!(
            "failed to load road network from {}",
            source.path().display()
        )
    })?;

    let cities: Vec<String> = graph.cities().iter().map(|city| city.to_string()).collect();
    format.render_cities(&CitiesOutput {
        count: cities.len(),
        cities,
    })
}
