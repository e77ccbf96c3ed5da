//! Route command handler for finding the shortest road between two cities.

use std::path::Path;

use anyhow::{Context, Result};

use roadplanner_cli::output::OutputFormat;
use roadplanner_lib::{RouteService, RouteSummary, TravelConfig};

use super::open_source;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting city name.
    pub from: String,
    /// Destination city name.
    pub to: String,
    /// Average driving speed (km/h).
    pub speed: f64,
    /// Earliest hour of the daylight window.
    pub day_start: u32,
    /// Hour by which arrival should happen.
    pub day_end: u32,
}

impl RouteCommandArgs {
    /// Convert CLI args to a validated travel configuration.
    pub fn to_config(&self) -> Result<TravelConfig> {
        TravelConfig::new(self.speed, self.day_start, self.day_end)
            .context("invalid travel settings")
    }
}

/// Handle the route subcommand.
///
/// Loads the network, finds the shortest route and prints it with a suggested
/// departure time.
pub fn handle_route_command(
    target: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let config = args.to_config()?;
    let source = open_source(target)?;
    let service = RouteService::from_source(&source, config);

    let report = service.find_route(&args.from, &args.to)?;
    let graph = service.graph()?;
    let summary = RouteSummary::from_report(&report, graph, service.config());

    format.render_route(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(speed: f64, day_start: u32, day_end: u32) -> RouteCommandArgs {
        RouteCommandArgs {
            from: "Mumbai".to_string(),
            to: "Pune".to_string(),
            speed,
            day_start,
            day_end,
        }
    }

    #[test]
    fn valid_args_build_config() {
        let config = args(80.0, 5, 19).to_config().expect("valid");
        assert_eq!(config.average_speed_kmh(), 80.0);
        assert_eq!(config.day_start_hour(), 5);
        assert_eq!(config.day_end_hour(), 19);
    }

    #[test]
    fn invalid_speed_is_rejected() {
        let error = args(0.0, 6, 18).to_config().expect_err("zero speed");
        assert!(format!("{error:#}").contains("average speed must be positive"));
    }
}
