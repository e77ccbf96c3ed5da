use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

use crate::city::{normalize, CityKey};
use crate::config::TravelConfig;
use crate::db::RouteSource;
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::path::find_route_dijkstra;
use crate::schedule::{plan_departure, Clock, SystemClock};

/// Maximum number of spelling suggestions attached to an unknown city error.
const MAX_SUGGESTIONS: usize = 3;

/// Successful answer to a route query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Cities from origin to destination.
    pub path: Vec<CityKey>,
    pub distance_km: f64,
    pub suggested_departure: NaiveDateTime,
    pub total_travel_hours: f64,
}

impl RouteReport {
    /// Number of road segments in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Answers route queries against a road network built once at construction.
///
/// Queries only read the shared graph, so a service can be used from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct RouteService<C = SystemClock> {
    network: std::result::Result<Graph, String>,
    config: TravelConfig,
    clock: C,
}

impl RouteService<SystemClock> {
    /// Wrap an already-built graph.
    pub fn new(graph: Graph, config: TravelConfig) -> Self {
        Self {
            network: Ok(graph),
            config,
            clock: SystemClock,
        }
    }

    /// Load the connection list from `source` and build the graph.
    ///
    /// A load failure does not fail construction; it is kept and reported as
    /// [`Error::DataUnavailable`] by every subsequent query.
    pub fn from_source<S>(source: &S, config: TravelConfig) -> Self
    where
        S: RouteSource + ?Sized,
    {
        let network = match source.routes() {
            Ok(records) => Ok(build_graph(&records)),
            Err(error) => {
                warn!(%error, "road network could not be loaded");
                Err(error.to_string())
            }
        };

        Self {
            network,
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> RouteService<C> {
    /// Replace the clock used to read the current time.
    pub fn with_clock<D: Clock>(self, clock: D) -> RouteService<D> {
        RouteService {
            network: self.network,
            config: self.config,
            clock,
        }
    }

    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    /// The loaded road network.
    pub fn graph(&self) -> Result<&Graph> {
        self.network
            .as_ref()
            .map_err(|reason| Error::DataUnavailable {
                reason: reason.clone(),
            })
    }

    /// Find the shortest route between two raw city names and plan a departure.
    pub fn find_route(&self, source: &str, destination: &str) -> Result<RouteReport> {
        let graph = self.graph()?;

        let start = normalize(source);
        let goal = normalize(destination);
        resolve_cities(graph, &[(source, &start), (destination, &goal)])?;

        let Some(route) = find_route_dijkstra(graph, &start, &goal) else {
            return Err(Error::RouteNotFound {
                start: start.into_string(),
                goal: goal.into_string(),
            });
        };

        let plan = plan_departure(route.distance_km, self.clock.now(), &self.config);
        debug!(
            start = %start,
            goal = %goal,
            distance_km = route.distance_km,
            departure = %plan.suggested_departure,
            "planned route"
        );

        Ok(RouteReport {
            path: route.steps,
            distance_km: route.distance_km,
            suggested_departure: plan.suggested_departure,
            total_travel_hours: plan.total_travel_hours,
        })
    }
}

/// Fail with every raw name whose key is missing from the graph.
///
/// Inputs that normalize to the same key are reported once, using the first
/// spelling given.
fn resolve_cities(graph: &Graph, inputs: &[(&str, &CityKey)]) -> Result<()> {
    let mut missing: Vec<&CityKey> = Vec::new();
    let mut names = Vec::new();
    let mut suggestions = Vec::new();

    for &(raw, key) in inputs {
        if graph.contains(key.as_str()) || missing.contains(&key) {
            continue;
        }
        missing.push(key);
        names.push(raw.trim().to_string());
        for suggestion in graph.fuzzy_city_matches(raw, MAX_SUGGESTIONS) {
            if !suggestions.contains(&suggestion) {
                suggestions.push(suggestion);
            }
        }
    }

    if names.is_empty() {
        Ok(())
    } else {
        Err(Error::UnknownCity { names, suggestions })
    }
}
