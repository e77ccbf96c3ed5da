//! Highway route planner library entry points.
//!
//! This crate loads a road network of city-pair distances, builds an
//! undirected graph from it, finds shortest routes with Dijkstra's algorithm
//! and suggests a departure time so arrival falls within a daylight window.
//! Front ends (the CLI, tests) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod city;
pub mod config;
pub mod dataset;
pub mod db;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod schedule;
pub mod seed;

pub use city::{normalize, CityKey};
pub use config::{
    TravelConfig, DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR,
};
pub use dataset::{default_database_path, resolve_database_path, DATABASE_FILENAME};
pub use db::{seed_database, RouteRecord, RouteSource, SqliteRouteSource};
pub use error::{Error, Result};
pub use graph::{build_graph, Graph};
pub use output::{RouteLeg, RouteRenderMode, RouteSummary};
pub use path::{find_route_dijkstra, ShortestPath};
pub use routing::{RouteReport, RouteService};
pub use schedule::{plan_departure, Clock, DeparturePlan, FixedClock, SystemClock};
pub use seed::{seed_routes, SEED_ROUTES};
