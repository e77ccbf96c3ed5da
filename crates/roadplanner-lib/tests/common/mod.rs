//! Common test utilities and fixture helpers.
//!
//! Provides small hand-built networks, a fixed clock for departure planning,
//! and a temporary SQLite database seeded with the bundled network.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use roadplanner_lib::{build_graph, seed_database, seed_routes, Graph, RouteRecord};
use tempfile::TempDir;

/// Local timestamp on a fixed reference day (2024-03-10).
#[allow(dead_code)]
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    on(10, hour, minute)
}

/// Local timestamp on the given day of March 2024.
#[allow(dead_code)]
pub fn on(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

/// Graph over the bundled seed network.
#[allow(dead_code)]
pub fn seed_graph() -> Graph {
    build_graph(&seed_routes())
}

/// Triangle where the two-hop route beats the direct road.
#[allow(dead_code)]
pub fn triangle() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("A", "B", 5.0),
        RouteRecord::new("B", "C", 5.0),
        RouteRecord::new("A", "C", 20.0),
    ]
}

/// Two components with no road between them.
#[allow(dead_code)]
pub fn islands() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("Port Blair", "Havelock", 70.0),
        RouteRecord::new("Mumbai", "Pune", 150.0),
    ]
}

/// Temporary directory holding a freshly seeded database.
#[allow(dead_code)]
pub struct SeededDb {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl SeededDb {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("nh_routes.db");
        seed_database(&path).expect("seed database");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }
}
