use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags, Row};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::seed::SEED_ROUTES;

/// Name of the table holding city-pair distances.
const ROUTES_TABLE: &str = "routes";

/// Raw road connection as stored by the data source.
///
/// Names are kept exactly as stored; normalization happens when the graph is
/// built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub source: String,
    pub destination: String,
    pub distance_km: f64,
}

impl RouteRecord {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance_km,
        }
    }
}

/// Read accessor for the list of road connections.
///
/// An `Err` means the list could not be obtained at all, which callers treat
/// differently from an empty network.
pub trait RouteSource {
    fn routes(&self) -> Result<Vec<RouteRecord>>;
}

impl RouteSource for [RouteRecord] {
    fn routes(&self) -> Result<Vec<RouteRecord>> {
        Ok(self.to_vec())
    }
}

impl RouteSource for Vec<RouteRecord> {
    fn routes(&self) -> Result<Vec<RouteRecord>> {
        Ok(self.clone())
    }
}

/// Route source backed by the `routes` table of a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteRouteSource {
    path: PathBuf,
}

impl SqliteRouteSource {
    /// Point the source at an existing database file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::DatasetNotFound { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteSource for SqliteRouteSource {
    fn routes(&self) -> Result<Vec<RouteRecord>> {
        // Read-only so a stray path never creates an empty database behind our back.
        let connection = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let sql = format!(
            "SELECT source_city, destination_city, distance_km FROM {table}",
            table = ROUTES_TABLE
        );
        let mut stmt = connection.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        debug!(
            path = %self.path.display(),
            routes = records.len(),
            "loaded road network"
        );
        Ok(records)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<RouteRecord> {
    Ok(RouteRecord {
        source: row.get(0)?,
        destination: row.get(1)?,
        distance_km: row.get(2)?,
    })
}

/// Create the `routes` table at `db_path` and fill it with the bundled network.
///
/// Existing rows are cleared first so re-running the seed never duplicates
/// connections. Returns the number of inserted rows.
pub fn seed_database(db_path: &Path) -> Result<usize> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut connection = Connection::open(db_path)?;
    connection.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY,
            source_city TEXT NOT NULL,
            destination_city TEXT NOT NULL,
            distance_km REAL NOT NULL
        )",
        table = ROUTES_TABLE
    ))?;

    let tx = connection.transaction()?;
    tx.execute(&format!("DELETE FROM {table}", table = ROUTES_TABLE), [])?;
    {
        let mut insert = tx.prepare(&format!(
            "INSERT INTO {table} (source_city, destination_city, distance_km) VALUES (?1, ?2, ?3)",
            table = ROUTES_TABLE
        ))?;
        for (source, destination, distance_km) in SEED_ROUTES {
            insert.execute(params![source, destination, distance_km])?;
        }
    }
    tx.commit()?;

    info!(
        path = %db_path.display(),
        routes = SEED_ROUTES.len(),
        "seeded road network database"
    );
    Ok(SEED_ROUTES.len())
}
