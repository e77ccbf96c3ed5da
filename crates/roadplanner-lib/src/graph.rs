use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::city::{normalize, CityKey};
use crate::db::RouteRecord;

/// Minimum Jaro-Winkler similarity for a city name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Undirected road network keyed by normalized city names.
///
/// The adjacency map is shared behind an [`Arc`], so clones are cheap and
/// every clone observes the same immutable network.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<CityKey, HashMap<CityKey, f64>>>,
}

impl Graph {
    /// `true` when the key is an endpoint of at least one connection.
    pub fn contains(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Neighbouring cities and the road distance to each.
    pub fn neighbours(&self, city: &str) -> impl Iterator<Item = (&CityKey, f64)> {
        self.adjacency
            .get(city)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(target, distance)| (target, *distance)))
    }

    /// Direct road distance between two cities, if they are connected.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }

    /// Every city in the network, sorted by name.
    pub fn cities(&self) -> Vec<&CityKey> {
        let mut cities: Vec<_> = self.adjacency.keys().collect();
        cities.sort();
        cities
    }

    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (two per undirected connection).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }

    /// Return up to `limit` city names that closely resemble `raw`.
    ///
    /// The input is normalized first, and candidates are ordered by descending
    /// similarity with ties broken alphabetically.
    pub fn fuzzy_city_matches(&self, raw: &str, limit: usize) -> Vec<String> {
        let key = normalize(raw);
        if key.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &CityKey)> = self
            .adjacency
            .keys()
            .map(|city| (strsim::jaro_winkler(key.as_str(), city.as_str()), city))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|(a_score, a_city), (b_score, b_city)| {
            b_score.total_cmp(a_score).then_with(|| a_city.cmp(b_city))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, city)| city.to_string())
            .collect()
    }
}

/// Build the undirected road network from raw connection records.
///
/// Both endpoints are normalized and each record is inserted in both
/// directions. A later record for the same pair overwrites the earlier
/// distance. Distances and self-loops are taken as given.
pub fn build_graph(records: &[RouteRecord]) -> Graph {
    let mut adjacency: HashMap<CityKey, HashMap<CityKey, f64>> = HashMap::new();

    for record in records {
        let source = normalize(&record.source);
        let destination = normalize(&record.destination);

        adjacency
            .entry(source.clone())
            .or_default()
            .insert(destination.clone(), record.distance_km);
        adjacency
            .entry(destination)
            .or_default()
            .insert(source, record.distance_km);
    }

    let graph = Graph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        records = records.len(),
        cities = graph.city_count(),
        edges = graph.edge_count(),
        "built road network graph"
    );
    graph
}
