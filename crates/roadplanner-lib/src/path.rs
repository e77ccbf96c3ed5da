use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::city::CityKey;
use crate::graph::Graph;

/// Lowest-distance route between two cities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Cities in travel order, starting with the origin and ending at the goal.
    pub steps: Vec<CityKey>,
    /// Sum of the road distances along `steps`, in kilometres.
    pub distance_km: f64,
}

impl ShortestPath {
    /// Number of road segments travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm between two normalized city keys.
///
/// Returns `None` when either key is absent from the graph or when the goal is
/// unreachable from the start. Among several equally short routes any one may
/// be returned.
pub fn find_route_dijkstra(graph: &Graph, start: &CityKey, goal: &CityKey) -> Option<ShortestPath> {
    if !graph.contains(start.as_str()) || !graph.contains(goal.as_str()) {
        return None;
    }

    let mut distances: HashMap<&CityKey, f64> = HashMap::new();
    let mut parents: HashMap<&CityKey, &CityKey> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let best = distances.get(entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > best {
            continue;
        }

        for (next, weight) in graph.neighbours(entry.node.as_str()) {
            let next_cost = entry.cost.0 + weight;
            if next_cost < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    let steps = reconstruct_path(&parents, start, goal)?;
    let distance_km = distances.get(goal).copied()?;
    debug!(
        start = %start,
        goal = %goal,
        hops = steps.len().saturating_sub(1),
        distance_km,
        "found shortest path"
    );

    Some(ShortestPath { steps, distance_km })
}

/// Walk predecessor links back from `goal`; `None` if the chain never reaches `start`.
fn reconstruct_path(
    parents: &HashMap<&CityKey, &CityKey>,
    start: &CityKey,
    goal: &CityKey,
) -> Option<Vec<CityKey>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while current != start {
        let parent = *parents.get(current)?;
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a CityKey,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a CityKey, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
