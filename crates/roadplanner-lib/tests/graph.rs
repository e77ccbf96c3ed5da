mod common;

use roadplanner_lib::{build_graph, normalize, seed_routes, RouteRecord};

#[test]
fn every_edge_is_symmetric() {
    let records = seed_routes();
    let graph = build_graph(&records);

    for record in &records {
        let a = normalize(&record.source);
        let b = normalize(&record.destination);
        let forward = graph
            .distance(a.as_str(), b.as_str())
            .expect("forward edge");
        let backward = graph
            .distance(b.as_str(), a.as_str())
            .expect("backward edge");
        assert_eq!(forward, backward, "{a} <-> {b}");
    }
}

#[test]
fn every_endpoint_has_neighbours() {
    let graph = common::seed_graph();
    for city in graph.cities() {
        assert!(
            graph.neighbours(city.as_str()).next().is_some(),
            "{city} has no neighbours"
        );
    }
}

#[test]
fn names_are_normalized_on_ingestion() {
    let graph = build_graph(&[RouteRecord::new("  new delhi", "AGRA ", 230.0)]);

    assert!(graph.contains("New Delhi"));
    assert!(graph.contains("Agra"));
    assert!(!graph.contains("new delhi"));
    assert_eq!(graph.distance("Agra", "New Delhi"), Some(230.0));
}

#[test]
fn later_duplicate_overwrites_earlier_distance() {
    let graph = build_graph(&[
        RouteRecord::new("Mumbai", "Pune", 150.0),
        RouteRecord::new("pune", "mumbai", 165.0),
    ]);

    assert_eq!(graph.distance("Mumbai", "Pune"), Some(165.0));
    assert_eq!(graph.distance("Pune", "Mumbai"), Some(165.0));
    assert_eq!(graph.city_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn questionable_rows_are_accepted_as_is() {
    let graph = build_graph(&[
        RouteRecord::new("A", "B", 0.0),
        RouteRecord::new("C", "C", 3.0),
    ]);

    assert_eq!(graph.distance("A", "B"), Some(0.0));
    assert_eq!(graph.distance("C", "C"), Some(3.0));
}

#[test]
fn cities_are_listed_alphabetically() {
    let graph = build_graph(&common::triangle());
    let names: Vec<_> = graph
        .cities()
        .into_iter()
        .map(|city| city.as_str())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn fuzzy_matches_suggest_close_spellings() {
    let graph = common::seed_graph();

    let suggestions = graph.fuzzy_city_matches("ahmedabd", 3);
    assert!(suggestions.contains(&"Ahmedabad".to_string()));

    assert!(graph.fuzzy_city_matches("Qwxyz", 3).is_empty());
    assert!(graph.fuzzy_city_matches("Pune", 0).is_empty());
    assert!(graph.fuzzy_city_matches("Bhu", 2).len() <= 2);
}

#[test]
fn equally_close_suggestions_are_alphabetical() {
    let graph = build_graph(&[
        RouteRecord::new("Pune", "Zzyzx", 10.0),
        RouteRecord::new("Puna", "Qwerty", 10.0),
    ]);
    assert_eq!(graph.fuzzy_city_matches("pun", 3), ["Puna", "Pune"]);
}
