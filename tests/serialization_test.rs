//! Tests for persisting a graph through its exportable surface.
//!
//! The graph itself has no storage format; applications snapshot the node
//! list plus one `(from, to, name, weight)` record per connection and replay
//! them on load. These tests exercise that contract end to end.

use routegraph::{Edge, RouteGraph};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct Snapshot {
    nodes: Vec<String>,
    connections: Vec<(String, String, String, i64)>,
}

fn snapshot(graph: &RouteGraph<String>) -> Snapshot {
    Snapshot {
        nodes: graph.nodes().cloned().collect(),
        connections: graph
            .connections()
            .map(|(from, edge)| {
                (
                    from.clone(),
                    edge.destination().clone(),
                    edge.name().to_string(),
                    edge.weight(),
                )
            })
            .collect(),
    }
}

fn restore(snapshot: &Snapshot) -> RouteGraph<String> {
    let mut graph = RouteGraph::new();
    for node in &snapshot.nodes {
        graph.add_node(node.clone());
    }
    for (from, to, name, weight) in &snapshot.connections {
        graph.connect(from, to, name.clone(), *weight).unwrap();
    }
    graph
}

#[test]
fn test_edge_json_shape() {
    let edge = Edge::new("Berlin".to_string(), "train", 7).unwrap();

    let value = serde_json::to_value(&edge).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "destination": "Berlin",
            "name": "train",
            "weight": 7
        })
    );
}

#[test]
fn test_edge_json_round_trip() {
    let edge = Edge::new("Berlin".to_string(), "train", 7).unwrap();

    let json = serde_json::to_string(&edge).unwrap();
    let restored: Edge<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, edge);
}

#[test]
fn test_snapshot_survives_json_round_trip() {
    let mut graph = RouteGraph::new();
    for city in ["Oslo", "Stockholm", "Helsinki"] {
        graph.add_node(city.to_string());
    }
    let oslo = "Oslo".to_string();
    let stockholm = "Stockholm".to_string();
    let helsinki = "Helsinki".to_string();
    graph.connect(&oslo, &stockholm, "train", 6).unwrap();
    graph.connect(&stockholm, &helsinki, "ferry", 10).unwrap();

    let json = serde_json::to_string(&snapshot(&graph)).unwrap();
    let restored = restore(&serde_json::from_str(&json).unwrap());

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.connection_count(), graph.connection_count());

    // Structure and weights carry over
    let edge = restored.edge_between(&oslo, &stockholm).unwrap().unwrap();
    assert_eq!(edge.name(), "train");
    assert_eq!(edge.weight(), 6);
    assert_eq!(
        restored.shortest_path(&oslo, &helsinki),
        graph.shortest_path(&oslo, &helsinki)
    );
}
