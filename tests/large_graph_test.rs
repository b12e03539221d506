//! Integration test for large graph handling.

use routegraph::{algorithms, RouteGraph};

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_ring_100k_nodes() {
    let num_nodes: u32 = 100_000;
    let mut graph = RouteGraph::new();

    for i in 0..num_nodes {
        graph.add_node(i);
    }
    assert_eq!(graph.node_count(), num_nodes as usize);

    // Close the ring: i <-> i+1, last <-> first
    for i in 0..num_nodes {
        graph.connect(&i, &((i + 1) % num_nodes), "link", 1).unwrap();
    }
    assert_eq!(graph.connection_count(), num_nodes as usize);

    // Everything is reachable from node 0
    assert!(graph.path_exists(&0, &(num_nodes - 1)));
    assert!(graph.path_exists(&0, &(num_nodes / 2)));
}

#[test]
fn test_medium_ring_10k_nodes() {
    let num_nodes: u32 = 10_000;
    let mut graph = RouteGraph::new();

    for i in 0..num_nodes {
        graph.add_node(i);
    }
    for i in 0..num_nodes {
        graph.connect(&i, &((i + 1) % num_nodes), "link", 1).unwrap();
    }

    assert_eq!(graph.node_count(), num_nodes as usize);
    assert_eq!(graph.connection_count(), num_nodes as usize);

    // The short arc wins: 0 -> 2000 forward is 2000 hops, backward 8000
    let path = graph.shortest_path(&0, &2_000).unwrap();
    assert_eq!(path.len(), 2_000);
    assert_eq!(algorithms::total_weight(&path), 2_000);

    // Cutting the short arc forces the long way around
    graph.disconnect(&1_000, &1_001).unwrap();
    let path = graph.shortest_path(&0, &2_000).unwrap();
    assert_eq!(path.len(), 8_000);
    assert!(graph.path_exists(&0, &2_000));

    // Removing a node on the long arc disconnects the ring ends
    graph.remove_node(&5_000).unwrap();
    assert!(!graph.path_exists(&0, &2_000));
    assert!(graph.shortest_path(&0, &2_000).is_none());
}

#[test]
fn test_star_hub() {
    let mut graph = RouteGraph::new();
    let hub: u32 = 0;
    graph.add_node(hub);

    for leaf in 1..=500u32 {
        graph.add_node(leaf);
        graph.connect(&hub, &leaf, "spoke", 2).unwrap();
    }

    assert_eq!(graph.connection_count(), 500);
    assert_eq!(graph.edges_from(&hub).unwrap().len(), 500);

    // Leaf to leaf always goes through the hub
    let path = graph.shortest_path(&17, &451).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(*path[0].destination(), hub);
    assert_eq!(algorithms::total_weight(&path), 4);

    // Dropping the hub strands every leaf
    graph.remove_node(&hub).unwrap();
    assert_eq!(graph.connection_count(), 0);
    assert!(!graph.path_exists(&17, &451));
}
