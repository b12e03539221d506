//! Route planning example for routegraph
//!
//! This example demonstrates:
//! - Building a travel map
//! - Querying connections and reachability
//! - Finding the cheapest route between two cities

use routegraph::{algorithms, RouteGraph};

fn main() -> routegraph::Result<()> {
    let mut graph = RouteGraph::new();

    println!("Building a small European travel map...\n");

    for city in [
        "Stockholm",
        "Copenhagen",
        "Hamburg",
        "Berlin",
        "Amsterdam",
        "Paris",
    ] {
        graph.add_node(city);
        println!("✓ Added city: {city}");
    }

    // Connect the cities (weights in travel hours)
    graph.connect(&"Stockholm", &"Copenhagen", "train", 5)?;
    println!("✓ Connected Stockholm and Copenhagen by train (5h)");

    graph.connect(&"Copenhagen", &"Hamburg", "train", 5)?;
    println!("✓ Connected Copenhagen and Hamburg by train (5h)");

    graph.connect(&"Hamburg", &"Berlin", "train", 2)?;
    println!("✓ Connected Hamburg and Berlin by train (2h)");

    graph.connect(&"Hamburg", &"Amsterdam", "train", 5)?;
    println!("✓ Connected Hamburg and Amsterdam by train (5h)");

    graph.connect(&"Amsterdam", &"Paris", "train", 3)?;
    println!("✓ Connected Amsterdam and Paris by train (3h)");

    graph.connect(&"Berlin", &"Paris", "flight", 2)?;
    println!("✓ Connected Berlin and Paris by flight (2h)");

    // Query the map
    println!("\n--- Querying the map ---\n");

    let departures = graph.edges_from(&"Hamburg")?;
    println!("Departures from Hamburg:");
    for edge in &departures {
        println!("  - {edge}");
    }

    println!(
        "\nCan you get from Stockholm to Paris? {}",
        graph.path_exists(&"Stockholm", &"Paris")
    );

    // Find the cheapest route
    if let Some(path) = graph.shortest_path(&"Stockholm", &"Paris") {
        println!("\nCheapest route from Stockholm to Paris:");
        for leg in &path {
            println!("  - {leg}");
        }
        println!("Total travel time: {}h", algorithms::total_weight(&path));
    }

    // A strike closes the Hamburg-Berlin line
    graph.disconnect(&"Hamburg", &"Berlin")?;
    println!("\n✗ Hamburg-Berlin line closed");

    if let Some(path) = graph.shortest_path(&"Stockholm", &"Paris") {
        println!("\nNew cheapest route from Stockholm to Paris:");
        for leg in &path {
            println!("  - {leg}");
        }
        println!("Total travel time: {}h", algorithms::total_weight(&path));
    }

    // Map statistics
    println!("\n--- Map Statistics ---\n");
    println!("Total cities: {}", graph.node_count());
    println!("Total connections: {}", graph.connection_count());

    Ok(())
}
