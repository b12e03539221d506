//! # routegraph
//!
//! A lightweight undirected, weighted graph for route planning and shortest-path queries.
//!
//! ## Core Principles
//!
//! - **Bring Your Own Nodes**: Any `Clone + Ord + Hash + Debug` type works as a node
//! - **Undirected by Construction**: Every connection is a mirrored edge pair, kept in sync
//! - **All-or-Nothing**: Failed operations leave the graph untouched
//! - **Deterministic Answers**: Equal-cost paths resolve the same way on every run
//!
//! ## Architecture
//!
//! routegraph is organized in layers:
//!
//! ```text
//! Applications (route planners, network tools)
//!     ↓
//! RouteGraph (nodes, connections, queries)
//!     ↓
//! Algorithms (reachability, shortest path)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use routegraph::{RouteGraph, algorithms};
//!
//! let mut graph = RouteGraph::new();
//! graph.add_node("Stockholm");
//! graph.add_node("Copenhagen");
//! graph.add_node("Berlin");
//!
//! graph.connect(&"Stockholm", &"Copenhagen", "train", 4)?;
//! graph.connect(&"Copenhagen", &"Berlin", "train", 3)?;
//! graph.connect(&"Stockholm", &"Berlin", "ferry", 10)?;
//!
//! let path = graph.shortest_path(&"Stockholm", &"Berlin").unwrap();
//! assert_eq!(path.len(), 2);
//! assert_eq!(algorithms::total_weight(&path), 7);
//! # Ok::<(), routegraph::GraphError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{algorithms, Edge, NodeKey, RouteGraph, Weight};
