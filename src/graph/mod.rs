//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Edge`]: One directional half of an undirected connection
//! - [`RouteGraph`]: The graph structure and its operations
//! - [`algorithms`]: Reachability and shortest-path search

mod types;
mod routegraph;
pub mod algorithms;

pub use types::{Edge, NodeKey, Weight};
pub use routegraph::RouteGraph;
