//! The `RouteGraph` structure and its structural operations.

use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, NodeKey, Weight};
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// An undirected, weighted graph over application-supplied node identities.
///
/// Every connection is stored as a pair of mirrored directional edges, one in
/// each endpoint's adjacency map, keyed by destination. The pairing is an
/// invariant: structural operations either update both halves or fail without
/// touching either.
///
/// # Examples
///
/// ```
/// use routegraph::RouteGraph;
///
/// let mut graph = RouteGraph::new();
/// graph.add_node("A");
/// graph.add_node("B");
/// graph.connect(&"A", &"B", "rail", 4)?;
///
/// assert!(graph.path_exists(&"A", &"B"));
/// # Ok::<(), routegraph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteGraph<N> {
    /// node -> (destination -> edge toward that destination)
    adjacency: HashMap<N, HashMap<N, Edge<N>>>,
}

impl<N: NodeKey> RouteGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Add a node to the graph.
    ///
    /// # Returns
    ///
    /// `true` if the node was inserted, `false` if it was already present.
    /// Re-adding an existing node leaves its connections untouched.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                debug!("Adding node {:?}", entry.key());
                entry.insert(HashMap::new());
                true
            }
        }
    }

    /// Connect two distinct nodes with a named, weighted connection.
    ///
    /// Inserts mirrored edges at both endpoints with the same name and
    /// weight. Validation runs before any mutation, so a failed call leaves
    /// the graph unchanged.
    ///
    /// # Parameters
    ///
    /// - `a`, `b`: Endpoints; both must already be in the graph
    /// - `name`: Label of the connection
    /// - `weight`: Non-negative cost of traversing the connection
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::SelfConnection`] if `a == b`
    /// - [`GraphError::NegativeWeight`] if `weight` is negative
    /// - [`GraphError::ConnectionExists`] if the endpoints are already
    ///   connected in either direction
    pub fn connect(&mut self, a: &N, b: &N, name: impl Into<String>, weight: Weight) -> Result<()> {
        self.require_node(a)?;
        self.require_node(b)?;
        if a == b {
            return Err(GraphError::SelfConnection {
                node: format!("{a:?}"),
            });
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        if self.edge_ref(a, b).is_some() || self.edge_ref(b, a).is_some() {
            return Err(GraphError::ConnectionExists {
                from: format!("{a:?}"),
                to: format!("{b:?}"),
            });
        }

        let name = name.into();
        debug!("Connecting {a:?} and {b:?} via {name} (weight {weight})");
        let forward = Edge::new(b.clone(), name.clone(), weight)?;
        let reverse = Edge::new(a.clone(), name, weight)?;
        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.insert(b.clone(), forward);
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.insert(a.clone(), reverse);
        }
        Ok(())
    }

    /// Update the weight of an existing connection on both halves.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::NegativeWeight`] if `weight` is negative; the
    ///   connection keeps its old weight
    /// - [`GraphError::ConnectionNotFound`] if the endpoints are not
    ///   connected
    pub fn set_connection_weight(&mut self, a: &N, b: &N, weight: Weight) -> Result<()> {
        self.require_node(a)?;
        self.require_node(b)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        self.require_connection(a, b)?;

        debug!("Setting weight of {a:?} <-> {b:?} to {weight}");
        if let Some(edge) = self.adjacency.get_mut(a).and_then(|edges| edges.get_mut(b)) {
            edge.set_weight(weight)?;
        }
        if let Some(edge) = self.adjacency.get_mut(b).and_then(|edges| edges.get_mut(a)) {
            edge.set_weight(weight)?;
        }
        Ok(())
    }

    /// Remove the connection between two nodes, deleting both halves.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::ConnectionNotFound`] if the endpoints are not
    ///   connected
    pub fn disconnect(&mut self, a: &N, b: &N) -> Result<()> {
        self.require_node(a)?;
        self.require_node(b)?;
        self.require_connection(a, b)?;

        debug!("Disconnecting {a:?} and {b:?}");
        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.remove(b);
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.remove(a);
        }
        Ok(())
    }

    /// Remove a node and every connection attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node is absent.
    pub fn remove_node(&mut self, node: &N) -> Result<()> {
        let Some(edges) = self.adjacency.remove(node) else {
            return Err(GraphError::NodeNotFound {
                node: format!("{node:?}"),
            });
        };

        debug!("Removing node {node:?} and {} connections", edges.len());
        for neighbor in edges.keys() {
            trace!("Purging reverse edge {:?} -> {:?}", neighbor, node);
            if let Some(reverse) = self.adjacency.get_mut(neighbor) {
                reverse.remove(node);
            }
        }
        Ok(())
    }

    /// Remove all nodes and connections.
    pub fn clear(&mut self) {
        debug!("Clearing graph ({} nodes)", self.adjacency.len());
        self.adjacency.clear();
    }

    /// Whether the node is present in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of connections in the graph. Each undirected connection is
    /// counted once.
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// All edges leaving a node, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node is absent.
    pub fn edges_from(&self, node: &N) -> Result<Vec<&Edge<N>>> {
        self.adjacency
            .get(node)
            .map(|edges| edges.values().collect())
            .ok_or_else(|| GraphError::NodeNotFound {
                node: format!("{node:?}"),
            })
    }

    /// The edge from one node toward another, if the two are connected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node is absent. An
    /// absent connection between present nodes is `Ok(None)`, not an error.
    pub fn edge_between(&self, from: &N, to: &N) -> Result<Option<&Edge<N>>> {
        self.require_node(from)?;
        self.require_node(to)?;
        Ok(self.edge_ref(from, to))
    }

    /// Iterate over every connection once, as `(endpoint, edge)` pairs with
    /// `endpoint < edge.destination()`. Useful for exporting the graph.
    pub fn connections(&self) -> impl Iterator<Item = (&N, &Edge<N>)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.values().map(move |edge| (from, edge)))
            .filter(|(from, edge)| *from < edge.destination())
    }

    /// Whether any sequence of connections leads from `from` to `to`.
    ///
    /// Returns `false` if either node is absent. A node always reaches
    /// itself.
    pub fn path_exists(&self, from: &N, to: &N) -> bool {
        super::algorithms::path_exists(self, from, to)
    }

    /// Cheapest path from `from` to `to` as the sequence of edges to follow.
    ///
    /// Returns `None` if either node is absent or no path exists, and an
    /// empty sequence when `from == to`.
    pub fn shortest_path(&self, from: &N, to: &N) -> Option<Vec<Edge<N>>> {
        super::algorithms::shortest_path(self, from, to)
    }

    /// Graph-owned reference to a node equal to `node`, if present.
    pub(crate) fn node_ref(&self, node: &N) -> Option<&N> {
        self.adjacency.get_key_value(node).map(|(key, _)| key)
    }

    /// Edges leaving `node`, for traversal. Empty if the node is absent.
    pub(crate) fn adjacent_edges<'g>(&'g self, node: &N) -> impl Iterator<Item = &'g Edge<N>> + 'g {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(HashMap::values)
    }

    /// The stored edge from `from` toward `to`, if any.
    pub(crate) fn edge_ref(&self, from: &N, to: &N) -> Option<&Edge<N>> {
        self.adjacency.get(from).and_then(|edges| edges.get(to))
    }

    fn require_node(&self, node: &N) -> Result<()> {
        if self.adjacency.contains_key(node) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound {
                node: format!("{node:?}"),
            })
        }
    }

    fn require_connection(&self, a: &N, b: &N) -> Result<()> {
        match (self.edge_ref(a, b).is_some(), self.edge_ref(b, a).is_some()) {
            (true, true) => Ok(()),
            (false, false) => Err(GraphError::ConnectionNotFound {
                from: format!("{a:?}"),
                to: format!("{b:?}"),
            }),
            // One half present without its mirror means a pairing violation.
            _ => Err(GraphError::AsymmetricConnection {
                from: format!("{a:?}"),
                to: format!("{b:?}"),
            }),
        }
    }
}

impl<N: NodeKey> Default for RouteGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey + fmt::Display> fmt::Display for RouteGraph<N> {
    /// Renders one line per node followed by its edges, sorted for stable
    /// output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes: Vec<&N> = self.adjacency.keys().collect();
        nodes.sort();
        for node in nodes {
            writeln!(f, "{node}")?;
            let mut edges: Vec<&Edge<N>> = self
                .adjacency
                .get(node)
                .into_iter()
                .flat_map(HashMap::values)
                .collect();
            edges.sort_by(|a, b| a.destination().cmp(b.destination()));
            for edge in edges {
                writeln!(f, "  {edge}")?;
            }
        }
        Ok(())
    }
}
