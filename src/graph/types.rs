//! Core graph types: node identity bounds, weights, and edges.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Weight of a connection (e.g., travel time or cost). Always non-negative
/// once stored; every operation accepting a weight validates it.
pub type Weight = i64;

/// Bounds required of application-supplied node identities.
///
/// The graph never interprets node content; it only compares, hashes, and
/// orders identities. `Ord` doubles as the deterministic tie-break order for
/// shortest-path selection, and `Debug` feeds error context. The trait is
/// blanket-implemented, so applications never implement it manually.
pub trait NodeKey: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> NodeKey for T {}

/// One directional half of an undirected connection.
///
/// Carries the destination node, a label naming the connection (e.g., a
/// transport mode), and a non-negative weight. The destination is fixed at
/// construction; the weight may be updated through [`Edge::set_weight`].
///
/// Two edges are equal iff destination, name, and weight all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Node this edge leads to
    destination: N,
    /// Label of the connection
    name: String,
    /// Non-negative weight
    weight: Weight,
}

impl<N> Edge<N> {
    /// Create a new edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] if `weight` is negative.
    pub fn new(destination: N, name: impl Into<String>, weight: Weight) -> Result<Self> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        Ok(Self {
            destination,
            name: name.into(),
            weight,
        })
    }

    /// The node this edge leads to.
    pub fn destination(&self) -> &N {
        &self.destination
    }

    /// The label of the connection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Replace the weight in place.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] if `weight` is negative; the
    /// edge is left unchanged.
    pub fn set_weight(&mut self, weight: Weight) -> Result<()> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        self.weight = weight;
        Ok(())
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "to {} via {} takes {}",
            self.destination, self.name, self.weight
        )
    }
}
