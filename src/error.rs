//! Error types for route graph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for route graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
/// No operation partially applies: when a mutation fails, both directions of the
/// affected connection are left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A referenced node is not present in the graph
    #[error("Node not found: {node}")]
    NodeNotFound {
        /// Debug rendering of the missing node identity
        node: String,
    },

    /// No connection exists between the two referenced nodes
    #[error("No connection between {from} and {to}")]
    ConnectionNotFound {
        /// Debug rendering of the first endpoint
        from: String,
        /// Debug rendering of the second endpoint
        to: String,
    },

    /// The two referenced nodes are already connected (in either direction)
    #[error("Connection between {from} and {to} already exists")]
    ConnectionExists {
        /// Debug rendering of the first endpoint
        from: String,
        /// Debug rendering of the second endpoint
        to: String,
    },

    /// A negative weight was supplied
    #[error("Negative weight: {weight}")]
    NegativeWeight {
        /// The rejected weight value
        weight: i64,
    },

    /// A node was asked to connect to itself
    #[error("Cannot connect {node} to itself")]
    SelfConnection {
        /// Debug rendering of the node identity
        node: String,
    },

    /// One direction of a connection is missing its paired reverse edge.
    ///
    /// Indicates the undirected pairing invariant was violated. Unreachable
    /// through this crate's own operations; kept as a defensive check.
    #[error("Connection between {from} and {to} is missing its reverse edge")]
    AsymmetricConnection {
        /// Debug rendering of the endpoint whose edge is present
        from: String,
        /// Debug rendering of the endpoint whose edge is missing
        to: String,
    },
}
