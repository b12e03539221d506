//! Reachability and shortest-path algorithms over [`RouteGraph`].
//!
//! Both entry points treat absent endpoints as "no path" rather than as
//! errors, so callers can probe a graph without checking membership first.

use crate::graph::routegraph::RouteGraph;
use crate::graph::types::{Edge, NodeKey, Weight};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Whether any sequence of connections leads from `from` to `to`.
///
/// Depth-first search with an explicit stack, so deep graphs cannot blow the
/// call stack.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `from`: Starting node
/// - `to`: Target node
///
/// # Returns
/// `true` if `to` is reachable from `from`. A node reaches itself. Absent
/// nodes are unreachable, never an error.
pub fn path_exists<N: NodeKey>(graph: &RouteGraph<N>, from: &N, to: &N) -> bool {
    let (Some(from), Some(to)) = (graph.node_ref(from), graph.node_ref(to)) else {
        return false;
    };

    let mut visited = HashSet::new();
    let mut stack = vec![from];
    visited.insert(from);
    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        for edge in graph.adjacent_edges(current) {
            let next = edge.destination();
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }
    false
}

/// Cheapest path from `from` to `to` by total weight (Dijkstra).
///
/// Heap entries order by `(distance, node)`, so equal-cost candidates settle
/// lowest node first and repeated runs return the same path.
///
/// # Parameters
/// - `graph`: The graph to search
/// - `from`: Starting node
/// - `to`: Target node
///
/// # Returns
/// The edges to follow in order, empty when `from == to`, or `None` when no
/// path exists or either node is absent.
pub fn shortest_path<N: NodeKey>(
    graph: &RouteGraph<N>,
    from: &N,
    to: &N,
) -> Option<Vec<Edge<N>>> {
    let (Some(from), Some(to)) = (graph.node_ref(from), graph.node_ref(to)) else {
        return None;
    };
    if from == to {
        return Some(Vec::new());
    }

    let mut dist: HashMap<&N, Weight> = HashMap::new();
    let mut prev: HashMap<&N, &N> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(from, 0);
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // The first pop of the target carries its final distance.
        if node == to {
            return rebuild(graph, from, to, &prev);
        }
        // Stale entry: a cheaper relaxation has superseded it.
        if dist.get(node).is_some_and(|&best| cost > best) {
            continue;
        }
        for edge in graph.adjacent_edges(node) {
            let next = edge.destination();
            let alt = cost.saturating_add(edge.weight());
            if dist.get(next).map_or(true, |&best| alt < best) {
                dist.insert(next, alt);
                prev.insert(next, node);
                heap.push(Reverse((alt, next)));
            }
        }
    }
    None
}

/// Sum of the weights along a path, as returned by [`shortest_path`].
pub fn total_weight<N>(path: &[Edge<N>]) -> Weight {
    path.iter().map(Edge::weight).sum()
}

/// Walk the predecessor chain backwards from `to` and collect the stored
/// edges in travel order.
fn rebuild<N: NodeKey>(
    graph: &RouteGraph<N>,
    from: &N,
    to: &N,
    prev: &HashMap<&N, &N>,
) -> Option<Vec<Edge<N>>> {
    let mut legs = Vec::new();
    let mut current = to;
    while current != from {
        let parent = prev.get(current).copied()?;
        legs.push(graph.edge_ref(parent, current)?.clone());
        current = parent;
    }
    legs.reverse();
    Some(legs)
}
