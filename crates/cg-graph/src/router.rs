//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Queries go through the [`Router`] trait, so callers can swap in another
//! engine (A*, bidirectional search) without touching the graph store.  The
//! default [`DijkstraRouter`] runs over a [`WeightedAdjacency`] snapshot.
//!
//! # Unreachable destinations
//!
//! "No path" is a normal result, not an error: the returned [`ShortestPath`]
//! has `distance == f64::INFINITY` and an empty node list.  Only a source or
//! destination outside the adjacency is an error ([`GraphError::NodeNotFound`]).
//!
//! # Weights
//!
//! Edge weights must be non-negative.  This is a precondition; negative
//! weights are not detected and give unspecified results.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use cg_core::NodeId;

use crate::adjacency::WeightedAdjacency;
use crate::{GraphError, GraphResult};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// The result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total weight from source to destination; `f64::INFINITY` if unreachable.
    pub distance: f64,
    /// Nodes from source to destination inclusive.  Empty if unreachable.
    pub nodes: Vec<NodeId>,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        Self { distance: f64::INFINITY, nodes: Vec::new() }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` if source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Render a distance as `"<value> <unit>"`, e.g. `"1.25 km"`.
pub fn format_distance(distance: f64, unit: &str) -> String {
    format!("{distance} {unit}")
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Compute the minimum-weight path from `from` to `to`.
    fn shortest_path(
        &self,
        adjacency: &WeightedAdjacency,
        from: NodeId,
        to: NodeId,
    ) -> GraphResult<ShortestPath>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Binary-heap Dijkstra over a [`WeightedAdjacency`].
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(
        &self,
        adjacency: &WeightedAdjacency,
        from: NodeId,
        to: NodeId,
    ) -> GraphResult<ShortestPath> {
        dijkstra(adjacency, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
struct QueueEntry {
    cost: f64,
    node: NodeId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lowest cost; NodeId breaks ties.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `from` to `to` in `adjacency`.
///
/// Fails with [`GraphError::NodeNotFound`] if either endpoint has no entry
/// in the adjacency.  `from == to` yields distance 0 and the single-node path.
pub fn dijkstra(
    adjacency: &WeightedAdjacency,
    from: NodeId,
    to: NodeId,
) -> GraphResult<ShortestPath> {
    for node in [from, to] {
        if !adjacency.contains(node) {
            return Err(GraphError::NodeNotFound(node));
        }
    }

    if from == to {
        return Ok(ShortestPath { distance: 0.0, nodes: vec![from] });
    }

    let n = adjacency.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist    = vec![f64::INFINITY; n];
    // prev[v] = node that reached v; INVALID until v is first relaxed.
    let mut prev    = vec![NodeId::INVALID; n];
    // visited[v] = v has been popped and its distance is final.
    let mut visited = vec![false; n];

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    heap.push(QueueEntry { cost: 0.0, node: from });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        // Stale entry: a cheaper copy of this node was already settled.
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        trace!(%node, cost, "settled");

        if node == to {
            break;
        }

        for edge in adjacency.edges(node) {
            let next = edge.to.index();
            if visited[next] {
                continue;
            }
            let candidate = cost + edge.weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = node;
                heap.push(QueueEntry { cost: candidate, node: edge.to });
            }
        }
    }

    let path = reconstruct(&prev, dist[to.index()], from, to);
    debug!(%from, %to, distance = path.distance, hops = path.hops(), "shortest path");
    Ok(path)
}

/// Walk `prev` back from `to`.  Equality with `from` is checked before every
/// predecessor lookup, and a broken chain yields [`ShortestPath::unreachable`].
fn reconstruct(prev: &[NodeId], distance: f64, from: NodeId, to: NodeId) -> ShortestPath {
    if !distance.is_finite() {
        return ShortestPath::unreachable();
    }

    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let p = prev[cur.index()];
        if !p.is_valid() {
            return ShortestPath::unreachable();
        }
        nodes.push(p);
        cur = p;
    }
    nodes.reverse();

    ShortestPath { distance, nodes }
}
