//! Weighted adjacency snapshot.
//!
//! # Data layout
//!
//! One `Vec<WeightedEdge>` per node, indexed by `NodeId`.  Every node known to
//! the store at build time has an entry, even with no outgoing edges, so
//! per-node router state can be sized from [`node_count`](WeightedAdjacency::node_count)
//! without missing-key checks.
//!
//! The snapshot owns its data and is never updated in place.  It mirrors the
//! raw neighbour relation exactly: if only `a → b` was added, only `a → b`
//! appears here.

use cg_core::NodeId;

use crate::{GraphError, GraphResult};

/// A directed edge with a materialised weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdge {
    pub to:     NodeId,
    /// Non-negative.  Negative weights violate the router's precondition and
    /// are neither checked nor clamped.
    pub weight: f64,
}

/// Immutable `NodeId → [(neighbour, weight)]` mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedAdjacency {
    edges: Vec<Vec<WeightedEdge>>,
}

impl WeightedAdjacency {
    /// Wrap per-node edge lists, indexed by `NodeId`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if an edge points past the
    /// last entry.
    pub fn from_edges(edges: Vec<Vec<WeightedEdge>>) -> GraphResult<Self> {
        let n = edges.len();
        if let Some(dangling) = edges.iter().flatten().find(|e| e.to.index() >= n) {
            return Err(GraphError::NodeNotFound(dangling.to));
        }
        Ok(Self { edges })
    }

    /// Caller guarantees every `to` indexes into `edges`.
    pub(crate) fn from_edges_unchecked(edges: Vec<Vec<WeightedEdge>>) -> Self {
        debug_assert!(edges.iter().flatten().all(|e| e.to.index() < edges.len()));
        Self { edges }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.edges.len()
    }

    /// Outgoing edges of `node`.  Empty for an unknown node.
    #[inline]
    pub fn edges(&self, node: NodeId) -> &[WeightedEdge] {
        self.edges
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the edge `from → to`, if present.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Sum of edge weights along `path`, or `None` if a hop has no edge.
    pub fn path_weight(&self, path: &[NodeId]) -> Option<f64> {
        path.windows(2)
            .map(|hop| self.weight(hop[0], hop[1]))
            .sum()
    }
}
