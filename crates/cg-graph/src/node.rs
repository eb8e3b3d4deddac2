//! Graph vertex: a named building at a coordinate.

use std::fmt;

use cg_core::{GeoPoint, NodeId};

/// A building and its outgoing neighbour set.
///
/// Neighbours are `NodeId` handles into the owning [`GraphStore`](crate::GraphStore),
/// never references, so there are no ownership cycles.  The set is kept in
/// insertion order; duplicate inserts are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub name: String,
    pub pos:  GeoPoint,
    neighbors: Vec<NodeId>,
}

impl Building {
    pub fn new(name: impl Into<String>, pos: GeoPoint) -> Self {
        Self { name: name.into(), pos, neighbors: Vec::new() }
    }

    /// Add a directed edge to `target`.  Returns `false` if it was already present.
    pub(crate) fn add_neighbor(&mut self, target: NodeId) -> bool {
        if self.neighbors.contains(&target) {
            return false;
        }
        self.neighbors.push(target);
        true
    }

    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn has_neighbor(&self, target: NodeId) -> bool {
        self.neighbors.contains(&target)
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
