//! Nearest-building lookup.
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the closest building's
//! `NodeId`.  Use it to snap an arbitrary coordinate (a user's position, a
//! geocoded address) onto the graph before running a query.
//!
//! Like [`WeightedAdjacency`](crate::WeightedAdjacency), the index is a
//! snapshot of the store at build time.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use cg_core::{GeoPoint, NodeId};

use crate::GraphStore;

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with its `NodeId`.
#[derive(Clone)]
struct BuildingEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for BuildingEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BuildingEntry {
    /// Squared Euclidean distance in lat/lon space.  Ranking matches
    /// great-circle ranking closely within a campus or city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// R-tree over building coordinates.
pub struct SpatialIndex {
    tree: RTree<BuildingEntry>,
}

impl SpatialIndex {
    /// Bulk-load an index over every building in `store`.
    pub fn build(store: &GraphStore) -> Self {
        let entries: Vec<BuildingEntry> = store
            .buildings()
            .iter()
            .zip(store.ids())
            .map(|(b, id)| BuildingEntry { point: [b.pos.lat, b.pos.lon], id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The building closest to `pos`.  `None` only if the index is empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<NodeId> {
        self.tree
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Up to `k` buildings closest to `pos`, nearest first.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        self.tree
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}
