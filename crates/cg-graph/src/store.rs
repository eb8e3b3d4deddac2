//! Building arena and neighbour-relation management.
//!
//! # Ownership
//!
//! `GraphStore` owns every [`Building`].  Edges are `NodeId → NodeId`
//! relations stored on the source building, so the graph has no reference
//! cycles and buildings are never allocated or freed independently.
//!
//! # Direction
//!
//! [`add_neighbor`](GraphStore::add_neighbor) is **directed**: it adds
//! `from → to` only.  Callers that want an undirected edge use
//! [`connect`](GraphStore::connect), which adds both directions.  The edge
//! strategies document which of the two they use.

use rustc_hash::FxHashSet;
use tracing::debug;

use cg_core::{DistanceMetric, EdgeStrategy, GeoPoint, GraphRng, NodeId};

use crate::adjacency::{WeightedAdjacency, WeightedEdge};
use crate::node::Building;
use crate::router::{DijkstraRouter, Router, ShortestPath, format_distance};
use crate::{GraphError, GraphResult};

/// Owns the buildings and their raw (unweighted) neighbour relation.
///
/// # Example
///
/// ```
/// use cg_core::{DistanceMetric, GeoPoint};
/// use cg_graph::GraphStore;
///
/// let mut g = GraphStore::new();
/// let a = g.add_building("A", GeoPoint::new(0.0, 0.0)).unwrap();
/// let b = g.add_building("B", GeoPoint::new(0.0, 1.0)).unwrap();
/// g.connect(a, b).unwrap();
/// let adj = g.build_adjacency(DistanceMetric::Haversine);
/// assert_eq!(adj.node_count(), 2);
/// assert_eq!(adj.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
    buildings: Vec<Building>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self { buildings: Vec::new() }
    }

    pub fn with_capacity(buildings: usize) -> Self {
        Self { buildings: Vec::with_capacity(buildings) }
    }

    /// Add a building and return its `NodeId` (sequential from 0).
    ///
    /// Names are expected to be unique; this is not enforced, and lookups by
    /// name return the first match.  Fails with [`GraphError::CapacityExceeded`]
    /// once every id below `NodeId::INVALID` is taken.
    pub fn add_building(&mut self, name: impl Into<String>, pos: GeoPoint) -> GraphResult<NodeId> {
        let id = next_id(self.buildings.len())?;
        self.buildings.push(Building::new(name, pos));
        Ok(id)
    }

    /// Build a store from `(name, position)` pairs in id order.
    pub fn from_buildings<I, S>(buildings: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        let mut store = GraphStore::new();
        for (name, pos) in buildings {
            store.add_building(name, pos)?;
        }
        Ok(store)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.buildings.len()
    }

    pub fn building(&self, id: NodeId) -> GraphResult<&Building> {
        self.buildings.get(id.index()).ok_or(GraphError::NodeNotFound(id))
    }

    /// All buildings in `NodeId` order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.buildings.len()).map(id_at)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.buildings
            .iter()
            .position(|b| b.name == name)
            .map(id_at)
    }

    pub fn id_of(&self, name: &str) -> GraphResult<NodeId> {
        self.find(name)
            .ok_or_else(|| GraphError::UnknownBuilding(name.to_owned()))
    }

    pub fn name(&self, id: NodeId) -> GraphResult<&str> {
        self.building(id).map(|b| b.name.as_str())
    }

    // ── Neighbour relation ────────────────────────────────────────────────

    /// Add the directed edge `from → to`.
    ///
    /// Returns `Ok(false)` if the edge already existed (set semantics).
    /// Self-loops are accepted.
    pub fn add_neighbor(&mut self, from: NodeId, to: NodeId) -> GraphResult<bool> {
        if !self.contains(to) {
            return Err(GraphError::NodeNotFound(to));
        }
        let source = self
            .buildings
            .get_mut(from.index())
            .ok_or(GraphError::NodeNotFound(from))?;
        Ok(source.add_neighbor(to))
    }

    /// Add `a → b` and `b → a`.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.add_neighbor(a, b)?;
        self.add_neighbor(b, a)?;
        Ok(())
    }

    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.building(id).map(Building::neighbors)
    }

    /// Buildings one edge away from `id`.
    pub fn adjacent_buildings(&self, id: NodeId) -> GraphResult<Vec<&Building>> {
        self.neighbors(id)?
            .iter()
            .map(|&n| self.building(n))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.buildings.iter().map(Building::degree).sum()
    }

    // ── Edge strategies ───────────────────────────────────────────────────

    /// Point each building `i` at `(i + 1) mod k` and `(i + 2) mod k`.
    ///
    /// Edges are directed.  For `k ≥ 3` every out-degree is exactly 2; with
    /// `k = 2` the `i + 2` target is the building itself, and with `k = 1`
    /// both targets collapse into one self-loop.
    pub fn connect_circular(&mut self) {
        let k = self.buildings.len();
        for i in 0..k {
            let first  = id_at((i + 1) % k);
            let second = id_at((i + 2) % k);
            self.buildings[i].add_neighbor(first);
            self.buildings[i].add_neighbor(second);
        }
        debug!(buildings = k, edges = self.edge_count(), "connected circular graph");
    }

    /// Connect every pair of distinct buildings in both directions.
    pub fn connect_complete(&mut self) {
        let k = self.buildings.len();
        for i in 0..k {
            for j in (i + 1)..k {
                self.buildings[i].add_neighbor(id_at(j));
                self.buildings[j].add_neighbor(id_at(i));
            }
        }
        debug!(buildings = k, edges = self.edge_count(), "connected complete graph");
    }

    /// Draw `num_edges` pairs uniformly (with replacement) and connect each
    /// pair in both directions.
    ///
    /// A draw may pick the same building twice (self-loop) or repeat an
    /// existing edge, so the number of new edges can be lower than
    /// `2 * num_edges`.
    pub fn connect_random(&mut self, num_edges: usize, rng: &mut GraphRng) -> GraphResult<()> {
        let k = self.buildings.len();
        for _ in 0..num_edges {
            let a = rng.pick_index(k).ok_or(GraphError::EmptyGraph)?;
            let b = rng.pick_index(k).ok_or(GraphError::EmptyGraph)?;
            self.buildings[a].add_neighbor(id_at(b));
            self.buildings[b].add_neighbor(id_at(a));
        }
        debug!(buildings = k, draws = num_edges, edges = self.edge_count(), "connected random graph");
        Ok(())
    }

    pub fn apply_strategy(&mut self, strategy: EdgeStrategy, rng: &mut GraphRng) -> GraphResult<()> {
        match strategy {
            EdgeStrategy::Circular         => self.connect_circular(),
            EdgeStrategy::Complete         => self.connect_complete(),
            EdgeStrategy::Random { edges } => self.connect_random(edges, rng)?,
        }
        Ok(())
    }

    // ── Weighted adjacency ────────────────────────────────────────────────

    /// Materialise edge weights with `distance_fn(from, to)`.
    ///
    /// Every building gets an entry, isolated ones included.  The result is
    /// an owned snapshot; the store is not modified.
    pub fn build_weighted_adjacency<F>(&self, distance_fn: F) -> WeightedAdjacency
    where
        F: Fn(GeoPoint, GeoPoint) -> f64,
    {
        let edges: Vec<Vec<WeightedEdge>> = self
            .buildings
            .iter()
            .map(|b| {
                b.neighbors()
                    .iter()
                    .map(|&to| WeightedEdge {
                        to,
                        weight: distance_fn(b.pos, self.buildings[to.index()].pos),
                    })
                    .collect()
            })
            .collect();

        let adjacency = WeightedAdjacency::from_edges_unchecked(edges);
        debug!(
            nodes = adjacency.node_count(),
            edges = adjacency.edge_count(),
            "built weighted adjacency"
        );
        adjacency
    }

    pub fn build_adjacency(&self, metric: DistanceMetric) -> WeightedAdjacency {
        self.build_weighted_adjacency(|a, b| metric.distance(a, b))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// See [`within_n_edges`](crate::reach::within_n_edges).
    pub fn within_n_edges(
        &self,
        source: NodeId,
        n: usize,
    ) -> GraphResult<FxHashSet<NodeId>> {
        crate::reach::within_n_edges(self, source, n)
    }

    /// Render `path` as `"A --> B --> C"`.
    pub fn format_path(&self, path: &[NodeId]) -> GraphResult<String> {
        let names = path
            .iter()
            .map(|&id| self.name(id))
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(names.join(" --> "))
    }

    fn route(&self, from: NodeId, to: NodeId, metric: DistanceMetric) -> GraphResult<ShortestPath> {
        let adjacency = self.build_adjacency(metric);
        DijkstraRouter.shortest_path(&adjacency, from, to)
    }

    /// Shortest distance between two buildings rendered as `"<d> <unit>"`,
    /// computed on a fresh adjacency snapshot.
    pub fn shortest_distance_between(
        &self,
        from: NodeId,
        to: NodeId,
        metric: DistanceMetric,
    ) -> GraphResult<String> {
        let path = self.route(from, to, metric)?;
        Ok(format_distance(path.distance, metric.unit()))
    }

    /// Shortest path between two buildings rendered as `"A --> B --> C"`,
    /// computed on a fresh adjacency snapshot.  Empty if unreachable.
    pub fn shortest_path_between(
        &self,
        from: NodeId,
        to: NodeId,
        metric: DistanceMetric,
    ) -> GraphResult<String> {
        let path = self.route(from, to, metric)?;
        self.format_path(&path.nodes)
    }
}

/// Id for the building at position `len`.  `NodeId::INVALID` is reserved
/// as the unset-predecessor marker, so the largest usable index is one below.
pub(crate) fn next_id(len: usize) -> GraphResult<NodeId> {
    NodeId::try_from(len)
        .ok()
        .filter(|id| id.is_valid())
        .ok_or(GraphError::CapacityExceeded(len))
}

/// Id of an existing building.  `add_building` keeps every index in range.
#[inline]
fn id_at(index: usize) -> NodeId {
    NodeId(index as u32)
}
