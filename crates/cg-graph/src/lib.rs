//! `cg-graph`: building graph, weighted adjacency, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`node`]      | `Building` (name, coordinate, neighbour set)                   |
//! | [`store`]     | `GraphStore` (building arena, edge strategies, formatters)     |
//! | [`adjacency`] | `WeightedAdjacency` snapshot, `WeightedEdge`                   |
//! | [`reach`]     | `within_n_edges` bounded-hop search                            |
//! | [`router`]    | `Router` trait, `ShortestPath`, `DijkstraRouter`               |
//! | [`spatial`]   | `SpatialIndex` (R-tree nearest-building lookup)                |
//! | [`loader`]    | `load_buildings_csv`, `load_buildings_reader`                  |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                                 |
//!
//! # Data flow
//!
//! ```text
//! GraphStore (neighbour relation) ──build_adjacency(metric)──▶ WeightedAdjacency
//!        │                                                         │
//!        └──▶ within_n_edges (unweighted)          DijkstraRouter ◀┘
//! ```
//!
//! The adjacency is a snapshot: later topology edits on the store are not
//! reflected in it.  Rebuild after editing.

pub mod adjacency;
pub mod error;
pub mod loader;
pub mod node;
pub mod reach;
pub mod router;
pub mod spatial;
pub mod store;


pub use adjacency::{WeightedAdjacency, WeightedEdge};
pub use error::{GraphError, GraphResult};
pub use loader::{load_buildings_csv, load_buildings_reader};
pub use node::Building;
pub use reach::within_n_edges;
pub use router::{DijkstraRouter, Router, ShortestPath, dijkstra, format_distance};
pub use spatial::SpatialIndex;
pub use store::GraphStore;
