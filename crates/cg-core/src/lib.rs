//! `cg-core`: foundational types for the campus graph workspace.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `GeoPoint`, haversine + planar distance, `DistanceMetric` |
//! | [`config`]      | `GraphConfig`, `EdgeStrategy`                         |
//! | [`rng`]         | `GraphRng` (seeded, reproducible edge generation)     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EdgeStrategy, GraphConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{DistanceMetric, EARTH_RADIUS_KM, GeoPoint};
pub use ids::NodeId;
pub use rng::GraphRng;
