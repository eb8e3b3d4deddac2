//! Graph construction configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature enabled) and passed to the graph builder.
//!
//! ```json
//! { "seed": 7, "metric": "haversine", "strategy": { "random": { "edges": 20 } } }
//! ```

use crate::{CoreError, CoreResult, DistanceMetric};

/// Upper bound on random edge draws accepted by [`GraphConfig::validate`].
pub const MAX_RANDOM_EDGES: usize = 1_000_000;

// ── EdgeStrategy ──────────────────────────────────────────────────────────────

/// How the neighbour relation is populated after the buildings are loaded.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EdgeStrategy {
    /// Node `i` points at `(i + 1) mod k` and `(i + 2) mod k` (directed).
    Circular,
    /// Every pair connected in both directions.
    Complete,
    /// `edges` uniformly random pairs, each connected in both directions.
    Random { edges: usize },
}

impl Default for EdgeStrategy {
    fn default() -> Self {
        EdgeStrategy::Random { edges: 20 }
    }
}

impl std::fmt::Display for EdgeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeStrategy::Circular           => f.write_str("circular"),
            EdgeStrategy::Complete           => f.write_str("complete"),
            EdgeStrategy::Random { edges }   => write!(f, "random({edges})"),
        }
    }
}

// ── GraphConfig ───────────────────────────────────────────────────────────────

/// Top-level graph configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Master RNG seed.  The same seed always produces the same random topology.
    pub seed: u64,

    /// Weight function used for the weighted adjacency snapshot.
    pub metric: DistanceMetric,

    /// Edge-generation strategy applied to the loaded buildings.
    pub strategy: EdgeStrategy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            seed:     42,
            metric:   DistanceMetric::Haversine,
            strategy: EdgeStrategy::default(),
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if let EdgeStrategy::Random { edges } = self.strategy {
            if edges > MAX_RANDOM_EDGES {
                return Err(CoreError::Config(format!(
                    "random strategy requests {edges} edges; at most {MAX_RANDOM_EDGES} allowed"
                )));
            }
        }
        Ok(())
    }
}
