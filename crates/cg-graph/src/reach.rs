//! Bounded-hop reachability.
//!
//! Purely topological: walks the raw neighbour relation of a
//! [`GraphStore`] and ignores edge weights.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::debug;

use cg_core::NodeId;

use crate::{GraphError, GraphResult, GraphStore};

/// Every building reachable from `source` using at most `n` edges.
///
/// `source` itself is always included, so `n = 0` yields `{source}`.
/// Breadth-first, so a building is first enqueued at its minimum hop depth;
/// skipping already-seen buildings therefore never drops a result.
pub fn within_n_edges(
    store: &GraphStore,
    source: NodeId,
    n: usize,
) -> GraphResult<FxHashSet<NodeId>> {
    if !store.contains(source) {
        return Err(GraphError::NodeNotFound(source));
    }

    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    seen.insert(source);
    queue.push_back((source, 0));

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= n {
            continue;
        }
        for &next in store.neighbors(node)? {
            if seen.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(%source, hops = n, reached = seen.len(), "bounded-hop search");
    Ok(seen)
}
