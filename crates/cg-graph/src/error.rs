//! Graph-subsystem error type.

use thiserror::Error;

use cg_core::{CoreError, NodeId};

/// Errors produced by `cg-graph`.
///
/// An unreachable destination is not an error: the router reports it as a
/// [`ShortestPath`](crate::ShortestPath) with infinite distance.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not in graph")]
    NodeNotFound(NodeId),

    #[error("no building named {0:?}")]
    UnknownBuilding(String),

    #[error("cannot add building {0}: node ids exhausted")]
    CapacityExceeded(usize),

    #[error("graph has no buildings")]
    EmptyGraph,

    #[error("building CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
