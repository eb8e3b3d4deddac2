//! Core error type.
//!
//! `cg-graph` wraps `CoreError` as one variant of its own error enum via a
//! `From` impl, so `?` works across the crate boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon}): expected lat in [-90, 90], lon in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
