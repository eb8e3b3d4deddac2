//! CSV building loader.
//!
//! # CSV format
//!
//! One row per building, in the order `NodeId`s should be assigned.
//!
//! ```csv
//! name,latitude,longitude
//! Admin,29.964440282121426,-90.10699538972723
//! Chapel,29.96593408811449,-90.1064650276058
//! ```
//!
//! Coordinates are validated with [`GeoPoint::try_new`].  The loaded store
//! has no edges; apply an [`EdgeStrategy`](cg_core::EdgeStrategy) or call
//! [`GraphStore::connect`] afterwards.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use cg_core::GeoPoint;

use crate::{GraphError, GraphResult, GraphStore};

#[derive(Deserialize)]
struct BuildingRecord {
    name:      String,
    latitude:  f64,
    longitude: f64,
}

/// Load buildings from a CSV file.
pub fn load_buildings_csv(path: &Path) -> GraphResult<GraphStore> {
    let file = std::fs::File::open(path)?;
    let store = load_buildings_reader(file)?;
    debug!(path = %path.display(), buildings = store.len(), "loaded buildings");
    Ok(store)
}

/// Like [`load_buildings_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded seed data.
pub fn load_buildings_reader<R: Read>(reader: R) -> GraphResult<GraphStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut store = GraphStore::new();

    for result in csv_reader.deserialize::<BuildingRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let pos = GeoPoint::try_new(row.latitude, row.longitude)?;
        store.add_building(row.name, pos)?;
    }

    Ok(store)
}
