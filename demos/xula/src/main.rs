//! xula: campus graph demo.
//!
//! Loads the 13 seed buildings, wires edges with the configured strategy,
//! and runs the three query kinds: bounded-hop reachability, shortest path,
//! and nearest-building lookup.
//!
//! ```text
//! xula [config.json]
//! RUST_LOG=debug xula
//! ```
//!
//! Without a config file the defaults apply (seed 42, haversine, 20 random
//! edges).

mod campus;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cg_core::{GeoPoint, GraphConfig, GraphRng};
use cg_graph::{DijkstraRouter, Router, SpatialIndex, format_distance};

use campus::load_campus;

// ── Constants ─────────────────────────────────────────────────────────────────

const SOURCE:      &str  = "Admin";
const DESTINATION: &str  = "Convo_Ctr";
const MAX_HOPS:    usize = 2;

/// A point just south of the Library steps.
const VISITOR: GeoPoint = GeoPoint { lat: 29.96590, lon: -90.10710 };

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<GraphConfig> {
    let config = match path {
        None => GraphConfig::default(),
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;
    info!(seed = config.seed, metric = %config.metric, strategy = %config.strategy, "configuration");

    println!("=== xula: campus graph ===");
    println!(
        "Seed: {}  |  Metric: {}  |  Strategy: {}",
        config.seed, config.metric, config.strategy
    );
    println!();

    // 1. Load buildings.
    let mut store = load_campus()?;
    println!("Buildings: {}", store.len());

    // 2. Wire edges.
    let mut rng = GraphRng::new(config.seed);
    store.apply_strategy(config.strategy, &mut rng)?;
    println!("Directed edges: {}", store.edge_count());
    println!();

    // 3. Neighbour listing.
    println!("{:<12} Neighbours", "Building");
    println!("{}", "-".repeat(48));
    for (building, id) in store.buildings().iter().zip(store.ids()) {
        let names: Vec<&str> = store
            .adjacent_buildings(id)?
            .into_iter()
            .map(|b| b.name.as_str())
            .collect();
        println!("{:<12} {}", building.name, names.join(", "));
    }
    println!();

    let source      = store.id_of(SOURCE)?;
    let destination = store.id_of(DESTINATION)?;

    // 4. Bounded-hop reachability.
    let mut reached: Vec<&str> = store
        .within_n_edges(source, MAX_HOPS)?
        .into_iter()
        .map(|id| store.name(id))
        .collect::<Result<_, _>>()?;
    reached.sort_unstable();
    println!("Within {MAX_HOPS} edges of {SOURCE}: {}", reached.join(", "));

    // 5. Shortest path on a fresh snapshot.
    let t0 = Instant::now();
    let adjacency = store.build_adjacency(config.metric);
    let path = DijkstraRouter.shortest_path(&adjacency, source, destination)?;
    let elapsed = t0.elapsed();

    println!(
        "{SOURCE} -> {DESTINATION}: {}",
        format_distance(path.distance, config.metric.unit())
    );
    if path.is_reachable() {
        println!("  path: {} ({} hops)", store.format_path(&path.nodes)?, path.hops());
    } else {
        println!("  no path under this topology");
    }
    info!(elapsed_us = elapsed.as_micros() as u64, "shortest-path query");

    // 6. Snap a coordinate to the nearest building.
    let index = SpatialIndex::build(&store);
    if let Some(nearest) = index.nearest(VISITOR) {
        println!("Nearest building to {VISITOR}: {}", store.name(nearest)?);
    }

    Ok(())
}
