//! Geographic coordinate type and distance functions.
//!
//! `GeoPoint` stores latitude/longitude in degrees as `f64`.  Two distance
//! functions are provided, both symmetric and exactly zero for coincident
//! points:
//!
//! | Function                        | Unit    | Use                               |
//! |---------------------------------|---------|-----------------------------------|
//! | [`GeoPoint::haversine_km`]      | km      | Edge weights (great-circle)       |
//! | [`GeoPoint::planar_distance`]   | degrees | Flat-earth approximation, diagnostics |

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Like [`new`](Self::new) but rejects non-finite values and coordinates
    /// outside `[-90, 90]` × `[-180, 180]`.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn haversine_km(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Euclidean distance in raw degree space.
    ///
    /// Only meaningful for tightly clustered points; a degree of longitude
    /// shrinks toward the poles and this ignores it.
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── DistanceMetric ────────────────────────────────────────────────────────────

/// Selects the weight function used when materialising edge weights.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceMetric {
    /// Great-circle distance in kilometres.
    #[default]
    Haversine,
    /// Flat-earth distance in degrees.
    Planar,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(self, a: GeoPoint, b: GeoPoint) -> f64 {
        match self {
            DistanceMetric::Haversine => a.haversine_km(b),
            DistanceMetric::Planar    => a.planar_distance(b),
        }
    }

    /// Unit suffix used when rendering a distance produced by this metric.
    pub fn unit(self) -> &'static str {
        match self {
            DistanceMetric::Haversine => "km",
            DistanceMetric::Planar    => "deg",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceMetric::Haversine => "haversine",
            DistanceMetric::Planar    => "planar",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
