//! Unit tests for cg-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert!(!NodeId::INVALID.is_valid());
        assert!(NodeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }

    #[test]
    fn try_from_rejects_oversized_index() {
        assert!(NodeId::try_from(u32::MAX as usize + 1).is_err());
        assert_eq!(NodeId::try_from(u32::MAX as usize).unwrap(), NodeId::INVALID);
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, DistanceMetric, GeoPoint};

    const ADMIN:  GeoPoint = GeoPoint { lat: 29.964440282121426, lon: -90.10699538972723 };
    const ABUJA:  GeoPoint = GeoPoint { lat: 9.084576, lon: 7.483333 };
    const HARARE: GeoPoint = GeoPoint { lat: -17.824858, lon: 31.053028 };

    #[test]
    fn haversine_zero_for_same_point() {
        assert!(ADMIN.haversine_km(ADMIN).abs() < 1e-9);
        assert!(HARARE.haversine_km(HARARE).abs() < 1e-9);
    }

    #[test]
    fn haversine_is_symmetric() {
        for (a, b) in [(ADMIN, ABUJA), (ABUJA, HARARE), (HARARE, ADMIN)] {
            let ab = a.haversine_km(b);
            let ba = b.haversine_km(a);
            assert!((ab - ba).abs() < 1e-9, "{ab} vs {ba}");
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2πR / 360 ≈ 111.195 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.haversine_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = GeoPoint::new(0.0, 0.0).haversine_km(GeoPoint::new(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn planar_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert_eq!(a.planar_distance(b), 5.0);
        assert_eq!(b.planar_distance(a), 5.0);
        assert_eq!(a.planar_distance(a), 0.0);
    }

    #[test]
    fn metric_dispatch() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 2.0);
        assert_eq!(DistanceMetric::Planar.distance(a, b), 2.0);
        assert_eq!(DistanceMetric::Haversine.distance(a, b), a.haversine_km(b));
        assert_eq!(DistanceMetric::default(), DistanceMetric::Haversine);
        assert_eq!(DistanceMetric::Haversine.unit(), "km");
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(29.96, -90.10).is_ok());
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(matches!(
            GeoPoint::try_new(91.0, 0.0),
            Err(CoreError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::GraphRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GraphRng::new(99);
        let mut b = GraphRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.pick_index(13), b.pick_index(13));
        }
    }

    #[test]
    fn pick_index_in_bounds() {
        let mut rng = GraphRng::new(1);
        for _ in 0..256 {
            let i = rng.pick_index(5).unwrap();
            assert!(i < 5);
        }
    }

    #[test]
    fn pick_index_empty() {
        assert_eq!(GraphRng::new(1).pick_index(0), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, DistanceMetric, EdgeStrategy, GraphConfig};

    #[test]
    fn default_matches_campus_driver() {
        let c = GraphConfig::default();
        assert_eq!(c.seed, 42);
        assert_eq!(c.metric, DistanceMetric::Haversine);
        assert_eq!(c.strategy, EdgeStrategy::Random { edges: 20 });
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_excessive_random_edges() {
        let c = GraphConfig {
            strategy: EdgeStrategy::Random { edges: 2_000_000 },
            ..GraphConfig::default()
        };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn strategy_display() {
        assert_eq!(EdgeStrategy::Circular.to_string(), "circular");
        assert_eq!(EdgeStrategy::Random { edges: 3 }.to_string(), "random(3)");
    }
}
