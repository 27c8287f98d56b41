//! Unit tests for hs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SensorId, WorkerId};

    #[test]
    fn index_roundtrip() {
        let id = SensorId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SensorId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn try_from_rejects_overflow() {
        assert!(WorkerId::try_from(usize::MAX).is_err());
    }
}

#[cfg(test)]
mod geom {
    use approx::assert_relative_eq;

    use crate::{Axis, Dimensionality, Point};

    #[test]
    fn axis_access() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p.get(Axis::Y), 2.0);
        assert_eq!(p.get(Axis::Z), 3.0);
    }

    #[test]
    fn vector_ops() {
        let a = Point::new(1.0, 2.0, 2.0);
        let b = Point::planar(1.0, 0.0);
        assert_eq!(b * 2.0 + b, Point::planar(3.0, 0.0));
        assert_eq!(a.min(b), Point::planar(1.0, 0.0));
        assert_relative_eq!(a.max(b).z, 2.0);
    }

    #[test]
    fn dimensionality_axes() {
        assert_eq!(Dimensionality::Two.axes(), 2);
        assert_eq!(Dimensionality::Three.used_axes().len(), 3);
        assert_eq!(Dimensionality::Two.to_string(), "2D");
    }
}

#[cfg(test)]
mod bounds {
    use crate::{Bounds, HsError};

    #[test]
    fn rejects_inverted() {
        assert!(matches!(
            Bounds::new(1.0, 0.0),
            Err(HsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn constant_is_allowed() {
        let b = Bounds::new(2.0, 2.0).unwrap();
        assert!(b.is_constant());
        assert_eq!((b.low, b.high), (2.0, 2.0));
        assert!(!Bounds::new(0.0, 1.0).unwrap().is_constant());
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{SimRng, WorkerId, WorkerRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = WorkerRng::new(12345, WorkerId(0));
        let mut r2 = WorkerRng::new(12345, WorkerId(0));
        for _ in 0..100 {
            let a: f64 = r1.inner().r#gen();
            let b: f64 = r2.inner().r#gen();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_workers_differ() {
        let mut r0 = WorkerRng::new(1, WorkerId(0));
        let mut r1 = WorkerRng::new(1, WorkerId(1));
        let a: u64 = r0.inner().r#gen();
        let b: u64 = r1.inner().r#gen();
        assert_ne!(a, b, "seeds for adjacent workers should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = WorkerRng::new(0, WorkerId(0));
        for _ in 0..1000 {
            let v = rng.inner().gen_range(-5.0f64..5.0);
            assert!((-5.0..5.0).contains(&v));
        }
    }

    #[test]
    fn sim_rng_seed_sequence_is_reproducible() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        let sa: Vec<u64> = (0..4).map(|i| a.derive_seed(i)).collect();
        let sb: Vec<u64> = (0..4).map(|i| b.derive_seed(i)).collect();
        assert_eq!(sa, sb);
        assert_ne!(sa[0], sa[1]);
    }
}
