//! Gravity field of an immobile source
//!
//! Inverse-square attraction `G * m1 * m2 / d²`, capped at `inf_threshold`
//! so bodies skimming a source don't get launched by a near-singular force.

use glam::Vec2;

use super::body::{GravitySource, RigidBody};
use crate::settings::GravityConfig;

/// Gravitational constant plus force cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    pub g: f32,
    pub inf_threshold: f32,
}

impl GravityField {
    pub fn new(g: f32, inf_threshold: f32) -> Self {
        Self { g, inf_threshold }
    }

    pub fn from_config(config: &GravityConfig) -> Self {
        Self::new(config.g, config.inf_threshold)
    }

    /// Force `source` exerts on `body`, pointing from the body toward the source.
    ///
    /// Zero when the body sits exactly on the source.
    pub fn force_on(&self, body: &RigidBody, source: &GravitySource) -> Vec2 {
        let offset = source.position - body.position;
        let dist_sq = offset.length_squared();
        if dist_sq == 0.0 {
            return Vec2::ZERO;
        }

        // (G * m1) * m2 keeps the intermediate inside f32 range
        let magnitude = (self.g * source.mass * body.mass() / dist_sq).min(self.inf_threshold);
        offset / dist_sq.sqrt() * magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> GravityField {
        GravityField::new(1.0, 1000.0)
    }

    #[test]
    fn test_inverse_square() {
        let source = GravitySource::new(Vec2::ZERO, 100.0, 5.0);
        let body = RigidBody::new(Vec2::new(10.0, 0.0), 2.0, 1.0, 1);

        let f = field().force_on(&body, &source);
        // 1 * 100 * 2 / 100 = 2, pointing toward -x
        assert!((f - Vec2::new(-2.0, 0.0)).length() < 1e-5);

        let far = RigidBody::new(Vec2::new(20.0, 0.0), 2.0, 1.0, 1);
        let f_far = field().force_on(&far, &source);
        assert!((f.length() / f_far.length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_capped_near_source() {
        let source = GravitySource::new(Vec2::ZERO, 1.0e6, 5.0);
        let body = RigidBody::new(Vec2::new(0.0, 0.5), 1.0, 1.0, 1);

        let f = field().force_on(&body, &source);
        assert!((f.length() - 1000.0).abs() < 1e-2);
        assert!(f.y < 0.0);
    }

    #[test]
    fn test_zero_distance_is_zero_force() {
        let source = GravitySource::new(Vec2::new(3.0, 4.0), 1.0e6, 5.0);
        let body = RigidBody::new(Vec2::new(3.0, 4.0), 1.0, 1.0, 1);
        assert_eq!(field().force_on(&body, &source), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_points_toward_source(
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            sx in -500.0f32..500.0, sy in -500.0f32..500.0,
            mass in 0.1f32..1.0e4,
        ) {
            let source = GravitySource::new(Vec2::new(sx, sy), 1.0e5, 10.0);
            let body = RigidBody::new(Vec2::new(bx, by), mass, 1.0, 1);
            let to_source = source.position - body.position;
            prop_assume!(to_source.length() > 1e-2);

            let f = field().force_on(&body, &source);
            prop_assert!(f.length() <= 1000.0 * (1.0 + 1e-5));
            if f.length() > 0.0 {
                let cos = f.normalize().dot(to_source.normalize());
                prop_assert!(cos > 0.999);
            }
        }
    }
}
