//! Semi-implicit Euler integration over a fixed timestep

use super::body::{PhysicsBody, RigidBody};

/// Advance one body by `dt`: `v += (F/m) dt; x += v dt`
#[inline]
pub fn integrate(body: &mut RigidBody, dt: f32) {
    body.acceleration = body.force / body.mass();
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
}

/// Integrate every body in a sequence
pub fn integrate_all<B: PhysicsBody>(bodies: &mut [B], dt: f32) {
    for b in bodies {
        integrate(b.body_mut(), dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_constant_force() {
        let mut body = RigidBody::new(Vec2::ZERO, 2.0, 1.0, 1);
        body.add_force(Vec2::new(4.0, 0.0));

        integrate(&mut body, 0.5);
        assert_eq!(body.acceleration, Vec2::new(2.0, 0.0));
        assert_eq!(body.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(body.position, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_inertia_without_force() {
        let mut body = RigidBody::new(Vec2::new(1.0, 1.0), 3.0, 1.0, 1);
        body.velocity = Vec2::new(2.0, -1.0);

        for _ in 0..4 {
            integrate(&mut body, 0.25);
        }
        assert_eq!(body.velocity, Vec2::new(2.0, -1.0));
        assert!((body.position - Vec2::new(3.0, 0.0)).length() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_resting_body_stays_put(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            mass in 0.01f32..1.0e6, dt in 0.0f32..10.0,
        ) {
            let mut body = RigidBody::new(Vec2::new(x, y), mass, 1.0, 1);
            integrate(&mut body, dt);
            prop_assert_eq!(body.position, Vec2::new(x, y));
        }
    }
}
