//! Per-tick force accumulation
//!
//! Engine thrust goes onto ships only; gravity goes onto every mobile body
//! from every source. Sources themselves never receive force.

use super::body::{Asteroid, Bullet, GravitySource, PhysicsBody, Ship};
use super::gravity::GravityField;

/// Zero the accumulator of every body in `bodies`
pub fn reset_all<B: PhysicsBody>(bodies: &mut [B]) {
    for b in bodies {
        b.body_mut().reset_forces();
    }
}

/// Add each ship's thrust vector
pub fn apply_engine_forces(ships: &mut [Ship]) {
    for ship in ships {
        let thrust = ship.thrust();
        ship.body.add_force(thrust);
    }
}

/// Add the pull of every source onto every body in `bodies`
pub fn apply_gravity<B: PhysicsBody>(field: &GravityField, sources: &[GravitySource], bodies: &mut [B]) {
    for source in sources {
        for b in bodies.iter_mut() {
            let f = field.force_on(b.body(), source);
            b.body_mut().add_force(f);
        }
    }
}

/// Full accumulation pass: thrust, then gravity unless disabled
pub fn apply_forces(
    field: &GravityField,
    sources: &[GravitySource],
    gravity_enabled: bool,
    ships: &mut [Ship],
    asteroids: &mut [Asteroid],
    bullets: &mut [Bullet],
) {
    apply_engine_forces(ships);

    if gravity_enabled {
        apply_gravity(field, sources, ships);
        apply_gravity(field, sources, asteroids);
        apply_gravity(field, sources, bullets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AsteroidConfig, BulletConfig, ShipConfig};
    use glam::Vec2;

    fn field() -> GravityField {
        GravityField::new(1.0, 1.0e9)
    }

    #[test]
    fn test_thrust_along_heading() {
        let mut ships = vec![Ship::new(Vec2::ZERO, &ShipConfig::default())];
        ships[0].angle = std::f32::consts::FRAC_PI_2;
        ships[0].eng_force_norm = 50.0;

        apply_forces(&field(), &[], true, &mut ships, &mut [], &mut []);
        assert!((ships[0].body.force - Vec2::new(0.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_every_source_contributes() {
        // Two equal sources on either side cancel out
        let sources = [
            GravitySource::new(Vec2::new(-10.0, 0.0), 100.0, 1.0),
            GravitySource::new(Vec2::new(10.0, 0.0), 100.0, 1.0),
        ];
        let mut asteroids = vec![
            Asteroid::new(Vec2::ZERO, &AsteroidConfig::default()),
            Asteroid::new(Vec2::new(0.0, 10.0), &AsteroidConfig::default()),
        ];

        apply_forces(&field(), &sources, true, &mut [], &mut asteroids, &mut []);
        assert!(asteroids[0].body.force.length() < 1e-3);
        // Off-axis body is pulled down toward both, x components cancel
        assert!(asteroids[1].body.force.x.abs() < 1e-3);
        assert!(asteroids[1].body.force.y < 0.0);
    }

    #[test]
    fn test_gravity_switch() {
        let sources = [GravitySource::new(Vec2::new(10.0, 0.0), 100.0, 1.0)];
        let mut bullets = vec![Bullet::new(Vec2::ZERO, &BulletConfig::default())];

        apply_forces(&field(), &sources, false, &mut [], &mut [], &mut bullets);
        assert_eq!(bullets[0].body.force, Vec2::ZERO);

        apply_forces(&field(), &sources, true, &mut [], &mut [], &mut bullets);
        assert!(bullets[0].body.force.x > 0.0);

        reset_all(&mut bullets);
        assert_eq!(bullets[0].body.force, Vec2::ZERO);
    }
}
