//! Circle-circle collision detection and positional resolution
//!
//! Resolution is position-only: overlapping bodies are pushed apart along the
//! line joining their centres, split by mass, and velocities are left alone.
//! Bullet contacts double as damage triggers and are applied the moment they
//! are detected, so pass order matters.

use glam::Vec2;

use super::body::{Asteroid, Bullet, RigidBody, Ship};
use crate::settings::ArenaConfig;

/// Contacts that carried damage during one call to [`handle_collisions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub asteroid_hits: u32,
    pub ship_hits: u32,
}

/// Separate two bodies if their circles overlap.
///
/// Returns true on contact (touching counts). After resolution the centres
/// are exactly `a.radius + b.radius` apart and each body has moved in
/// inverse proportion to its mass.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let mut direction = a.position - b.position;
    let distance = direction.length();
    let radius_sum = a.radius() + b.radius();

    if distance > radius_sum {
        return false;
    }

    let factor = if distance != 0.0 {
        (distance - radius_sum) / distance
    } else {
        // Coincident centres: no defined normal, push apart along +x
        direction = Vec2::X;
        distance - radius_sum
    };

    let k = a.mass() / (a.mass() + b.mass());
    a.position -= (1.0 - k) * factor * direction;
    b.position += k * factor * direction;

    true
}

/// Hard-clamp a body inside the arena. Velocity is untouched.
pub fn clamp_to_border(body: &mut RigidBody, arena: &ArenaConfig) {
    let r = body.radius();

    if body.position.x - r < 0.0 {
        body.position.x = r;
    } else if body.position.x + r > arena.width {
        body.position.x = arena.width - r;
    }

    if body.position.y - r < 0.0 {
        body.position.y = r;
    } else if body.position.y + r > arena.height {
        body.position.y = arena.height - r;
    }
}

/// Mutable borrow of two distinct elements
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Run `iterations` full collision passes.
///
/// Pass order: ship/ship, then per asteroid (ships, other asteroids,
/// bullets), then ships against bullets, then border clamps for ships and
/// asteroids. Bullets are never clamped.
pub fn handle_collisions(
    ships: &mut [Ship; 2],
    asteroids: &mut [Asteroid],
    bullets: &mut [Bullet],
    arena: &ArenaConfig,
    iterations: u32,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for _ in 0..iterations {
        {
            let [s0, s1] = &mut *ships;
            resolve_pair(&mut s0.body, &mut s1.body);
        }

        for i in 0..asteroids.len() {
            for ship in ships.iter_mut() {
                resolve_pair(&mut ship.body, &mut asteroids[i].body);
            }

            for j in 0..asteroids.len() {
                if i != j {
                    let (a, b) = pair_mut(asteroids, i, j);
                    resolve_pair(&mut a.body, &mut b.body);
                }
            }

            let asteroid = &mut asteroids[i];
            for bullet in bullets.iter_mut() {
                if resolve_pair(&mut asteroid.body, &mut bullet.body) {
                    asteroid.damaged = true;
                    let left = asteroid.body.apply_damage(bullet.cnt_damage);
                    bullet.body.health = 0;
                    report.asteroid_hits += 1;
                    log::debug!("Asteroid {} hit, health now {}", i, left);
                }
            }
        }

        for (idx, ship) in ships.iter_mut().enumerate() {
            for bullet in bullets.iter_mut() {
                if resolve_pair(&mut ship.body, &mut bullet.body) {
                    let left = ship.body.apply_damage(bullet.cnt_damage);
                    bullet.body.health = 0;
                    report.ship_hits += 1;
                    log::debug!("Ship {} hit, health now {}", idx, left);
                }
            }
        }

        for ship in ships.iter_mut() {
            clamp_to_border(&mut ship.body, arena);
        }
        for asteroid in asteroids.iter_mut() {
            clamp_to_border(&mut asteroid.body, arena);
        }
    }

    report
}
