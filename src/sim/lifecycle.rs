//! Removal of destroyed bodies

use super::body::{Bullet, PhysicsBody};
use crate::settings::ArenaConfig;

/// Drop every body with zero health, keeping survivors in order.
/// Returns how many were removed.
pub fn cull<B: PhysicsBody>(bodies: &mut Vec<B>) -> usize {
    let before = bodies.len();
    bodies.retain(|b| !b.body().is_destroyed());
    before - bodies.len()
}

/// Drop bullets whose centre has left the arena
pub fn cull_escaped(bullets: &mut Vec<Bullet>, arena: &ArenaConfig) -> usize {
    let before = bullets.len();
    bullets.retain(|b| {
        let p = b.body.position;
        p.x >= 0.0 && p.y >= 0.0 && p.x <= arena.width && p.y <= arena.height
    });
    before - bullets.len()
}
