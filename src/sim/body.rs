//! Simulated bodies
//!
//! Every mobile entity owns a [`RigidBody`] (position, mass, radius, force
//! accumulator, health) and exposes it through [`PhysicsBody`]. Ship-only
//! state (orientation, thrust, gun cooldown) lives on [`Ship`] itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MUZZLE_GAP;
use crate::settings::{AsteroidConfig, BulletConfig, ShipConfig};
use crate::{direction_from_angle, normalize_angle};

/// Shared physical state of a circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Acceleration from the last integration step
    pub acceleration: Vec2,
    /// Force summed during the current tick
    pub force: Vec2,
    mass: f32,
    radius: f32,
    pub health: u32,
}

impl RigidBody {
    pub fn new(position: Vec2, mass: f32, radius: f32, health: u32) -> Self {
        debug_assert!(mass > 0.0 && radius > 0.0);
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            radius,
            health,
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Zero the force accumulator
    #[inline]
    pub fn reset_forces(&mut self) {
        self.force = Vec2::ZERO;
    }

    #[inline]
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Remove `amount` health, flooring at zero. Returns the remaining health.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

/// Capability shared by ships, asteroids and bullets
pub trait PhysicsBody {
    fn body(&self) -> &RigidBody;
    fn body_mut(&mut self) -> &mut RigidBody;
}

/// A player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: RigidBody,
    /// Heading (radians, [-π, π))
    pub angle: f32,
    /// Thrust along `direction()` for the current tick
    pub eng_force_norm: f32,
    /// Seconds until the gun can fire again
    pub fire_cooldown: f32,
}

impl Ship {
    pub fn new(position: Vec2, config: &ShipConfig) -> Self {
        Self {
            body: RigidBody::new(position, config.mass, config.radius, config.health),
            angle: 0.0,
            eng_force_norm: 0.0,
            fire_cooldown: 0.0,
        }
    }

    /// Unit heading vector
    #[inline]
    pub fn direction(&self) -> Vec2 {
        direction_from_angle(self.angle)
    }

    /// Current engine thrust vector
    #[inline]
    pub fn thrust(&self) -> Vec2 {
        self.direction() * self.eng_force_norm
    }

    /// Rotate by `rate * dt` radians
    pub fn turn(&mut self, rate: f32, dt: f32) {
        self.angle = normalize_angle(self.angle + rate * dt);
    }

    /// Advance the gun cooldown by one tick
    pub fn cool_down(&mut self, dt: f32) {
        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
    }

    /// Fire a bullet if the gun is ready
    pub fn fire(&mut self, bullets: &BulletConfig, cooldown: f32) -> Option<Bullet> {
        if self.fire_cooldown > 0.0 {
            return None;
        }
        self.fire_cooldown = cooldown;

        let dir = self.direction();
        // Spawn clear of the hull so the shot never hits its own ship
        let offset = self.body.radius() + bullets.radius + MUZZLE_GAP;
        let mut bullet = Bullet::new(self.body.position + dir * offset, bullets);
        bullet.body.velocity = self.body.velocity + dir * bullets.speed;
        Some(bullet)
    }
}

impl PhysicsBody for Ship {
    fn body(&self) -> &RigidBody {
        &self.body
    }
    fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: RigidBody,
    /// Set once a bullet has struck it (render tint)
    pub damaged: bool,
}

impl Asteroid {
    pub fn new(position: Vec2, config: &AsteroidConfig) -> Self {
        Self {
            body: RigidBody::new(position, config.mass, config.radius, config.health),
            damaged: false,
        }
    }
}

impl PhysicsBody for Asteroid {
    fn body(&self) -> &RigidBody {
        &self.body
    }
    fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }
}

/// A projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub body: RigidBody,
    pub cnt_damage: u32,
}

impl Bullet {
    pub fn new(position: Vec2, config: &BulletConfig) -> Self {
        Self {
            body: RigidBody::new(position, config.mass, config.radius, config.health),
            cnt_damage: config.damage,
        }
    }
}

impl PhysicsBody for Bullet {
    fn body(&self) -> &RigidBody {
        &self.body
    }
    fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }
}

/// An immobile attractor. Never moved, never damaged, never culled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravitySource {
    pub position: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl GravitySource {
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            mass,
            radius,
        }
    }
}
