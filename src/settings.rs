//! Simulation settings
//!
//! Loaded once before the first tick and passed by reference to every
//! component that needs constants. Never mutated while the simulation runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document could not be parsed
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot run with
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Playfield dimensions (world units, origin at top-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

/// Ship constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub radius: f32,
    pub mass: f32,
    pub health: u32,
    /// Thrust magnitude at full throttle
    pub engine_force: f32,
    /// Turn rate (radians per second)
    pub turn_rate: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            mass: 1000.0,
            health: 100,
            engine_force: 3.0e5,
            turn_rate: std::f32::consts::PI,
            fire_cooldown: 0.25,
        }
    }
}

/// Asteroid constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Number of asteroids spawned at start
    pub count: usize,
    pub radius: f32,
    pub mass: f32,
    pub health: u32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 15.0,
            mass: 500.0,
            health: 30,
        }
    }
}

/// Projectile constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub radius: f32,
    pub mass: f32,
    pub health: u32,
    /// Health removed from whatever the bullet hits
    pub damage: u32,
    /// Muzzle speed relative to the firing ship
    pub speed: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            mass: 1.0,
            health: 1,
            damage: 10,
            speed: 400.0,
        }
    }
}

/// Gravity field constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Gravitational constant
    pub g: f32,
    /// Cap on the force magnitude a single source can exert
    pub inf_threshold: f32,
    pub source_mass: f32,
    pub source_radius: f32,
    /// Initial state of the global gravity switch
    pub enabled: bool,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            g: G,
            inf_threshold: GRAVITY_INF_THRESHOLD,
            source_mass: GRAVITY_SOURCE_MASS,
            source_radius: GRAVITY_SOURCE_RADIUS,
            enabled: true,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    /// Fixed tick rate (Hz)
    pub tick_rate: u32,
    pub ship: ShipConfig,
    pub asteroid: AsteroidConfig,
    pub bullet: BulletConfig,
    pub gravity: GravityConfig,
    /// Collision passes per tick
    pub collision_iterations: u32,
    /// Remove bullets whose centre has left the arena
    pub cull_escaped_bullets: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            tick_rate: DEFAULT_TICK_RATE,
            ship: ShipConfig::default(),
            asteroid: AsteroidConfig::default(),
            bullet: BulletConfig::default(),
            gravity: GravityConfig::default(),
            collision_iterations: 1,
            cull_escaped_bullets: false,
        }
    }
}

impl SimConfig {
    /// Fixed timestep in seconds
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(invalid("tick_rate", "must be at least 1"));
        }
        if self.collision_iterations == 0 {
            return Err(invalid("collision_iterations", "must be at least 1"));
        }
        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;

        positive("ship.radius", self.ship.radius)?;
        positive("ship.mass", self.ship.mass)?;
        non_negative("ship.engine_force", self.ship.engine_force)?;
        non_negative("ship.turn_rate", self.ship.turn_rate)?;
        non_negative("ship.fire_cooldown", self.ship.fire_cooldown)?;

        positive("asteroid.radius", self.asteroid.radius)?;
        positive("asteroid.mass", self.asteroid.mass)?;

        positive("bullet.radius", self.bullet.radius)?;
        positive("bullet.mass", self.bullet.mass)?;
        non_negative("bullet.speed", self.bullet.speed)?;

        let arena = &self.arena;
        fits_arena("ship.radius", self.ship.radius, arena)?;
        fits_arena("asteroid.radius", self.asteroid.radius, arena)?;
        fits_arena("bullet.radius", self.bullet.radius, arena)?;

        non_negative("gravity.g", self.gravity.g)?;
        positive("gravity.inf_threshold", self.gravity.inf_threshold)?;
        positive("gravity.source_mass", self.gravity.source_mass)?;
        positive("gravity.source_radius", self.gravity.source_radius)?;

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be positive and finite"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be non-negative and finite"))
    }
}

/// A body must fit between opposite walls for border clamping to settle
fn fits_arena(field: &'static str, radius: f32, arena: &ArenaConfig) -> Result<(), ConfigError> {
    let diameter = 2.0 * radius;
    if diameter <= arena.width && diameter <= arena.height {
        Ok(())
    } else {
        Err(invalid(field, "body is wider than the arena"))
    }
}
