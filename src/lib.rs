//! Orbit Duel - physics core of a two-player gravity-well space duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (forces, integration, collisions, culling)
//! - `settings`: Immutable simulation configuration
//! - `hud`: Read-only telemetry for display layers

pub mod hud;
pub mod settings;
pub mod sim;

pub use hud::{HudSummary, ShipTelemetry};
pub use settings::{ConfigError, SimConfig};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Default fixed tick rate (Hz)
    pub const DEFAULT_TICK_RATE: u32 = 60;

    /// Default playfield dimensions
    pub const DEFAULT_ARENA_WIDTH: f32 = 1280.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 720.0;

    /// Gravitational constant
    pub const G: f32 = 6.67e-11;
    /// Gravity force cap (avoids blow-up near a source)
    pub const GRAVITY_INF_THRESHOLD: f32 = 1.0e7;
    /// Planet-class gravity source defaults
    pub const GRAVITY_SOURCE_MASS: f32 = 5.97e16;
    pub const GRAVITY_SOURCE_RADIUS: f32 = 25.0;

    /// Gap left between a ship's hull and a freshly fired bullet
    pub const MUZZLE_GAP: f32 = 1.0;
}

/// Normalized angle to [-π, π). Non-finite input yields NaN.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative remainders
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
