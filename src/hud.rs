//! Read-only telemetry for the HUD layer

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, Ship};

/// Per-ship readout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipTelemetry {
    /// |F| summed on the last tick
    pub total_force: f32,
    pub engine_force: f32,
    pub position: Vec2,
    pub speed: f32,
    pub acceleration: f32,
    /// Heading in units of π
    pub angle: f32,
    pub health: u32,
}

impl ShipTelemetry {
    pub fn from_ship(ship: &Ship) -> Self {
        Self {
            total_force: ship.body.force.length(),
            engine_force: ship.eng_force_norm,
            position: ship.body.position,
            speed: ship.body.velocity.length(),
            acceleration: ship.body.acceleration.length(),
            angle: ship.angle / std::f32::consts::PI,
            health: ship.body.health,
        }
    }
}

/// Snapshot of everything the HUD displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSummary {
    pub ships: [ShipTelemetry; 2],
    pub bullet_count: usize,
    pub asteroid_count: usize,
    pub gravity_enabled: bool,
    pub time_ticks: u64,
}

impl HudSummary {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            ships: [
                ShipTelemetry::from_ship(&state.ships[0]),
                ShipTelemetry::from_ship(&state.ships[1]),
            ],
            bullet_count: state.bullets.len(),
            asteroid_count: state.asteroids.len(),
            gravity_enabled: state.gravity_enabled,
            time_ticks: state.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_summary_tracks_state() {
        let mut config = SimConfig::default();
        config.gravity.enabled = false;
        let mut state = GameState::new(config, 3).expect("valid config");
        state.ships[0].body.position = Vec2::new(300.0, 300.0);
        state.ships[1].body.position = Vec2::new(900.0, 500.0);
        state.asteroids.clear();

        let mut input = TickInput::default();
        input.ships[0].thrust = 1.0;
        input.ships[0].fire = true;
        tick(&mut state, &input);

        let hud = HudSummary::from_state(&state);
        let engine = state.config().ship.engine_force;
        assert_eq!(hud.bullet_count, 1);
        assert_eq!(hud.asteroid_count, 0);
        assert!(!hud.gravity_enabled);
        assert_eq!(hud.time_ticks, 1);
        assert_eq!(hud.ships[0].engine_force, engine);
        assert!((hud.ships[0].total_force - engine).abs() < 1e-1);
        assert!(hud.ships[0].speed > 0.0);
        assert_eq!(hud.ships[1].speed, 0.0);
    }
}
