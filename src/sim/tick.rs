//! Fixed timestep simulation tick
//!
//! Core loop that advances the duel deterministically:
//! reset → input → cull → forces → integrate → collide → outcome.

use super::collision::handle_collisions;
use super::forces::{apply_forces, reset_all};
use super::integrator::integrate_all;
use super::lifecycle::{cull, cull_escaped};
use super::state::GameState;

/// Controls for one ship during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipInput {
    /// Throttle in [-1, 1] (negative = reverse thrust)
    pub thrust: f32,
    /// Turn axis in [-1, 1] (positive = counter-clockwise)
    pub turn: f32,
    /// Pull the trigger
    pub fire: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub ships: [ShipInput; 2],
    /// Flip the global gravity switch
    pub toggle_gravity: bool,
}

/// What happened during a tick, for audio/HUD observers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub fired: u32,
    pub asteroid_hits: u32,
    pub ship_hits: u32,
    pub culled_bullets: usize,
    pub culled_asteroids: usize,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    if state.is_over() {
        return report;
    }

    let dt = state.dt();
    let arena = state.config().arena;
    let iterations = state.config().collision_iterations;

    // Fresh per-tick state
    for ship in state.ships.iter_mut() {
        ship.eng_force_norm = 0.0;
        ship.cool_down(dt);
    }
    reset_all(&mut state.ships);
    reset_all(&mut state.asteroids);
    reset_all(&mut state.bullets);

    apply_input(state, input, &mut report);

    // Bodies destroyed on the previous tick
    report.culled_bullets = cull(&mut state.bullets);
    if state.config().cull_escaped_bullets {
        report.culled_bullets += cull_escaped(&mut state.bullets, &arena);
    }
    report.culled_asteroids = cull(&mut state.asteroids);
    if report.culled_bullets + report.culled_asteroids > 0 {
        log::debug!(
            "Culled {} bullets, {} asteroids",
            report.culled_bullets,
            report.culled_asteroids
        );
    }

    let field = state.gravity_field();
    apply_forces(
        &field,
        &state.gravity_sources,
        state.gravity_enabled,
        &mut state.ships,
        &mut state.asteroids,
        &mut state.bullets,
    );

    integrate_all(&mut state.ships, dt);
    integrate_all(&mut state.asteroids, dt);
    integrate_all(&mut state.bullets, dt);

    let hits = handle_collisions(
        &mut state.ships,
        &mut state.asteroids,
        &mut state.bullets,
        &arena,
        iterations,
    );
    report.asteroid_hits = hits.asteroid_hits;
    report.ship_hits = hits.ship_hits;

    state.time_ticks += 1;
    state.check_game_over();

    report
}

/// Thrust, turning, firing and the gravity switch
fn apply_input(state: &mut GameState, input: &TickInput, report: &mut TickReport) {
    if input.toggle_gravity {
        state.gravity_enabled = !state.gravity_enabled;
        log::info!("Gravity {}", if state.gravity_enabled { "on" } else { "off" });
    }

    let dt = state.dt();
    let ship_cfg = state.config().ship;
    let bullet_cfg = state.config().bullet;

    for (idx, (ship, controls)) in state.ships.iter_mut().zip(input.ships.iter()).enumerate() {
        ship.eng_force_norm = axis(controls.thrust) * ship_cfg.engine_force;

        let turn = axis(controls.turn);
        if turn != 0.0 {
            ship.turn(turn * ship_cfg.turn_rate, dt);
        }

        if controls.fire {
            if let Some(bullet) = ship.fire(&bullet_cfg, ship_cfg.fire_cooldown) {
                log::debug!("Ship {} fired", idx);
                state.bullets.push(bullet);
                report.fired += 1;
            }
        }
    }
}

/// Clamp a control axis to [-1, 1]; NaN and infinities read as released
fn axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}
