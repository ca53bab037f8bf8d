//! Orbit Duel headless runner
//!
//! Usage: `orbit-duel [config.json] [seed] [max_ticks]`
//!
//! Drives both ships with a scripted pilot and logs the outcome.

use std::process::ExitCode;

use orbit_duel::sim::{GamePhase, GameState, Ship, ShipInput, TickInput, tick};
use orbit_duel::{HudSummary, SimConfig, normalize_angle};

/// Ticks between HUD log lines
const HUD_INTERVAL: u64 = 300;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first() {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => match SimConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(12345);
    let max_ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(60 * 60);

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Orbit Duel (headless) starting, seed={}", seed);

    for _ in 0..max_ticks {
        let input = TickInput {
            ships: [
                pilot(&state.ships[0], &state.ships[1]),
                pilot(&state.ships[1], &state.ships[0]),
            ],
            toggle_gravity: false,
        };
        tick(&mut state, &input);

        if state.time_ticks % HUD_INTERVAL == 0 {
            let hud = HudSummary::from_state(&state);
            log::info!(
                "t={} health={}/{} bullets={} asteroids={}",
                hud.time_ticks,
                hud.ships[0].health,
                hud.ships[1].health,
                hud.bullet_count,
                hud.asteroid_count
            );
        }

        if state.is_over() {
            break;
        }
    }

    match state.phase {
        GamePhase::GameOver { winner: Some(w) } => println!("PLAYER {} WINS!", w),
        GamePhase::GameOver { winner: None } => println!("DRAW"),
        GamePhase::Running => println!("No winner after {} ticks", state.time_ticks),
    }

    ExitCode::SUCCESS
}

/// Turn toward the opponent, thrust when roughly aligned, fire when close to aligned
fn pilot(me: &Ship, target: &Ship) -> ShipInput {
    let to_target = target.body.position - me.body.position;
    let wanted = to_target.y.atan2(to_target.x);
    let error = normalize_angle(wanted - me.angle);

    ShipInput {
        thrust: if error.abs() < 0.5 { 0.3 } else { 0.0 },
        turn: (error * 4.0).clamp(-1.0, 1.0),
        fire: error.abs() < 0.1,
    }
}
