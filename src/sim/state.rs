//! Simulation state
//!
//! Owns the four body sequences plus the immutable config. Everything needed
//! to replay a run lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Asteroid, Bullet, GravitySource, Ship};
use super::gravity::GravityField;
use crate::settings::{ConfigError, SimConfig};

/// Current phase of the duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being simulated
    Running,
    /// A ship has been destroyed. `None` means both went down together.
    GameOver { winner: Option<usize> },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Runtime gravity switch
    pub gravity_enabled: bool,
    pub ships: [Ship; 2],
    /// Insertion ordered
    pub asteroids: Vec<Asteroid>,
    /// Insertion ordered
    pub bullets: Vec<Bullet>,
    pub gravity_sources: Vec<GravitySource>,
    config: SimConfig,
}

impl GameState {
    /// Validate `config` and spawn a fresh duel.
    ///
    /// Ships and asteroids are scattered uniformly over the arena from
    /// `seed`; gravity sources sit at one and two thirds of the width.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let (width, height) = (config.arena.width, config.arena.height);
        let mut random_point =
            || Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);

        let ships = [
            Ship::new(random_point(), &config.ship),
            Ship::new(random_point(), &config.ship),
        ];

        let asteroids = (0..config.asteroid.count)
            .map(|_| Asteroid::new(random_point(), &config.asteroid))
            .collect();

        let g = &config.gravity;
        let gravity_sources = vec![
            GravitySource::new(
                Vec2::new(width / 3.0, height / 2.0),
                g.source_mass,
                g.source_radius,
            ),
            GravitySource::new(
                Vec2::new(2.0 * width / 3.0, height / 2.0),
                g.source_mass,
                g.source_radius,
            ),
        ];

        log::info!(
            "Spawned duel: seed={}, arena={}x{}, asteroids={}, sources={}",
            seed,
            width,
            height,
            config.asteroid.count,
            gravity_sources.len()
        );

        Ok(Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            gravity_enabled: g.enabled,
            ships,
            asteroids,
            bullets: Vec::new(),
            gravity_sources,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Fixed timestep
    #[inline]
    pub fn dt(&self) -> f32 {
        self.config.dt()
    }

    pub fn gravity_field(&self) -> GravityField {
        GravityField::from_config(&self.config.gravity)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Decide the outcome from ship health
    pub(crate) fn check_game_over(&mut self) {
        let dead = [
            self.ships[0].body.is_destroyed(),
            self.ships[1].body.is_destroyed(),
        ];
        let winner = match dead {
            [false, false] => return,
            [true, false] => Some(1),
            [false, true] => Some(0),
            [true, true] => None,
        };
        self.phase = GamePhase::GameOver { winner };
        match winner {
            Some(w) => log::info!("Player {} wins after {} ticks", w, self.time_ticks),
            None => log::info!("Both ships destroyed after {} ticks", self.time_ticks),
        }
    }
}
