//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order per sequence)
//! - No rendering, input or platform dependencies

pub mod body;
pub mod collision;
pub mod forces;
pub mod gravity;
pub mod integrator;
pub mod lifecycle;
pub mod state;
pub mod tick;

pub use body::{Asteroid, Bullet, GravitySource, PhysicsBody, RigidBody, Ship};
pub use collision::{CollisionReport, clamp_to_border, handle_collisions, resolve_pair};
pub use gravity::GravityField;
pub use integrator::integrate;
pub use lifecycle::cull;
pub use state::{GamePhase, GameState};
pub use tick::{ShipInput, TickInput, TickReport, tick};
