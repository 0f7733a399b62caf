//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Frame-synchronous updates only
//! - Seeded RNG only
//! - Fixed-capacity pools with first-fit slot reuse
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod state;
pub mod tick;
pub mod trig;

pub use asteroid::generate_vertices;
pub use collision::{player_hits_asteroid, point_in_polygon};
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameMode, Particle, Player, PlayerState, SoundEffect, World,
    derive_player_vertices,
};
pub use tick::{TickInput, tick};
pub use trig::TrigTable;
