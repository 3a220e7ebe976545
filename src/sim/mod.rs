//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only advances through `GameState::update(dt)`
//! - Randomness only through the injected `RandomSource`
//! - Stable iteration order (array order, row-major formation)
//! - No rendering or platform dependencies

pub mod entities;
pub mod explosion;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod tick;

pub use entities::{
    ALIEN_PALETTES, Alien, AlienPalette, MoveInput, Owner, PLAYER_COCKPIT_COLOR, PLAYER_COLOR,
    Player, Projectile, create_alien_grid, points_for_row,
};
pub use explosion::{ALIEN_BURST, BurstSpec, Explosion, PLAYER_BURST, PARTICLE_SIZE, Particle};
pub use geometry::{Bounded, Rect, intersects};
pub use rng::{PcgRandom, RandomSource, SequenceRandom};
pub use state::{GamePhase, GameState, RestartOptions};
