//! Pixel Invaders - A pixel-art Space Invaders arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, game state)
//! - `renderer`: Drawing surface abstraction, sprites and WebGPU pipeline
//! - `platform`: Browser/native frame clock and key mapping
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD text and overlays

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{InvadersError, Result};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest simulation step the frame driver hands to `GameState::update` (seconds)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Spacing of the background grid lines
    pub const BACKGROUND_GRID_STEP: f32 = 32.0;
}

/// RGBA color with straight alpha, components in 0..=1
pub type Rgba = [f32; 4];

/// Convert a `0xRRGGBB` literal into an opaque [`Rgba`]
#[inline]
pub const fn rgb(hex: u32) -> Rgba {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Same color with a different alpha
#[inline]
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}
