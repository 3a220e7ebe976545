//! Heads-up display

pub mod hud;

pub use hud::{HudInfo, HudText, Overlay, draw_hud};
