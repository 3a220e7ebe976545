//! Score/lives/level readout and full-screen overlays
//!
//! The HUD only reads a [`HudInfo`] snapshot; it never touches the
//! simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{DrawSurface, TextAlign, TextStyle};
use crate::sim::{GamePhase, GameState, Rect};
use crate::{Rgba, rgb};

pub const HUD_TEXT_COLOR: Rgba = rgb(0xf5f8ff);
/// Dimming layer behind overlay text
pub const OVERLAY_DIM: Rgba = [0.0, 0.0, 0.0, 0.55];

const HUD_FONT_SIZE: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 48.0;
const SUBTITLE_FONT_SIZE: f32 = 22.0;

/// Snapshot of what the HUD displays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudInfo {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
    pub paused: bool,
    pub width: f32,
    pub height: f32,
}

impl HudInfo {
    /// Everything the HUD needs from one frame of the game
    pub fn from_state(state: &GameState) -> Self {
        let canvas = state.canvas_size();
        Self {
            score: state.score(),
            lives: state.lives(),
            level: state.level(),
            phase: state.phase(),
            paused: state.is_paused(),
            width: canvas.x,
            height: canvas.y,
        }
    }
}

/// Centered title card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Overlay {
    /// Which card (if any) covers the playfield
    pub fn for_hud(info: &HudInfo) -> Option<Self> {
        let (title, subtitle) = match info.phase {
            GamePhase::Start => ("SPACE INVADERS", "Press Enter to Start"),
            GamePhase::Playing if info.paused => ("Paused", "Press P to Resume"),
            GamePhase::Playing => return None,
            GamePhase::GameOver => ("Game Over", "Press Enter to Restart"),
            GamePhase::Win => ("You Win", "Press Enter for Next Level"),
        };
        Some(Self { title, subtitle })
    }
}

/// Formatted HUD strings (shared by the canvas HUD and the DOM HUD)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub lives: String,
    pub level: String,
    pub overlay: Option<Overlay>,
}

impl HudText {
    pub fn new(info: &HudInfo) -> Self {
        Self {
            score: format!("Score: {}", info.score),
            lives: format!("Lives: {}", info.lives),
            level: format!("Level: {}", info.level),
            overlay: Overlay::for_hud(info),
        }
    }
}

/// Draw the readout and, when needed, a dimmed title card
pub fn draw_hud(surface: &mut dyn DrawSurface, info: &HudInfo) {
    let text = HudText::new(info);
    let label = TextStyle {
        size: HUD_FONT_SIZE,
        bold: false,
        align: TextAlign::Left,
        color: HUD_TEXT_COLOR,
    };

    surface.fill_text(&text.score, Vec2::new(18.0, 30.0), label);
    surface.fill_text(&text.lives, Vec2::new(18.0, 56.0), label);
    surface.fill_text(&text.level, Vec2::new(info.width - 110.0, 30.0), label);

    if let Some(overlay) = text.overlay {
        draw_overlay(surface, info.width, info.height, &overlay);
    }
}

fn draw_overlay(surface: &mut dyn DrawSurface, width: f32, height: f32, overlay: &Overlay) {
    surface.fill_rect(Rect::new(0.0, 0.0, width, height), OVERLAY_DIM);

    let center = Vec2::new(width / 2.0, height / 2.0);
    surface.fill_text(
        overlay.title,
        center - Vec2::new(0.0, 24.0),
        TextStyle {
            size: TITLE_FONT_SIZE,
            bold: true,
            align: TextAlign::Center,
            color: HUD_TEXT_COLOR,
        },
    );
    surface.fill_text(
        overlay.subtitle,
        center + Vec2::new(0.0, 24.0),
        TextStyle {
            size: SUBTITLE_FONT_SIZE,
            bold: false,
            align: TextAlign::Center,
            color: HUD_TEXT_COLOR,
        },
    );
}
