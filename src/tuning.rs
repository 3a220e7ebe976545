//! Data-driven game balance
//!
//! Every gameplay constant lives here so a tuning file can override any
//! subset of them. Missing fields fall back to the arcade defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasTuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Player ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
    /// Delay between shots (ms)
    pub shot_cooldown_ms: f32,
    pub start_lives: u32,
    /// Gap between the ship and the bottom of the canvas
    pub bottom_margin: f32,
    /// Invisible/invulnerable time after being hit (seconds)
    pub respawn_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 52.0,
            height: 28.0,
            speed: 420.0,
            shot_cooldown_ms: 260.0,
            start_lives: 3,
            bottom_margin: 20.0,
            respawn_secs: 0.45,
        }
    }
}

/// Alien grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridTuning {
    pub rows: u32,
    pub cols: u32,
    pub start_x: f32,
    pub start_y: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    pub alien_width: f32,
    pub alien_height: f32,
}

impl Default for GridTuning {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 10,
            start_x: 90.0,
            start_y: 80.0,
            gap_x: 16.0,
            gap_y: 14.0,
            alien_width: 36.0,
            alien_height: 24.0,
        }
    }
}

/// Formation movement and alien fire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationTuning {
    /// Level 1 horizontal speed (pixels/s)
    pub base_speed: f32,
    /// Added speed per level after the first
    pub speed_per_level: f32,
    /// Vertical step on edge-bounce
    pub drop: f32,
    /// Level 1 delay between alien shots (ms)
    pub fire_cooldown_ms: f32,
    /// Cooldown reduction per level after the first (ms)
    pub fire_cooldown_step_ms: f32,
    /// Cap on the total cooldown reduction (ms)
    pub fire_cooldown_max_reduction_ms: f32,
}

impl Default for FormationTuning {
    fn default() -> Self {
        Self {
            base_speed: 28.0,
            speed_per_level: 8.0,
            drop: 16.0,
            fire_cooldown_ms: 900.0,
            fire_cooldown_step_ms: 80.0,
            fire_cooldown_max_reduction_ms: 500.0,
        }
    }
}

/// Shots fired by either side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    /// Upward speed of player shots (pixels/s)
    pub player_speed: f32,
    /// Level 0 downward speed of alien shots
    pub alien_base_speed: f32,
    /// Added alien shot speed per level
    pub alien_speed_per_level: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 12.0,
            player_speed: 520.0,
            alien_base_speed: 280.0,
            alien_speed_per_level: 12.0,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas: CanvasTuning,
    pub player: PlayerTuning,
    pub grid: GridTuning,
    pub formation: FormationTuning,
    pub projectiles: ProjectileTuning,
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let tuning = serde_json::from_str(json)?;
        Ok(tuning)
    }

    /// Read a tuning document from disk
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Formation speed for a level (levels start at 1)
    pub fn formation_speed(&self, level: u32) -> f32 {
        let f = &self.formation;
        f.base_speed + level.saturating_sub(1) as f32 * f.speed_per_level
    }

    /// Delay between alien shots for a level
    pub fn alien_fire_cooldown_ms(&self, level: u32) -> f32 {
        let f = &self.formation;
        let reduction = level.saturating_sub(1) as f32 * f.fire_cooldown_step_ms;
        f.fire_cooldown_ms - reduction.min(f.fire_cooldown_max_reduction_ms)
    }

    /// Downward speed of alien shots for a level
    pub fn alien_shot_speed(&self, level: u32) -> f32 {
        let p = &self.projectiles;
        p.alien_base_speed + level as f32 * p.alien_speed_per_level
    }
}
