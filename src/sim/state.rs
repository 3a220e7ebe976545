//! Game state and lifecycle actions
//!
//! `GameState` owns every entity collection. The per-frame protocol lives in
//! `tick.rs`; this file holds construction, player actions, restarts and
//! read-only accessors for the render hook.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Alien, MoveInput, Owner, Player, Projectile, create_alien_grid};
use super::explosion::Explosion;
use super::rng::{PcgRandom, RandomSource};
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start action
    #[default]
    Start,
    /// Active gameplay (possibly paused)
    Playing,
    /// Player ran out of lives or the formation landed
    GameOver,
    /// Every alien destroyed
    Win,
}

impl GamePhase {
    /// Start action: only leaves the title screen
    pub fn started(self) -> Self {
        match self {
            GamePhase::Start => GamePhase::Playing,
            other => other,
        }
    }

    /// Restart action: every phase lands in `Playing`
    pub fn restarted(self) -> Self {
        GamePhase::Playing
    }

    /// End-of-frame evaluation while playing
    pub fn evaluated(self, aliens_left: usize, invaded: bool, lives: u32) -> Self {
        if self != GamePhase::Playing {
            return self;
        }
        if aliens_left == 0 {
            GamePhase::Win
        } else if invaded || lives == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    /// Round is over and waits for a restart
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameOver",
            GamePhase::Win => "win",
        }
    }
}

/// How a restart treats progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartOptions {
    /// Keep score, level and lives
    pub preserve_score: bool,
    /// Advance to the next level (only with `preserve_score`)
    pub next_level: bool,
}

impl RestartOptions {
    /// Continue after a win
    pub fn next_level() -> Self {
        Self {
            preserve_score: true,
            next_level: true,
        }
    }
}

/// Complete simulation state
pub struct GameState {
    pub(crate) tuning: Tuning,
    pub(crate) rng: Box<dyn RandomSource>,
    pub(crate) phase: GamePhase,
    pub(crate) paused: bool,
    /// Current level (1-based)
    pub(crate) level: u32,
    pub(crate) score: u64,
    /// Held movement keys
    pub input: MoveInput,
    pub(crate) player: Player,
    pub(crate) player_visible: bool,
    /// Seconds until the player reappears
    pub(crate) respawn_timer: f32,
    /// Formation in row-major order
    pub(crate) aliens: Vec<Alien>,
    pub(crate) player_shots: Vec<Projectile>,
    pub(crate) alien_shots: Vec<Projectile>,
    pub(crate) explosions: Vec<Explosion>,
    /// +1 moving right, -1 moving left
    pub(crate) formation_dir: f32,
    pub(crate) formation_speed: f32,
    /// Alien fire period for the current level (ms)
    pub(crate) alien_fire_cooldown: f32,
    /// Time left until the next alien shot (ms)
    pub(crate) alien_fire_timer: f32,
    /// Sprite animation clock (ms)
    pub(crate) anim_time_ms: f32,
}

impl GameState {
    /// Create a new game on the title screen
    pub fn new(tuning: Tuning, rng: Box<dyn RandomSource>) -> Self {
        let player = Player::new(&tuning.player, tuning.canvas.width, tuning.canvas.height);
        let aliens = create_alien_grid(&tuning.grid);
        let formation_speed = tuning.formation_speed(1);
        let alien_fire_cooldown = tuning.alien_fire_cooldown_ms(1);

        Self {
            tuning,
            rng,
            phase: GamePhase::Start,
            paused: false,
            level: 1,
            score: 0,
            input: MoveInput::default(),
            player,
            player_visible: true,
            respawn_timer: 0.0,
            aliens,
            player_shots: Vec::new(),
            alien_shots: Vec::new(),
            explosions: Vec::new(),
            formation_dir: 1.0,
            formation_speed,
            alien_fire_cooldown,
            alien_fire_timer: alien_fire_cooldown,
            anim_time_ms: 0.0,
        }
    }

    /// Create a game with a seeded PCG random source
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, Box::new(PcgRandom::new(seed)))
    }

    /// Title screen -> playing. No effect in any other phase.
    pub fn start_game(&mut self) {
        let next = self.phase.started();
        if next != self.phase {
            log::info!("Game started (level {})", self.level);
            self.phase = next;
            self.paused = false;
        }
    }

    /// Reset the round, optionally carrying progress forward
    pub fn restart(&mut self, options: RestartOptions) {
        if !options.preserve_score {
            self.score = 0;
            self.level = 1;
            self.player.set_lives(self.tuning.player.start_lives);
        } else if options.next_level {
            self.level += 1;
        }

        let canvas = self.tuning.canvas;
        self.player
            .reset_position(canvas.width, canvas.height, self.tuning.player.bottom_margin);
        self.player.clear_cooldown();
        self.player_visible = true;
        self.respawn_timer = 0.0;

        self.player_shots.clear();
        self.alien_shots.clear();
        self.explosions.clear();

        self.aliens = create_alien_grid(&self.tuning.grid);
        self.formation_dir = 1.0;
        self.formation_speed = self.tuning.formation_speed(self.level);
        self.alien_fire_cooldown = self.tuning.alien_fire_cooldown_ms(self.level);
        self.alien_fire_timer = self.alien_fire_cooldown;
        self.anim_time_ms = 0.0;

        self.phase = self.phase.restarted();
        self.paused = false;

        log::info!(
            "Round restarted: level {}, score {}, lives {}",
            self.level,
            self.score,
            self.player.lives()
        );
    }

    /// Pause/resume; ignored outside `Playing`
    pub fn toggle_pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.paused = !self.paused;
            log::info!("Paused: {}", self.paused);
        }
    }

    /// Fire a player shot if the ship is ready
    pub fn fire(&mut self) {
        if self.phase != GamePhase::Playing || self.paused || !self.player.can_shoot() {
            return;
        }

        self.player.trigger_cooldown();
        let p = &self.tuning.projectiles;
        let pos = self.player.muzzle(p.width, p.height);
        self.player_shots.push(Projectile::new(
            pos,
            Vec2::new(p.width, p.height),
            -p.player_speed,
            Owner::Player,
        ));
    }

    /// Set the held movement keys
    pub fn set_input(&mut self, left: bool, right: bool) {
        self.input = MoveInput { left, right };
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.player.lives()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_player_visible(&self) -> bool {
        self.player_visible
    }

    pub fn respawn_timer(&self) -> f32 {
        self.respawn_timer
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn alive_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| a.is_alive())
    }

    pub fn alive_alien_count(&self) -> usize {
        self.alive_aliens().count()
    }

    pub fn player_shots(&self) -> &[Projectile] {
        &self.player_shots
    }

    pub fn alien_shots(&self) -> &[Projectile] {
        &self.alien_shots
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn formation_direction(&self) -> f32 {
        self.formation_dir
    }

    pub fn formation_speed(&self) -> f32 {
        self.formation_speed
    }

    pub fn alien_fire_timer(&self) -> f32 {
        self.alien_fire_timer
    }

    pub fn alien_fire_cooldown(&self) -> f32 {
        self.alien_fire_cooldown
    }

    pub fn animation_time_ms(&self) -> f32 {
        self.anim_time_ms
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.tuning.canvas.width, self.tuning.canvas.height)
    }
}
