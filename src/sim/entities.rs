//! Player, alien and projectile entities
//!
//! Each entity owns its own per-frame mutation and knows nothing about the
//! others. Group behavior (formation movement, collisions) lives in
//! `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounded, Rect};
use crate::tuning::{GridTuning, PlayerTuning};
use crate::{Rgba, rgb};

/// Body/eye colors for an alien row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlienPalette {
    pub body: Rgba,
    pub eye: Rgba,
}

/// Row palettes, cycled by row index
pub static ALIEN_PALETTES: [AlienPalette; 5] = [
    AlienPalette { body: rgb(0xff6b6b), eye: rgb(0xffe3e3) },
    AlienPalette { body: rgb(0xffd166), eye: rgb(0xfff4cc) },
    AlienPalette { body: rgb(0x8ce99a), eye: rgb(0xe6ffed) },
    AlienPalette { body: rgb(0x74c0fc), eye: rgb(0xdff1ff) },
    AlienPalette { body: rgb(0xc8b6ff), eye: rgb(0xf1ecff) },
];

/// Number of distinct alien sprite animations
pub const ALIEN_KINDS: u32 = 4;

pub const PLAYER_COLOR: Rgba = rgb(0x55d6be);
pub const PLAYER_COCKPIT_COLOR: Rgba = rgb(0x9df0df);

/// Held movement keys, sampled once per update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// -1, 0 or +1
    pub fn axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pos: Vec2,
    size: Vec2,
    speed: f32,
    cooldown_ms: f32,
    /// Remaining time until the next shot is allowed
    cooldown_left: f32,
    lives: u32,
}

impl Player {
    pub fn new(tuning: &PlayerTuning, canvas_width: f32, canvas_height: f32) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            cooldown_ms: tuning.shot_cooldown_ms,
            cooldown_left: 0.0,
            lives: tuning.start_lives,
        };
        player.reset_position(canvas_width, canvas_height, tuning.bottom_margin);
        player
    }

    /// Center horizontally, sit just above the bottom margin
    pub fn reset_position(&mut self, canvas_width: f32, canvas_height: f32, bottom_margin: f32) {
        self.pos = Vec2::new(
            (canvas_width - self.size.x) / 2.0,
            canvas_height - self.size.y - bottom_margin,
        );
    }

    pub fn update(&mut self, dt: f32, input: MoveInput, canvas_width: f32) {
        self.pos.x += input.axis() * self.speed * dt;
        self.pos.x = self.pos.x.min(canvas_width - self.size.x).max(0.0);
        self.cooldown_left = (self.cooldown_left - dt * 1000.0).max(0.0);
    }

    pub fn can_shoot(&self) -> bool {
        self.cooldown_left <= 0.0
    }

    pub fn trigger_cooldown(&mut self) {
        self.cooldown_left = self.cooldown_ms;
    }

    pub fn clear_cooldown(&mut self) {
        self.cooldown_left = 0.0;
    }

    /// Where a new player shot of the given size appears
    pub fn muzzle(&self, shot_width: f32, shot_height: f32) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2.0 - shot_width / 2.0,
            self.pos.y - shot_height,
        )
    }

    /// Lose a life; returns the lives left
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn cooldown_left(&self) -> f32 {
        self.cooldown_left
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// One member of the formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pos: Vec2,
    size: Vec2,
    row: u32,
    col: u32,
    alive: bool,
    points: u32,
}

impl Alien {
    pub fn new(pos: Vec2, size: Vec2, row: u32, col: u32) -> Self {
        Self {
            pos,
            size,
            row,
            col,
            alive: true,
            points: points_for_row(row),
        }
    }

    /// Formation step (driven by `GameState`)
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Mark destroyed; returns the points earned (0 if already dead)
    pub fn kill(&mut self) -> u32 {
        if !self.alive {
            return 0;
        }
        self.alive = false;
        self.points
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Sprite animation index
    pub fn kind(&self) -> u32 {
        (self.row + self.col) % ALIEN_KINDS
    }

    /// Staggers neighbours by one animation frame
    pub fn animation_offset(&self) -> u32 {
        (self.row + self.col) % 2
    }

    pub fn palette(&self) -> &'static AlienPalette {
        &ALIEN_PALETTES[self.row as usize % ALIEN_PALETTES.len()]
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Spawn point for a shot dropped from the underside
    pub fn gun(&self, shot_width: f32) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2.0 - shot_width / 2.0,
            self.pos.y + self.size.y,
        )
    }
}

impl Bounded for Alien {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Row 0 is worth most, the bottom rows least
pub fn points_for_row(row: u32) -> u32 {
    match row {
        0 => 30,
        1 | 2 => 20,
        _ => 10,
    }
}

/// Build a full, alive formation in row-major order
pub fn create_alien_grid(grid: &GridTuning) -> Vec<Alien> {
    let size = Vec2::new(grid.alien_width, grid.alien_height);
    let mut aliens = Vec::with_capacity((grid.rows * grid.cols) as usize);
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let pos = Vec2::new(
                grid.start_x + col as f32 * (grid.alien_width + grid.gap_x),
                grid.start_y + row as f32 * (grid.alien_height + grid.gap_y),
            );
            aliens.push(Alien::new(pos, size, row, col));
        }
    }
    aliens
}

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Alien,
}

/// A vertical shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pos: Vec2,
    size: Vec2,
    /// Signed vertical speed (negative travels up)
    velocity: f32,
    owner: Owner,
    active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, size: Vec2, velocity: f32, owner: Owner) -> Self {
        Self {
            pos,
            size,
            velocity,
            owner,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32, canvas_height: f32) {
        if !self.active {
            return;
        }
        self.pos.y += self.velocity * dt;
        if self.pos.y + self.size.y < 0.0 || self.pos.y > canvas_height {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(&PlayerTuning::default(), 800.0, 600.0)
    }

    #[test]
    fn test_player_spawn_position() {
        let p = player();
        assert_eq!(p.pos(), Vec2::new(374.0, 552.0));
        assert_eq!(p.lives(), 3);
        assert!(p.can_shoot());
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut p = player();
        let right = MoveInput { left: false, right: true };
        p.update(0.1, right, 800.0);
        assert!((p.pos().x - 416.0).abs() < 1e-3);

        for _ in 0..100 {
            p.update(0.033, right, 800.0);
        }
        assert_eq!(p.pos().x, 800.0 - 52.0);

        let left = MoveInput { left: true, right: false };
        for _ in 0..100 {
            p.update(0.033, left, 800.0);
        }
        assert_eq!(p.pos().x, 0.0);
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut p = player();
        let x = p.pos().x;
        p.update(0.5, MoveInput { left: true, right: true }, 800.0);
        assert_eq!(p.pos().x, x);
    }

    #[test]
    fn test_player_cooldown() {
        let mut p = player();
        p.trigger_cooldown();
        assert!(!p.can_shoot());
        p.update(0.2, MoveInput::default(), 800.0);
        assert!(!p.can_shoot());
        assert!((p.cooldown_left() - 60.0).abs() < 1e-3);
        p.update(0.2, MoveInput::default(), 800.0);
        assert!(p.can_shoot());
        assert_eq!(p.cooldown_left(), 0.0);
    }

    #[test]
    fn test_muzzle_above_ship_center() {
        let p = player();
        assert_eq!(p.muzzle(4.0, 12.0), Vec2::new(374.0 + 26.0 - 2.0, 540.0));
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut p = player();
        assert_eq!(p.lose_life(), 2);
        assert_eq!(p.lose_life(), 1);
        assert_eq!(p.lose_life(), 0);
        assert_eq!(p.lose_life(), 0);
    }

    #[test]
    fn test_points_by_row() {
        assert_eq!(points_for_row(0), 30);
        assert_eq!(points_for_row(1), 20);
        assert_eq!(points_for_row(2), 20);
        assert_eq!(points_for_row(3), 10);
        assert_eq!(points_for_row(4), 10);
        assert_eq!(points_for_row(9), 10);
    }

    #[test]
    fn test_grid_layout() {
        let aliens = create_alien_grid(&GridTuning::default());
        assert_eq!(aliens.len(), 50);
        assert!(aliens.iter().all(Alien::is_alive));

        let first = &aliens[0];
        assert_eq!((first.row(), first.col()), (0, 0));
        assert_eq!(first.pos(), Vec2::new(90.0, 80.0));

        let last = &aliens[49];
        assert_eq!((last.row(), last.col()), (4, 9));
        assert_eq!(last.pos(), Vec2::new(90.0 + 9.0 * 52.0, 80.0 + 4.0 * 38.0));
        assert_eq!(last.points(), 10);
    }

    #[test]
    fn test_alien_kind_and_palette() {
        let a = Alien::new(Vec2::ZERO, Vec2::new(36.0, 24.0), 2, 3);
        assert_eq!(a.kind(), 1);
        assert_eq!(a.animation_offset(), 1);
        assert_eq!(a.palette(), &ALIEN_PALETTES[2]);

        let b = Alien::new(Vec2::ZERO, Vec2::new(36.0, 24.0), 6, 0);
        assert_eq!(b.palette(), &ALIEN_PALETTES[1]);
    }

    #[test]
    fn test_alien_kill_once() {
        let mut a = Alien::new(Vec2::ZERO, Vec2::new(36.0, 24.0), 0, 0);
        assert_eq!(a.kill(), 30);
        assert!(!a.is_alive());
        assert_eq!(a.kill(), 0);
        assert_eq!(a.points(), 30);
    }

    #[test]
    fn test_alien_gun_below_center() {
        let a = Alien::new(Vec2::new(100.0, 50.0), Vec2::new(36.0, 24.0), 0, 0);
        assert_eq!(a.gun(4.0), Vec2::new(116.0, 74.0));
    }

    #[test]
    fn test_projectile_leaves_top() {
        let size = Vec2::new(4.0, 12.0);
        let mut shot = Projectile::new(Vec2::new(10.0, 5.0), size, -520.0, Owner::Player);
        shot.update(0.01, 600.0);
        assert!(shot.is_active());
        shot.update(0.033, 600.0);
        assert!(!shot.is_active());
    }

    #[test]
    fn test_projectile_leaves_bottom() {
        let size = Vec2::new(4.0, 12.0);
        let mut shot = Projectile::new(Vec2::new(10.0, 590.0), size, 300.0, Owner::Alien);
        shot.update(0.01, 600.0);
        assert!(shot.is_active());
        shot.update(0.05, 600.0);
        assert!(!shot.is_active());
        let y = shot.pos().y;
        // Inactive projectiles are frozen
        shot.update(0.5, 600.0);
        assert_eq!(shot.pos().y, y);
        assert!(!shot.is_active());
    }

    #[test]
    fn test_projectile_on_edge_stays_active() {
        let size = Vec2::new(4.0, 12.0);
        let mut shot_top = Projectile::new(Vec2::new(0.0, -12.0), size, 0.0, Owner::Player);
        shot_top.update(0.016, 600.0);
        assert!(shot_top.is_active());

        let mut shot_bottom = Projectile::new(Vec2::new(0.0, 600.0), size, 0.0, Owner::Alien);
        shot_bottom.update(0.016, 600.0);
        assert!(shot_bottom.is_active());
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            steps in prop::collection::vec((0.0f32..0.1, any::<bool>(), any::<bool>()), 1..200)
        ) {
            let mut p = player();
            for (dt, left, right) in steps {
                p.update(dt, MoveInput { left, right }, 800.0);
                prop_assert!(p.pos().x >= 0.0);
                prop_assert!(p.pos().x <= 800.0 - 52.0);
            }
        }

        #[test]
        fn prop_projectile_deactivates_once(
            y in -20.0f32..620.0,
            velocity in -600.0f32..600.0,
            dts in prop::collection::vec(0.0f32..0.05, 1..100)
        ) {
            let mut shot = Projectile::new(Vec2::new(0.0, y), Vec2::new(4.0, 12.0), velocity, Owner::Player);
            let mut was_active = shot.is_active();
            let mut transitions = 0;
            for dt in dts {
                shot.update(dt, 600.0);
                if was_active && !shot.is_active() {
                    transitions += 1;
                }
                prop_assert!(was_active || !shot.is_active());
                was_active = shot.is_active();
            }
            prop_assert!(transitions <= 1);
        }
    }
}
