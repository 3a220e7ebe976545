//! Per-frame simulation step
//!
//! Fixed ordering each frame: player, animation clock, respawn, formation,
//! projectiles, alien fire, explosions, collisions, end conditions.

use glam::Vec2;

use super::entities::{Owner, PLAYER_COLOR, Projectile};
use super::explosion::{ALIEN_BURST, Explosion, PLAYER_BURST};
use super::geometry::{Bounded, intersects};
use super::state::{GamePhase, GameState};

impl GameState {
    /// Advance the simulation by `dt` seconds
    ///
    /// Does nothing unless playing and unpaused. The caller is responsible
    /// for clamping `dt` (see [`crate::consts::MAX_FRAME_DT`]).
    pub fn update(&mut self, dt: f32) {
        if self.phase != GamePhase::Playing || self.paused {
            return;
        }

        let canvas = self.tuning.canvas;
        self.player.update(dt, self.input, canvas.width);
        self.anim_time_ms += dt * 1000.0;
        self.update_respawn(dt);
        self.update_formation(dt);
        self.update_projectiles(dt);
        self.update_alien_fire(dt);
        self.update_explosions(dt);
        self.resolve_collisions();
        self.check_end_conditions();
    }

    fn update_respawn(&mut self, dt: f32) {
        if self.player_visible || self.respawn_timer <= 0.0 {
            return;
        }
        self.respawn_timer = (self.respawn_timer - dt).max(0.0);
        if self.respawn_timer == 0.0 && self.player.lives() > 0 {
            let canvas = self.tuning.canvas;
            self.player
                .reset_position(canvas.width, canvas.height, self.tuning.player.bottom_margin);
            self.player_visible = true;
            log::debug!("Player respawned ({} lives)", self.player.lives());
        }
    }

    /// Slide the formation; bounce and drop on the frame the leading edge
    /// is touched
    fn update_formation(&mut self, dt: f32) {
        let width = self.tuning.canvas.width;
        let dir = self.formation_dir;
        let step = Vec2::new(dir * self.formation_speed * dt, 0.0);

        let mut any_alive = false;
        let mut hit_edge = false;
        for alien in self.aliens.iter_mut().filter(|a| a.is_alive()) {
            any_alive = true;
            alien.translate(step);
            let bounds = alien.bounds();
            // Only the edge we are heading toward counts; aliens still past
            // the edge we just bounced off must not bounce again
            if (dir > 0.0 && bounds.right() >= width) || (dir < 0.0 && bounds.left() <= 0.0) {
                hit_edge = true;
            }
        }

        if any_alive && hit_edge {
            self.formation_dir = -self.formation_dir;
            let drop = Vec2::new(0.0, self.tuning.formation.drop);
            for alien in self.aliens.iter_mut().filter(|a| a.is_alive()) {
                alien.translate(drop);
            }
        }
    }

    fn update_projectiles(&mut self, dt: f32) {
        let height = self.tuning.canvas.height;
        for shot in self.player_shots.iter_mut().chain(self.alien_shots.iter_mut()) {
            shot.update(dt, height);
        }
        self.player_shots.retain(Projectile::is_active);
        self.alien_shots.retain(Projectile::is_active);
    }

    fn update_alien_fire(&mut self, dt: f32) {
        self.alien_fire_timer -= dt * 1000.0;
        if self.alien_fire_timer > 0.0 {
            return;
        }

        let alive = self.alive_alien_count();
        if alive == 0 {
            return;
        }

        let pick = self.rng.pick_index(alive);
        let Some(shooter) = self.aliens.iter().filter(|a| a.is_alive()).nth(pick) else {
            return;
        };

        let p = &self.tuning.projectiles;
        let shot = Projectile::new(
            shooter.gun(p.width),
            Vec2::new(p.width, p.height),
            self.tuning.alien_shot_speed(self.level),
            Owner::Alien,
        );
        self.alien_shots.push(shot);

        self.alien_fire_cooldown = self.tuning.alien_fire_cooldown_ms(self.level);
        self.alien_fire_timer = self.alien_fire_cooldown;
    }

    fn update_explosions(&mut self, dt: f32) {
        for explosion in &mut self.explosions {
            explosion.update(dt);
        }
        self.explosions.retain(|e| !e.is_finished());
    }

    /// Each shot resolves at most one hit per frame
    fn resolve_collisions(&mut self) {
        for shot in self.player_shots.iter_mut().filter(|s| s.is_active()) {
            let Some(alien) = self
                .aliens
                .iter_mut()
                .find(|a| a.is_alive() && intersects(&*shot, &**a))
            else {
                continue;
            };

            shot.deactivate();
            let points = alien.kill();
            self.score += points as u64;
            log::debug!(
                "Alien ({}, {}) destroyed for {} points",
                alien.row(),
                alien.col(),
                points
            );
            self.explosions.push(Explosion::burst(
                alien.bounds().center(),
                &ALIEN_BURST,
                alien.palette().body,
                self.rng.as_mut(),
            ));
        }

        for shot in self.alien_shots.iter_mut().filter(|s| s.is_active()) {
            if !self.player_visible || !intersects(&*shot, &self.player) {
                continue;
            }

            shot.deactivate();
            self.explosions.push(Explosion::burst(
                self.player.bounds().center(),
                &PLAYER_BURST,
                PLAYER_COLOR,
                self.rng.as_mut(),
            ));
            let lives = self.player.lose_life();
            self.player_visible = false;
            self.respawn_timer = self.tuning.player.respawn_secs;
            log::debug!("Player hit, {} lives left", lives);
        }
    }

    fn check_end_conditions(&mut self) {
        let player_top = self.player.pos().y;
        let invaded = self
            .alive_aliens()
            .any(|a| a.bounds().bottom() >= player_top);
        let next = self
            .phase
            .evaluated(self.alive_alien_count(), invaded, self.player.lives());

        if next != self.phase {
            match next {
                GamePhase::Win => log::info!("Level {} cleared, score {}", self.level, self.score),
                GamePhase::GameOver => log::info!(
                    "Game over at level {} (score {}, invaded: {})",
                    self.level,
                    self.score,
                    invaded
                ),
                _ => {}
            }
            self.phase = next;
        }
    }
}
