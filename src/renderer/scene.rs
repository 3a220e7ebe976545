//! Draws a full frame of the game onto a [`DrawSurface`]

use super::shapes::DrawSurface;
use super::sprites::{ALIEN_SCALE, AlienAnimation, PLAYER_SCALE, PLAYER_SHIP, draw_sprite};
use super::vertex::colors;
use crate::consts::BACKGROUND_GRID_STEP;
use crate::sim::{
    Bounded, GameState, Owner, PARTICLE_SIZE, PLAYER_COCKPIT_COLOR, PLAYER_COLOR, Projectile, Rect,
};
use crate::ui::{HudInfo, draw_hud};
use crate::with_alpha;

/// Render the current snapshot. Reads state only.
pub fn draw_scene(state: &GameState, surface: &mut dyn DrawSurface) {
    let canvas = state.canvas_size();

    surface.clear(colors::BACKGROUND);
    draw_background_grid(surface, canvas.x, canvas.y);

    let time_ms = state.animation_time_ms();
    for alien in state.alive_aliens() {
        let palette = alien.palette();
        let frame =
            AlienAnimation::for_kind(alien.kind()).frame(time_ms, alien.animation_offset());
        draw_sprite(
            surface,
            frame,
            alien.pos(),
            ALIEN_SCALE,
            palette.body,
            palette.eye,
        );
    }

    if state.is_player_visible() {
        draw_sprite(
            surface,
            PLAYER_SHIP,
            state.player().pos(),
            PLAYER_SCALE,
            PLAYER_COLOR,
            PLAYER_COCKPIT_COLOR,
        );
    }

    for shot in state.player_shots().iter().chain(state.alien_shots()) {
        draw_projectile(surface, shot);
    }

    for explosion in state.explosions() {
        let color = with_alpha(explosion.color(), explosion.alpha());
        for particle in explosion.particles() {
            surface.fill_rect(
                Rect::new(particle.pos.x, particle.pos.y, PARTICLE_SIZE, PARTICLE_SIZE),
                color,
            );
        }
    }

    draw_hud(surface, &HudInfo::from_state(state));
}

fn draw_background_grid(surface: &mut dyn DrawSurface, width: f32, height: f32) {
    let mut x = 0.0;
    while x < width {
        surface.fill_rect(Rect::new(x, 0.0, 1.0, height), colors::GRID_LINE);
        x += BACKGROUND_GRID_STEP;
    }
    let mut y = 0.0;
    while y < height {
        surface.fill_rect(Rect::new(0.0, y, width, 1.0), colors::GRID_LINE);
        y += BACKGROUND_GRID_STEP;
    }
}

fn draw_projectile(surface: &mut dyn DrawSurface, shot: &Projectile) {
    if !shot.is_active() {
        return;
    }
    let color = match shot.owner() {
        Owner::Player => colors::PLAYER_SHOT,
        Owner::Alien => colors::ALIEN_SHOT,
    };
    surface.fill_rect(shot.bounds(), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::renderer::QuadBatch;
    use crate::sim::GamePhase;

    fn grid_quads() -> usize {
        // 800 / 32 = 25 columns, 600 / 32 -> 19 rows
        25 + 19
    }

    fn lit_pixels(sprite: &[&str]) -> usize {
        sprite
            .iter()
            .flat_map(|row| row.bytes())
            .filter(|&b| b != b'0')
            .count()
    }

    #[test]
    fn test_start_screen_frame() {
        let state = GameState::with_seed(Tuning::default(), 7);
        let mut batch = QuadBatch::new();
        draw_scene(&state, &mut batch);

        assert_eq!(batch.clear_color(), Some(colors::BACKGROUND));

        let alien_pixels: usize = state
            .aliens()
            .iter()
            .map(|a| lit_pixels(AlienAnimation::for_kind(a.kind()).frame(0.0, a.animation_offset())))
            .sum();
        let player_pixels = lit_pixels(PLAYER_SHIP);
        // Grid, aliens, player, then the dimming overlay
        assert_eq!(
            batch.quad_count(),
            grid_quads() + alien_pixels + player_pixels + 1
        );

        let titles: Vec<&str> = batch.labels().iter().map(|l| l.text.as_str()).collect();
        assert!(titles.contains(&"SPACE INVADERS"));
        assert!(titles.contains(&"Score: 0"));
    }

    #[test]
    fn test_playing_frame_draws_shots() {
        let mut state = GameState::with_seed(Tuning::default(), 7);
        state.start_game();
        assert_eq!(state.phase(), GamePhase::Playing);

        let mut before = QuadBatch::new();
        draw_scene(&state, &mut before);

        state.fire();
        let mut after = QuadBatch::new();
        draw_scene(&state, &mut after);

        assert_eq!(after.quad_count(), before.quad_count() + 1);
        assert!(
            after
                .vertices()
                .iter()
                .any(|v| v.color == colors::PLAYER_SHOT)
        );
        // No overlay while playing
        assert_eq!(after.labels().len(), 3);
    }

    #[test]
    fn test_dead_aliens_not_drawn() {
        let mut state = GameState::with_seed(Tuning::default(), 7);
        let mut full = QuadBatch::new();
        draw_scene(&state, &mut full);

        let killed = &mut state.aliens[0];
        let sprite = AlienAnimation::for_kind(killed.kind()).frame(0.0, killed.animation_offset());
        let pixels = lit_pixels(sprite);
        killed.kill();

        let mut fewer = QuadBatch::new();
        draw_scene(&state, &mut fewer);
        assert_eq!(fewer.quad_count(), full.quad_count() - pixels);
    }
}
