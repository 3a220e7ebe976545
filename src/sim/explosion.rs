//! Particle bursts spawned when something is destroyed
//!
//! Purely visual: explosions never affect gameplay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::Rgba;

/// A single spark moving at constant velocity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Shape of a burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    pub particles: usize,
    /// Lifetime in seconds
    pub life: f32,
    pub min_speed: f32,
    /// Random extra speed on top of `min_speed`
    pub speed_spread: f32,
    /// Half-width of the random offset around the center
    pub jitter: f32,
}

/// Burst for a destroyed alien
pub const ALIEN_BURST: BurstSpec = BurstSpec {
    particles: 20,
    life: 0.5,
    min_speed: 80.0,
    speed_spread: 130.0,
    jitter: 5.0,
};

/// Burst for the player's ship
pub const PLAYER_BURST: BurstSpec = BurstSpec {
    particles: 24,
    life: 0.55,
    min_speed: 85.0,
    speed_spread: 140.0,
    jitter: 6.0,
};

/// Square particle edge length in pixels
pub const PARTICLE_SIZE: f32 = 3.0;

/// A fading ring of particles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    life: f32,
    max_life: f32,
    color: Rgba,
    particles: Vec<Particle>,
}

impl Explosion {
    /// Evenly spaced directions, random speed and start jitter per particle
    pub fn burst(center: Vec2, spec: &BurstSpec, color: Rgba, rng: &mut dyn RandomSource) -> Self {
        let particles = (0..spec.particles)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / spec.particles as f32;
                let speed = spec.min_speed + rng.next_f32() * spec.speed_spread;
                let jitter_x = rng.range(-spec.jitter, spec.jitter);
                let jitter_y = rng.range(-spec.jitter, spec.jitter);
                Particle {
                    pos: center + Vec2::new(jitter_x, jitter_y),
                    vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                }
            })
            .collect();

        Self {
            life: spec.life,
            max_life: spec.life,
            color,
            particles,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.life -= dt;
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.life <= 0.0
    }

    /// Fade factor in `0..=1`
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRandom;

    #[test]
    fn test_burst_shape() {
        let mut rng = SequenceRandom::constant(0.5);
        let center = Vec2::new(100.0, 100.0);
        let e = Explosion::burst(center, &ALIEN_BURST, [1.0, 0.0, 0.0, 1.0], &mut rng);

        assert_eq!(e.particles().len(), 20);
        assert_eq!(e.life(), 0.5);
        assert_eq!(e.alpha(), 1.0);
        // r = 0.5 puts every particle on the center with speed 145
        for p in e.particles() {
            assert_eq!(p.pos, center);
            assert!((p.vel.length() - 145.0).abs() < 1e-3);
        }
        // First particle heads right
        assert!(e.particles()[0].vel.x > 0.0);
        assert!(e.particles()[0].vel.y.abs() < 1e-3);
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = SequenceRandom::new(vec![0.0, 0.0, 0.999]);
        let e = Explosion::burst(Vec2::ZERO, &PLAYER_BURST, [1.0; 4], &mut rng);
        assert_eq!(e.particles().len(), 24);
        for p in e.particles() {
            assert!(p.pos.x.abs() <= 6.0 && p.pos.y.abs() <= 6.0);
        }
    }

    #[test]
    fn test_decay_and_finish() {
        let mut rng = SequenceRandom::constant(0.0);
        let mut e = Explosion::burst(Vec2::ZERO, &ALIEN_BURST, [1.0; 4], &mut rng);
        let start = e.particles()[0].pos;

        e.update(0.25);
        assert!(!e.is_finished());
        assert!((e.alpha() - 0.5).abs() < 1e-5);
        // 80 px/s to the right for a quarter second
        assert!((e.particles()[0].pos.x - (start.x + 20.0)).abs() < 1e-3);

        e.update(0.25);
        assert!(e.is_finished());
        assert_eq!(e.alpha(), 0.0);
    }
}
