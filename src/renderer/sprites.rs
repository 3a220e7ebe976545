//! Pixel-art sprite tables
//!
//! Each sprite row is a string of digits: `0` empty, `1` body color,
//! `2` accent (eyes / cockpit).

use glam::Vec2;

use super::shapes::DrawSurface;
use crate::Rgba;
use crate::sim::Rect;

/// Milliseconds per animation frame at rate 1.0
pub const FRAME_MS: f32 = 220.0;

pub const ALIEN_SCALE: f32 = 3.0;
pub const PLAYER_SCALE: f32 = 4.0;

pub type Sprite = [&'static str];

#[derive(Debug, Clone, Copy)]
pub struct AlienAnimation {
    /// Speed multiplier for frame advance
    pub rate: f32,
    pub frames: [&'static Sprite; 2],
}

pub static ALIEN_ANIMATIONS: [AlienAnimation; 4] = [
    AlienAnimation {
        rate: 1.0,
        frames: [
            &[
                "000011110000",
                "001111111100",
                "011121112110",
                "111111111111",
                "001111111100",
                "011011110110",
                "110110011011",
                "100000000001",
            ],
            &[
                "000011110000",
                "001111111100",
                "011121112110",
                "111111111111",
                "001111111100",
                "110011110011",
                "011110011110",
                "000000000000",
            ],
        ],
    },
    AlienAnimation {
        rate: 0.8,
        frames: [
            &[
                "001100001100",
                "011111111110",
                "111211112111",
                "111111111111",
                "111100001111",
                "011000000110",
                "001100001100",
                "010010010010",
            ],
            &[
                "001100001100",
                "011111111110",
                "111211112111",
                "111111111111",
                "111100001111",
                "001000000100",
                "010100001010",
                "100010010001",
            ],
        ],
    },
    AlienAnimation {
        rate: 1.25,
        frames: [
            &[
                "000111111000",
                "011111111110",
                "111111111111",
                "112211112211",
                "111111111111",
                "001111111100",
                "011001100110",
                "110000000011",
            ],
            &[
                "000111111000",
                "011111111110",
                "111111111111",
                "112211112211",
                "111111111111",
                "001111111100",
                "110001100011",
                "001100001100",
            ],
        ],
    },
    AlienAnimation {
        rate: 0.65,
        frames: [
            &[
                "011111111110",
                "111111111111",
                "112222222211",
                "111111111111",
                "001111111100",
                "011100001110",
                "110010010011",
                "000110011000",
            ],
            &[
                "011111111110",
                "111111111111",
                "112222222211",
                "111111111111",
                "001111111100",
                "001110011100",
                "011001100110",
                "110000000011",
            ],
        ],
    },
];

pub static PLAYER_SHIP: &Sprite = &[
    "0000011100000",
    "0001111111000",
    "0011111111100",
    "0111122221110",
    "1111222222111",
    "1111222222111",
    "1101100001011",
];

impl AlienAnimation {
    pub fn for_kind(kind: u32) -> &'static AlienAnimation {
        &ALIEN_ANIMATIONS[kind as usize % ALIEN_ANIMATIONS.len()]
    }

    /// Frame index for the shared animation clock
    pub fn frame_index(&self, animation_time_ms: f32, offset: u32) -> usize {
        let step = (animation_time_ms * self.rate / FRAME_MS).floor().max(0.0) as usize;
        (step + offset as usize) % self.frames.len()
    }

    pub fn frame(&self, animation_time_ms: f32, offset: u32) -> &'static Sprite {
        self.frames[self.frame_index(animation_time_ms, offset)]
    }
}

/// Blit a sprite as one square per lit pixel
pub fn draw_sprite(
    surface: &mut dyn DrawSurface,
    sprite: &Sprite,
    origin: Vec2,
    scale: f32,
    body: Rgba,
    accent: Rgba,
) {
    for (row, line) in sprite.iter().enumerate() {
        for (col, pixel) in line.bytes().enumerate() {
            let color = match pixel {
                b'1' => body,
                b'2' => accent,
                _ => continue,
            };
            surface.fill_rect(
                Rect::new(
                    origin.x + col as f32 * scale,
                    origin.y + row as f32 * scale,
                    scale,
                    scale,
                ),
                color,
            );
        }
    }
}
