//! Shape generation for 2D primitives
//!
//! Everything on screen is an axis-aligned rectangle or a text label, so the
//! scene is described through [`DrawSurface`] and batched into triangles by
//! [`QuadBatch`].

use glam::Vec2;

use super::vertex::Vertex;
use crate::Rgba;
use crate::sim::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub bold: bool,
    pub align: TextAlign,
    pub color: Rgba,
}

/// Anything the scene can be drawn onto
pub trait DrawSurface {
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// `pos` is the text baseline origin (left edge or center, per `style.align`)
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: Rect, color: Rgba) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// A text draw recorded for a text-capable backend (DOM, canvas overlay)
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub style: TextStyle,
}

/// Collects a frame's rectangles as triangle-list vertices
#[derive(Debug, Default)]
pub struct QuadBatch {
    clear_color: Option<Rgba>,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(quads: usize) -> Self {
        Self {
            clear_color: None,
            vertices: Vec::with_capacity(quads * 6),
            labels: Vec::new(),
        }
    }

    /// Drop last frame's contents, keeping allocations
    pub fn reset(&mut self) {
        self.clear_color = None;
        self.vertices.clear();
        self.labels.clear();
    }

    pub fn clear_color(&self) -> Option<Rgba> {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

impl DrawSurface for QuadBatch {
    fn clear(&mut self, color: Rgba) {
        self.reset();
        self.clear_color = Some(color);
    }

    fn fill_rect(&mut self, r: Rect, color: Rgba) {
        // Fully transparent or empty rects contribute nothing
        if color[3] <= 0.0 || r.size.x <= 0.0 || r.size.y <= 0.0 {
            return;
        }
        self.vertices.extend_from_slice(&rect(r, color));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.labels.push(TextLabel {
            text: text.to_owned(),
            pos,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let verts = rect(Rect::new(10.0, 20.0, 4.0, 12.0), WHITE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 14.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 32.0);
    }

    #[test]
    fn test_batch_skips_invisible() {
        let mut batch = QuadBatch::new();
        batch.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), [1.0, 0.0, 0.0, 0.0]);
        batch.fill_rect(Rect::new(0.0, 0.0, 0.0, 5.0), WHITE);
        assert_eq!(batch.quad_count(), 0);

        batch.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), WHITE);
        assert_eq!(batch.quad_count(), 1);
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut batch = QuadBatch::with_capacity(4);
        batch.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), WHITE);
        batch.fill_text(
            "hi",
            Vec2::ZERO,
            TextStyle {
                size: 10.0,
                bold: false,
                align: TextAlign::Left,
                color: WHITE,
            },
        );

        batch.clear([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(batch.quad_count(), 0);
        assert!(batch.labels().is_empty());
        assert_eq!(batch.clear_color(), Some([0.0, 0.0, 0.0, 1.0]));
    }
}
