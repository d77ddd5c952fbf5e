//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in logical pixel coordinates;
//! [`super::RenderState`] maps them to clip space.

use glam::Vec2;

use super::vertex::Vertex;

/// Width of lines and outlines in logical pixels
pub const LINE_WIDTH: f32 = 1.0;

/// Vertices accumulated for one frame
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Two triangles covering the quad `a b c d` (in winding order)
    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
        for p in [a, b, c, c, d, a] {
            self.vertices.push(Vertex::new(p.x, p.y, color));
        }
    }

    /// Filled axis-aligned rectangle
    pub fn rect(&mut self, min: Vec2, max: Vec2, color: [f32; 4]) {
        self.quad(
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
            color,
        );
    }

    /// Line of `width` centered on the segment `from`-`to`
    ///
    /// Zero-length lines become a `width`-sized dot so a collapsed segment
    /// stays visible.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        let half = width / 2.0;
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO {
            self.rect(from - Vec2::splat(half), from + Vec2::splat(half), color);
            return;
        }

        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * half;
        self.quad(from + perp, to + perp, to - perp, from - perp, color);
    }

    /// Rectangle border of `width`, drawn inside `min`-`max`
    pub fn rect_outline(&mut self, min: Vec2, max: Vec2, width: f32, color: [f32; 4]) {
        let w = width.min((max.x - min.x) / 2.0).min((max.y - min.y) / 2.0);
        // Top and bottom span the full width, sides fill the gap between them
        self.rect(min, Vec2::new(max.x, min.y + w), color);
        self.rect(Vec2::new(min.x, max.y - w), max, color);
        self.rect(Vec2::new(min.x, min.y + w), Vec2::new(min.x + w, max.y - w), color);
        self.rect(Vec2::new(max.x - w, min.y + w), Vec2::new(max.x, max.y - w), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn positions(batch: &ShapeBatch) -> Vec<Vec2> {
        batch
            .vertices()
            .iter()
            .map(|v| Vec2::from(v.position))
            .collect()
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let mut batch = ShapeBatch::new();
        batch.rect(Vec2::new(1.0, 2.0), Vec2::new(11.0, 12.0), WHITE);

        let p = positions(&batch);
        assert_eq!(p.len(), 6);
        assert_eq!(p[0], Vec2::new(1.0, 2.0));
        assert_eq!(p[2], Vec2::new(11.0, 12.0));
        assert_eq!(p[5], p[0]);
        assert!(batch.vertices().iter().all(|v| v.color == WHITE));
    }

    #[test]
    fn test_horizontal_line_thickness() {
        let mut batch = ShapeBatch::new();
        batch.line(Vec2::new(0.0, 32.0), Vec2::new(960.0, 32.0), 1.0, WHITE);

        let p = positions(&batch);
        assert_eq!(p.len(), 6);
        let min_y = p.iter().map(|v| v.y).fold(f32::MAX, f32::min);
        let max_y = p.iter().map(|v| v.y).fold(f32::MIN, f32::max);
        assert!((min_y - 31.5).abs() < 1e-5);
        assert!((max_y - 32.5).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_line_is_a_dot() {
        let mut batch = ShapeBatch::new();
        batch.line(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 2.0, WHITE);

        let p = positions(&batch);
        assert_eq!(p.len(), 6);
        assert_eq!(p[0], Vec2::new(4.0, 4.0));
        assert_eq!(p[2], Vec2::new(6.0, 6.0));
    }

    #[test]
    fn test_outline_stays_inside_rect() {
        let mut batch = ShapeBatch::new();
        batch.rect_outline(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0), 1.0, WHITE);

        let p = positions(&batch);
        assert_eq!(p.len(), 24);
        assert!(p.iter().all(|v| v.x >= 10.0 && v.x <= 20.0 && v.y >= 10.0 && v.y <= 20.0));
        // The center stays empty
        assert!(!p.contains(&Vec2::new(15.0, 15.0)));

        batch.clear();
        assert!(batch.vertices().is_empty());
    }
}
