//! Axis-aligned rectangle in world space
//!
//! Positions are top-left corners; y grows downward, so `top() < bottom()`.
//! Overlap is strict: rectangles that only share an edge do not intersect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box - pure data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from a top-left position and a size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Build a rectangle of `size` centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Distance between the centres of two rectangles
    pub fn center_distance(&self, other: &Rect) -> f32 {
        self.center().distance(other.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_touching_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.0, 0.0, 50.0, 50.0);
        let c = Rect::new(0.0, 50.0, 50.0, 50.0);

        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&a.translated(Vec2::new(49.0, 49.0))));
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(100.0, 200.0, 50.0, 50.0);
        assert!(r.contains_point(Vec2::new(100.0, 200.0)));
        assert!(r.contains_point(Vec2::new(149.9, 249.9)));
        assert!(!r.contains_point(Vec2::new(150.0, 220.0)));
        assert!(!r.contains_point(Vec2::new(120.0, 250.0)));
    }

    #[test]
    fn test_center_and_from_center() {
        let r = Rect::from_center(Vec2::new(25.0, 75.0), Vec2::new(50.0, 150.0));
        assert_eq!(r.position(), Vec2::new(0.0, 0.0));
        assert_eq!(r.center(), Vec2::new(25.0, 75.0));
        assert_eq!(r.bottom(), 150.0);
    }
}
