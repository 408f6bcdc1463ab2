//! 2D follow camera
//!
//! The camera is a world-space rectangle the size of the screen. The
//! renderer draws whatever overlaps it, offset by its top-left corner.

use glam::Vec2;

use crate::constants::core::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::physics::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub rect: Rect,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
        }
    }

    /// Centre the view on `target`
    pub fn follow(&mut self, target: &Rect) {
        let center = target.center();
        self.rect.x = center.x - self.rect.width * 0.5;
        self.rect.y = center.y - self.rect.height * 0.5;
    }

    pub fn offset(&self) -> Vec2 {
        self.rect.position()
    }

    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        point - self.offset()
    }

    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        point + self.offset()
    }

    /// `rect` shifted into screen space
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(-self.offset())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_centres_target() {
        let mut camera = Camera::default();
        camera.follow(&Rect::new(500.0, 600.0, 50.0, 150.0));

        assert_eq!(camera.offset(), Vec2::new(25.0, 275.0));
        assert_eq!(camera.rect.center(), Vec2::new(525.0, 675.0));
    }

    #[test]
    fn test_screen_world_inverse() {
        let mut camera = Camera::default();
        camera.follow(&Rect::new(-300.0, 1200.0, 50.0, 50.0));

        let world = Vec2::new(12.0, 900.0);
        assert_eq!(camera.screen_to_world(camera.world_to_screen(world)), world);
        assert_eq!(camera.apply(&Rect::new(12.0, 900.0, 50.0, 50.0)).position(), camera.world_to_screen(world));
    }
}
