//! Kinematic state shared by the player and every mob

use glam::Vec2;

use super::Rect;

/// Vertical-physics body.
///
/// `position` is the top-left corner of the bounding box. Horizontal motion is
/// applied directly by input or AI; only the vertical axis is integrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity_y: f32,
    pub size: Vec2,
    /// Landing speed above which fall damage is dealt
    pub safe_fall: f32,
    /// Optional fall speed cap (players have none)
    pub terminal_velocity: Option<f32>,
    pub grounded: bool,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2, safe_fall: f32, terminal_velocity: Option<f32>) -> Self {
        Self {
            position,
            velocity_y: 0.0,
            size,
            safe_fall,
            terminal_velocity,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Shift horizontally; never blocked by terrain
    pub fn move_horizontal(&mut self, dx: f32) {
        self.position.x += dx;
    }

    /// Is the body travelling upward
    pub fn is_rising(&self) -> bool {
        self.velocity_y < 0.0
    }
}
