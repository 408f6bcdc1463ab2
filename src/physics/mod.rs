//! 2D physics: rectangles, bodies and the shared vertical resolver

pub mod aabb;
pub mod body;
pub mod collision;

pub use aabb::Rect;
pub use body::Body;
pub use collision::{fall_damage, step_vertical, CollisionOutcome};
