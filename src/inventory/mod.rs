//! Hotbar inventory
//!
//! Items come from mined blocks and are consumed by placing.

pub mod hotbar;
pub mod item;

pub use hotbar::Hotbar;
pub use item::{ItemKind, ItemStack};
