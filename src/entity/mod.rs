//! Player and mobs
//!
//! Mobs live in one registry with a species tag. They share the physics
//! body and hit-response, and differ only in their brain.

pub mod kind;
pub mod knockback;
pub mod mob;
pub mod player;
pub mod registry;

pub use kind::{EntityKind, MobProfile};
pub use knockback::Knockback;
pub use mob::{CreeperState, Mob, MobAction, MobBrain, PassiveState, Target, WanderMode};
pub use player::Player;
pub use registry::{EntityId, EntityRegistry};
