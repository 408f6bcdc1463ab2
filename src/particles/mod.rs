//! Decorative particles for block breaks and explosions

pub mod particle;

pub use particle::{burst, Particle};
