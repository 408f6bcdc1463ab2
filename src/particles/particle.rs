use glam::Vec2;
use rand::Rng;

use crate::constants::particles::{BURST_SPREAD, PARTICLE_DRIFT};

/// Decorative particle; has no effect on the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in world space
    pub position: Vec2,
    /// Velocity per tick
    pub velocity: Vec2,
    /// Color (RGB)
    pub color: [u8; 3],
    /// Radius in world units
    pub size: f32,
    /// Remaining lifetime in ticks
    pub lifetime: u32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: [u8; 3], size: f32, lifetime: u32) -> Self {
        Self {
            position,
            velocity,
            color,
            size,
            lifetime,
        }
    }

    /// Random debris particle scattered around `center`
    pub fn debris<R: Rng + ?Sized>(center: Vec2, color: [u8; 3], rng: &mut R) -> Self {
        let offset = Vec2::new(
            rng.gen_range(-BURST_SPREAD..=BURST_SPREAD) as f32,
            rng.gen_range(-BURST_SPREAD..=BURST_SPREAD) as f32,
        );
        let velocity = Vec2::new(rng.gen_range(-2.0..=2.0), rng.gen_range(-5.0..=-1.0));

        Self::new(
            center + offset,
            velocity,
            color,
            rng.gen_range(2..=5) as f32,
            rng.gen_range(20..=40),
        )
    }

    /// Advance one tick; returns whether the particle is still alive
    pub fn update(&mut self) -> bool {
        self.position += self.velocity;
        self.velocity.y += PARTICLE_DRIFT;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}

/// A burst of `count` debris particles
pub fn burst<R: Rng + ?Sized>(center: Vec2, color: [u8; 3], count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::debris(center, color, rng)).collect()
}
