use crate::constants::combat::{KNOCKBACK_CUTOFF, KNOCKBACK_RESISTANCE, KNOCKBACK_STRENGTH};

/// Decaying horizontal impulse applied after taking damage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knockback {
    pub strength: f32,
    /// +1 pushes right, -1 pushes left
    pub direction: f32,
    pub resistance: f32,
}

impl Knockback {
    pub fn new() -> Self {
        Self {
            strength: 0.0,
            direction: 1.0,
            resistance: KNOCKBACK_RESISTANCE,
        }
    }

    /// Start a fresh impulse, replacing any remaining one
    pub fn apply(&mut self, direction: f32) {
        self.strength = KNOCKBACK_STRENGTH;
        self.direction = direction.signum();
    }

    /// Start an impulse pushing away from an attacker at `source_x`
    pub fn apply_from(&mut self, source_x: f32, center_x: f32) {
        self.apply(if source_x < center_x { 1.0 } else { -1.0 });
    }

    /// Horizontal displacement for this tick, then decay.
    ///
    /// Strength snaps to exactly zero once it drops below the cutoff.
    pub fn tick(&mut self) -> f32 {
        if !self.is_active() {
            return 0.0;
        }

        let displacement = self.direction * self.strength;
        self.strength *= self.resistance;
        if self.strength < KNOCKBACK_CUTOFF {
            self.strength = 0.0;
        }
        displacement
    }

    pub fn is_active(&self) -> bool {
        self.strength > 0.0
    }
}

impl Default for Knockback {
    fn default() -> Self {
        Self::new()
    }
}
