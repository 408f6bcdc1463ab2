//! Shared gravity integration and vertical collision resolution
//!
//! One function serves the player and every mob. It is invoked once per tick
//! with the blocks returned by a proximity query; candidates are scanned in
//! query order and the first overlapping block wins, which is not necessarily
//! the closest one.

use super::Body;
use crate::constants::physics_constants::{FALL_DAMAGE_FACTOR, GRAVITY};
use crate::world::Block;

/// What happened to a body during one vertical step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Landed on a block top this tick
    pub grounded: bool,
    /// Bumped a block bottom while rising
    pub ceiling_hit: bool,
    /// Damage from landing faster than the safe-fall threshold
    pub fall_damage: f32,
}

/// Fall damage for a landing at `velocity`
pub fn fall_damage(velocity: f32, safe_fall: f32) -> f32 {
    if velocity > safe_fall {
        (velocity - safe_fall) * FALL_DAMAGE_FACTOR
    } else {
        0.0
    }
}

/// Advance `body` by one tick of gravity and resolve against `blocks`.
///
/// Velocity is integrated before position, so a body resting on a block sinks
/// by one gravity step and is snapped back, staying grounded every tick.
/// Horizontal overlap is never resolved sideways.
pub fn step_vertical(body: &mut Body, blocks: &[Block]) -> CollisionOutcome {
    body.velocity_y += GRAVITY;
    if let Some(cap) = body.terminal_velocity {
        body.velocity_y = body.velocity_y.min(cap);
    }
    body.position.y += body.velocity_y;
    body.grounded = false;

    let mut outcome = CollisionOutcome::default();
    let rect = body.rect();

    for block in blocks {
        let block_rect = block.rect();
        if !rect.intersects(&block_rect) {
            continue;
        }

        if body.velocity_y >= 0.0 && rect.bottom() > block_rect.top() {
            outcome.fall_damage = fall_damage(body.velocity_y, body.safe_fall);
            outcome.grounded = true;
            body.position.y = block_rect.top() - body.size.y;
            body.velocity_y = 0.0;
            body.grounded = true;
            break;
        } else if body.velocity_y < 0.0 && rect.top() < block_rect.bottom() {
            outcome.ceiling_hit = true;
            body.position.y = block_rect.bottom();
            body.velocity_y = 0.0;
            break;
        }
    }

    outcome
}
