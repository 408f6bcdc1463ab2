use glam::Vec2;
use rand::Rng;

use crate::constants::particles::MINE_BURST;
use crate::entity::Player;
use crate::particles::burst;
use crate::world::{BlockId, GridPos, World};

/// Result of one mining frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MiningOutcome {
    /// Nothing targeted (button up, or no block in reach under the cursor)
    Idle,
    /// Still working on `block`; `fraction` of its health is done
    Progress { block: BlockId, fraction: f32 },
    /// Cursor is on an unbreakable block
    Immune { block: BlockId },
    /// `block` has taken enough damage to break
    Completed { block: BlockId },
}

/// Progress on the currently targeted block
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MiningState {
    pub target: Option<BlockId>,
    pub progress: f32,
}

impl MiningState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.target = None;
        self.progress = 0.0;
    }

    /// Advance one frame.
    ///
    /// Progress grows by `speed` while the button is held on the same block
    /// and restarts from zero when the target changes. Releasing the button
    /// or leaving reach clears it. Completion resets the state; removing the
    /// block is the caller's job.
    pub fn update(
        &mut self,
        held: bool,
        cursor: Vec2,
        player_center: Vec2,
        world: &World,
        speed: f32,
        max_distance: f32,
    ) -> MiningOutcome {
        if !held {
            self.reset();
            return MiningOutcome::Idle;
        }

        let block = match world.block_at(GridPos::from_world(cursor)) {
            Some(block) if block.rect().center().distance(player_center) <= max_distance => *block,
            _ => {
                self.reset();
                return MiningOutcome::Idle;
            }
        };

        if self.target != Some(block.id) {
            self.target = Some(block.id);
            self.progress = 0.0;
        }

        if block.kind.is_unbreakable() {
            return MiningOutcome::Immune { block: block.id };
        }

        self.progress += speed;
        let max_health = block.max_health();
        if self.progress >= max_health {
            self.reset();
            return MiningOutcome::Completed { block: block.id };
        }

        MiningOutcome::Progress {
            block: block.id,
            fraction: self.progress / max_health,
        }
    }

    /// Target and completed fraction for the progress-bar overlay
    pub fn fraction(&self, world: &World) -> Option<(BlockId, f32)> {
        let id = self.target?;
        let block = world.block(id)?;
        if block.kind.is_unbreakable() {
            return None;
        }
        Some((id, (self.progress / block.max_health()).clamp(0.0, 1.0)))
    }
}

/// Run one mining frame for `player` and apply a completed break.
///
/// A broken block is removed, bursts into particles of its colour and drops
/// one item into the hotbar. A full hotbar loses the item.
pub fn mine_tick<R: Rng + ?Sized>(
    player: &mut Player,
    held: bool,
    cursor: Vec2,
    world: &mut World,
    speed: f32,
    max_distance: f32,
    rng: &mut R,
) -> MiningOutcome {
    let center = player.center();
    let outcome = player
        .mining
        .update(held, cursor, center, world, speed, max_distance);

    if let MiningOutcome::Completed { block } = outcome {
        if let Some(broken) = world.remove_block(block) {
            let color = broken.kind.color();
            world.add_particles(burst(broken.rect().center(), color, MINE_BURST, rng));

            if let Some(item) = broken.kind.drop() {
                if !player.hotbar.add_item(item) {
                    log::warn!("Hotbar full, dropped {}", item.name());
                }
            }
            log::debug!("Mined {} at {:?}", broken.kind.name(), broken.position);
        }
    }

    outcome
}
