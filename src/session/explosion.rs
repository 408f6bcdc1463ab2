use glam::Vec2;
use rand::Rng;

use crate::constants::combat::{EXPLOSION_POWER, EXPLOSION_RADIUS};
use crate::constants::particles::{EXPLOSION_BURST, EXPLOSION_COLOR};
use crate::entity::Player;
use crate::particles::burst;
use crate::world::World;

/// Damage at `distance` from the blast centre; zero at or beyond the radius
pub fn explosion_damage(distance: f32) -> f32 {
    if distance >= EXPLOSION_RADIUS {
        return 0.0;
    }
    EXPLOSION_POWER * (1.0 - distance / EXPLOSION_RADIUS)
}

/// Blow up at `center`.
///
/// Hurts the player by distance and removes every breakable block whose
/// centre lies inside the blast radius. Returns `(damage dealt, blocks
/// destroyed)`.
pub fn detonate<R: Rng + ?Sized>(world: &mut World, player: &mut Player, center: Vec2, rng: &mut R) -> (f32, usize) {
    world.add_particles(burst(center, EXPLOSION_COLOR, EXPLOSION_BURST, rng));

    let damage = explosion_damage(center.distance(player.center()));
    if damage > 0.0 {
        player.take_damage(damage, center.x);
    }

    let doomed: Vec<_> = world
        .query(center, EXPLOSION_RADIUS)
        .into_iter()
        .filter(|b| !b.kind.is_unbreakable() && b.rect().center().distance(center) < EXPLOSION_RADIUS)
        .map(|b| b.id)
        .collect();
    for id in &doomed {
        world.remove_block(*id);
    }

    log::debug!(
        "Explosion at {:?}: {:.2} damage, {} blocks destroyed",
        center,
        damage,
        doomed.len()
    );
    (damage, doomed.len())
}
