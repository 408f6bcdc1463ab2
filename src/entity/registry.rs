use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{EntityKind, Mob};

/// Unique mob identifier; never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Every live mob, in spawn order
#[derive(Debug, Default)]
pub struct EntityRegistry {
    mobs: Vec<Mob>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mob with its top-left corner at `position`
    pub fn spawn(&mut self, kind: EntityKind, position: Vec2) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        self.mobs.push(Mob::new(id, kind, position));
        log::debug!("Spawned {} {:?} at {:?}", kind, id, position);
        id
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.mobs.iter().filter(|m| m.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.mobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mob> {
        self.mobs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Mob> {
        self.mobs.iter_mut()
    }

    pub fn get(&self, id: EntityId) -> Option<&Mob> {
        self.mobs.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Mob> {
        self.mobs.iter_mut().find(|m| m.id == id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Mob> {
        let index = self.mobs.iter().position(|m| m.id == id)?;
        Some(self.mobs.remove(index))
    }

    /// Drop every mob whose kind matches; returns how many were removed
    pub fn clear_kinds(&mut self, mut predicate: impl FnMut(EntityKind) -> bool) -> usize {
        let before = self.mobs.len();
        self.mobs.retain(|m| !predicate(m.kind));
        before - self.mobs.len()
    }

    /// Sweep out dead mobs; returns how many were removed
    pub fn retain_alive(&mut self) -> usize {
        let before = self.mobs.len();
        self.mobs.retain(|m| !m.is_dead());
        before - self.mobs.len()
    }

    /// Topmost mob (latest spawned) whose box contains `point`
    pub fn mob_at(&self, point: Vec2) -> Option<EntityId> {
        self.mobs
            .iter()
            .rev()
            .find(|m| m.rect().contains_point(point))
            .map(|m| m.id)
    }

    pub fn clear(&mut self) {
        self.mobs.clear();
    }
}
