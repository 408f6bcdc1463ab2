use serde::{Deserialize, Serialize};

use crate::constants::physics_constants::DEFAULT_SAFE_FALL;

/// Mob species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Zombie,
    Spider,
    Creeper,
    Pig,
    Sheep,
}

/// Static per-species tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobProfile {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub max_health: f32,
    pub safe_fall: f32,
    /// Damage per successful contact hit; zero for mobs that never attack
    pub contact_damage: f32,
    /// Frames between contact hits
    pub attack_delay: u32,
    /// Spawns at night when true, during the day otherwise
    pub hostile: bool,
}

const ZOMBIE: MobProfile = MobProfile {
    name: "zombie",
    width: 50.0,
    height: 150.0,
    speed: 1.5,
    max_health: 10.0,
    safe_fall: DEFAULT_SAFE_FALL,
    contact_damage: 1.0,
    attack_delay: 60,
    hostile: true,
};

const SPIDER: MobProfile = MobProfile {
    name: "spider",
    width: 100.0,
    height: 50.0,
    speed: 2.5,
    max_health: 8.0,
    safe_fall: DEFAULT_SAFE_FALL,
    contact_damage: 0.5,
    attack_delay: 40,
    hostile: true,
};

const CREEPER: MobProfile = MobProfile {
    name: "creeper",
    width: 50.0,
    height: 100.0,
    speed: 1.2,
    max_health: 10.0,
    safe_fall: DEFAULT_SAFE_FALL,
    contact_damage: 0.0,
    attack_delay: 0,
    hostile: true,
};

const PIG: MobProfile = MobProfile {
    name: "pig",
    width: 75.0,
    height: 50.0,
    speed: 1.0,
    max_health: 5.0,
    safe_fall: DEFAULT_SAFE_FALL,
    contact_damage: 0.0,
    attack_delay: 0,
    hostile: false,
};

const SHEEP: MobProfile = MobProfile {
    name: "sheep",
    width: 75.0,
    height: 60.0,
    speed: 1.0,
    max_health: 5.0,
    safe_fall: DEFAULT_SAFE_FALL,
    contact_damage: 0.0,
    attack_delay: 0,
    hostile: false,
};

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Zombie,
        EntityKind::Spider,
        EntityKind::Creeper,
        EntityKind::Pig,
        EntityKind::Sheep,
    ];

    pub fn profile(self) -> &'static MobProfile {
        match self {
            EntityKind::Zombie => &ZOMBIE,
            EntityKind::Spider => &SPIDER,
            EntityKind::Creeper => &CREEPER,
            EntityKind::Pig => &PIG,
            EntityKind::Sheep => &SHEEP,
        }
    }

    pub fn is_hostile(self) -> bool {
        self.profile().hostile
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
