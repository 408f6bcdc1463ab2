use serde::{Deserialize, Serialize};

use super::GridPos;
use crate::constants::core::BLOCK_SIZE_F32;
use crate::inventory::ItemKind;
use crate::physics::Rect;

/// Unique identifier for a placed block; ascending ids follow creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// Every block variant in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    IronOre,
    Coal,
    Diamond,
    Wood,
    Leaves,
    Bedrock,
}

/// Static per-variant data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockProperties {
    pub name: &'static str,
    /// Mining work needed to break the block; infinite means unbreakable
    pub max_health: f32,
    /// Break-particle colour (RGB)
    pub color: [u8; 3],
    /// Item deposited in the hotbar when mined
    pub drop: Option<ItemKind>,
}

const GRASS: BlockProperties = BlockProperties {
    name: "grass",
    max_health: 50.0,
    color: [0, 255, 0],
    drop: Some(ItemKind::Grass),
};
const DIRT: BlockProperties = BlockProperties {
    name: "dirt",
    max_health: 50.0,
    color: [139, 69, 19],
    drop: Some(ItemKind::Dirt),
};
const STONE: BlockProperties = BlockProperties {
    name: "stone",
    max_health: 125.0,
    color: [128, 128, 128],
    drop: Some(ItemKind::Stone),
};
const IRON_ORE: BlockProperties = BlockProperties {
    name: "ironore",
    max_health: 150.0,
    color: [100, 100, 110],
    drop: Some(ItemKind::IronOre),
};
const COAL: BlockProperties = BlockProperties {
    name: "coal",
    max_health: 110.0,
    color: [54, 69, 79],
    drop: Some(ItemKind::Coal),
};
const DIAMOND: BlockProperties = BlockProperties {
    name: "diamond",
    max_health: 150.0,
    color: [135, 206, 235],
    drop: Some(ItemKind::Diamond),
};
const WOOD: BlockProperties = BlockProperties {
    name: "wood",
    max_health: 100.0,
    color: [160, 82, 45],
    drop: Some(ItemKind::Wood),
};
const LEAVES: BlockProperties = BlockProperties {
    name: "leaves",
    max_health: 5.0,
    color: [0, 200, 0],
    drop: Some(ItemKind::Leaves),
};
const BEDROCK: BlockProperties = BlockProperties {
    name: "bedrock",
    max_health: f32::INFINITY,
    color: [0, 0, 0],
    drop: None,
};

impl BlockKind {
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::IronOre,
        BlockKind::Coal,
        BlockKind::Diamond,
        BlockKind::Wood,
        BlockKind::Leaves,
        BlockKind::Bedrock,
    ];

    /// Property table lookup
    pub fn properties(self) -> &'static BlockProperties {
        match self {
            BlockKind::Grass => &GRASS,
            BlockKind::Dirt => &DIRT,
            BlockKind::Stone => &STONE,
            BlockKind::IronOre => &IRON_ORE,
            BlockKind::Coal => &COAL,
            BlockKind::Diamond => &DIAMOND,
            BlockKind::Wood => &WOOD,
            BlockKind::Leaves => &LEAVES,
            BlockKind::Bedrock => &BEDROCK,
        }
    }

    pub fn name(self) -> &'static str {
        self.properties().name
    }

    pub fn max_health(self) -> f32 {
        self.properties().max_health
    }

    pub fn color(self) -> [u8; 3] {
        self.properties().color
    }

    pub fn drop(self) -> Option<ItemKind> {
        self.properties().drop
    }

    /// Immune to mining and explosions
    pub fn is_unbreakable(self) -> bool {
        !self.max_health().is_finite()
    }
}

/// A placed block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub position: GridPos,
    pub health: f32,
}

impl Block {
    pub fn new(id: BlockId, kind: BlockKind, position: GridPos) -> Self {
        Self {
            id,
            kind,
            position,
            health: kind.max_health(),
        }
    }

    pub fn max_health(&self) -> f32 {
        self.kind.max_health()
    }

    /// Bounding box derived from position and the fixed cell size
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x as f32,
            self.position.y as f32,
            BLOCK_SIZE_F32,
            BLOCK_SIZE_F32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_table() {
        assert_eq!(BlockKind::Dirt.max_health(), 50.0);
        assert_eq!(BlockKind::Stone.max_health(), 125.0);
        assert_eq!(BlockKind::Leaves.max_health(), 5.0);
        assert!(BlockKind::Bedrock.is_unbreakable());
        assert_eq!(BlockKind::Bedrock.drop(), None);

        for kind in BlockKind::ALL {
            if kind != BlockKind::Bedrock {
                let item = kind.drop().expect("breakable blocks drop an item");
                assert_eq!(item.block_kind(), kind);
                assert!(!kind.is_unbreakable());
            }
        }
    }

    #[test]
    fn test_block_rect() {
        let block = Block::new(BlockId(3), BlockKind::Wood, GridPos::new(100, -50));
        let rect = block.rect();
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.top(), -50.0);
        assert_eq!(rect.bottom(), 0.0);
        assert_eq!(block.health, 100.0);
    }
}
