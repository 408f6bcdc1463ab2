use serde::{Deserialize, Serialize};

use crate::world::BlockKind;

/// Placeable item types; one per breakable block variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Grass,
    Dirt,
    Stone,
    IronOre,
    Coal,
    Diamond,
    Wood,
    Leaves,
}

impl ItemKind {
    /// Block created when this item is placed
    pub fn block_kind(self) -> BlockKind {
        match self {
            ItemKind::Grass => BlockKind::Grass,
            ItemKind::Dirt => BlockKind::Dirt,
            ItemKind::Stone => BlockKind::Stone,
            ItemKind::IronOre => BlockKind::IronOre,
            ItemKind::Coal => BlockKind::Coal,
            ItemKind::Diamond => BlockKind::Diamond,
            ItemKind::Wood => BlockKind::Wood,
            ItemKind::Leaves => BlockKind::Leaves,
        }
    }

    /// Item dropped by mining `kind`; `None` for Bedrock
    pub fn from_block(kind: BlockKind) -> Option<ItemKind> {
        kind.drop()
    }

    /// Hotbar label
    pub fn name(self) -> &'static str {
        self.block_kind().name()
    }
}

/// A non-empty stack of one item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemKind,
    pub count: u32,
}

impl ItemStack {
    /// Create a stack; `count` must be positive
    pub fn new(item: ItemKind, count: u32) -> Self {
        debug_assert!(count > 0, "empty stacks are represented by an empty slot");
        Self { item, count }
    }

    pub fn single(item: ItemKind) -> Self {
        Self::new(item, 1)
    }
}
