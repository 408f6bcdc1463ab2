use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::core::{BLOCK_SIZE, CHUNK_SIZE};

/// Top-left corner of a grid cell, in world units (multiples of the block size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floor a world-space point onto the block grid
    pub fn from_world(point: Vec2) -> Self {
        let size = BLOCK_SIZE as f32;
        Self {
            x: (point.x / size).floor() as i32 * BLOCK_SIZE,
            y: (point.y / size).floor() as i32 * BLOCK_SIZE,
        }
    }

    /// Both coordinates sit on the block grid
    pub fn is_aligned(&self) -> bool {
        self.x.rem_euclid(BLOCK_SIZE) == 0 && self.y.rem_euclid(BLOCK_SIZE) == 0
    }

    /// Cell offset by whole blocks
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx * BLOCK_SIZE, self.y + dy * BLOCK_SIZE)
    }

    /// The four orthogonal neighbours (below, above, right, left)
    pub fn neighbors(&self) -> [GridPos; 4] {
        [
            self.offset(0, 1),
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(-1, 0),
        ]
    }

    pub fn center(&self) -> Vec2 {
        let half = BLOCK_SIZE as f32 * 0.5;
        Vec2::new(self.x as f32 + half, self.y as f32 + half)
    }

    pub fn chunk(&self) -> ChunkKey {
        ChunkKey::containing(self.x, self.y)
    }
}

/// Spatial bucket index: floor(position / chunk size) on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey {
    pub x: i32,
    pub y: i32,
}

impl ChunkKey {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chunk holding the world-space integer point
    pub fn containing(x: i32, y: i32) -> Self {
        Self {
            x: x.div_euclid(CHUNK_SIZE),
            y: y.div_euclid(CHUNK_SIZE),
        }
    }

    /// Chunk holding a world-space float point
    pub fn from_world(point: Vec2) -> Self {
        Self::containing(point.x.floor() as i32, point.y.floor() as i32)
    }
}
