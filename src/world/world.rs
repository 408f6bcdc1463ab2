use glam::Vec2;
use rustc_hash::FxHashMap;

use super::{Block, BlockId, BlockKind, ChunkKey, GridPos};
use crate::constants::core::CHUNK_SIZE;
use crate::particles::Particle;
use crate::physics::Rect;

/// Owner of every placed block plus the transient particle list.
///
/// Blocks live in a flat id-keyed map; two derived indices sit beside it:
/// `cells` enforces one block per grid cell and `chunks` buckets block ids by
/// chunk for proximity queries. Buckets keep insertion order, which is the
/// order the collision resolver scans candidates in.
#[derive(Debug, Default)]
pub struct World {
    blocks: FxHashMap<BlockId, Block>,
    cells: FxHashMap<GridPos, BlockId>,
    chunks: FxHashMap<ChunkKey, Vec<BlockId>>,
    next_block_id: u32,
    particles: Vec<Particle>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block into the flat store and its chunk bucket.
    ///
    /// Returns `None` without touching anything when the cell is already
    /// occupied, which keeps generation and loading idempotent.
    pub fn add_block(&mut self, kind: BlockKind, position: GridPos) -> Option<BlockId> {
        debug_assert!(position.is_aligned(), "block off grid: {:?}", position);

        if self.cells.contains_key(&position) {
            return None;
        }

        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;

        self.blocks.insert(id, Block::new(id, kind, position));
        self.cells.insert(position, id);
        self.chunks.entry(position.chunk()).or_default().push(id);

        Some(id)
    }

    /// Remove a block from the flat store and its chunk bucket
    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        let block = self.blocks.remove(&id)?;
        self.cells.remove(&block.position);

        let key = block.position.chunk();
        if let Some(bucket) = self.chunks.get_mut(&key) {
            if let Some(index) = bucket.iter().position(|&b| b == id) {
                bucket.remove(index);
            }
            if bucket.is_empty() {
                self.chunks.remove(&key);
            }
        }

        Some(block)
    }

    /// Remove whatever block occupies `position`
    pub fn remove_at(&mut self, position: GridPos) -> Option<Block> {
        let id = *self.cells.get(&position)?;
        self.remove_block(id)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    pub fn block_at(&self, position: GridPos) -> Option<&Block> {
        self.cells.get(&position).and_then(|id| self.blocks.get(id))
    }

    pub fn is_occupied(&self, position: GridPos) -> bool {
        self.cells.contains_key(&position)
    }

    /// Every block in the square of chunks around `position`.
    ///
    /// The square spans `radius / CHUNK_SIZE + 1` chunks on each side of the
    /// chunk containing `position`, so the result over-approximates the
    /// radius; callers filter by exact distance or rectangle when needed.
    /// The returned blocks are a snapshot, safe to hold while mutating.
    pub fn query(&self, position: Vec2, radius: f32) -> Vec<Block> {
        let chunk_radius = (radius.max(0.0) / CHUNK_SIZE as f32).floor() as i32 + 1;
        let center = ChunkKey::from_world(position);

        let mut nearby = Vec::new();
        for x in (center.x - chunk_radius)..=(center.x + chunk_radius) {
            for y in (center.y - chunk_radius)..=(center.y + chunk_radius) {
                self.extend_from_chunk(ChunkKey::new(x, y), &mut nearby);
            }
        }
        nearby
    }

    /// Blocks whose box overlaps `rect` (the renderer's visible set)
    pub fn blocks_in_rect(&self, rect: &Rect) -> Vec<Block> {
        let min = ChunkKey::from_world(rect.position());
        let max = ChunkKey::from_world(Vec2::new(rect.right(), rect.bottom()));

        let mut candidates = Vec::new();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.extend_from_chunk(ChunkKey::new(x, y), &mut candidates);
            }
        }
        candidates.retain(|block| block.rect().intersects(rect));
        candidates
    }

    fn extend_from_chunk(&self, key: ChunkKey, out: &mut Vec<Block>) {
        if let Some(bucket) = self.chunks.get(&key) {
            out.extend(bucket.iter().filter_map(|id| self.blocks.get(id)).copied());
        }
    }

    /// All blocks in creation order
    pub fn blocks(&self) -> Vec<&Block> {
        let mut all: Vec<&Block> = self.blocks.values().collect();
        all.sort_unstable_by_key(|block| block.id);
        all
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Drop every block and particle
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.cells.clear();
        self.chunks.clear();
        self.particles.clear();
    }

    pub fn add_particles(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.particles.extend(particles);
    }

    /// Advance particles one tick and drop the expired ones
    pub fn update_particles(&mut self) {
        self.particles.retain_mut(|particle| particle.update());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
