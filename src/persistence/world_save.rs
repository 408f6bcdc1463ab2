use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{atomic_write, corrupted_data, PersistenceResult};
use crate::constants::core::BLOCK_SIZE;
use crate::generation::WorldGenerator;
use crate::world::{BlockKind, GridPos, World};

/// One persisted block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub x: i32,
    pub y: i32,
    pub kind: BlockKind,
}

/// Write every block in creation order
pub fn save_world(world: &World, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();
    let records: Vec<BlockRecord> = world
        .blocks()
        .into_iter()
        .map(|block| BlockRecord {
            x: block.position.x,
            y: block.position.y,
            kind: block.kind,
        })
        .collect();

    let data = bincode::serialize(&records)?;
    atomic_write(path, &data)?;

    log::info!("Saved {} blocks to {}", records.len(), path.display());
    Ok(())
}

/// Load a saved world.
///
/// Returns `Ok(None)` when no save exists. A file that does not decode, has
/// a block off the grid, or has two blocks in one cell is rejected whole.
pub fn load_world(path: impl AsRef<Path>) -> PersistenceResult<Option<World>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read(path)?;
    let records: Vec<BlockRecord> = bincode::deserialize(&data)
        .map_err(|e| corrupted_data(format!("{}: {}", path.display(), e)))?;

    let mut world = World::new();
    for record in &records {
        let position = GridPos::new(record.x, record.y);
        if record.x.rem_euclid(BLOCK_SIZE) != 0 || record.y.rem_euclid(BLOCK_SIZE) != 0 {
            return Err(corrupted_data(format!(
                "block at ({}, {}) is off the grid",
                record.x, record.y
            )));
        }
        if world.add_block(record.kind, position).is_none() {
            return Err(corrupted_data(format!(
                "duplicate block at ({}, {})",
                record.x, record.y
            )));
        }
    }

    log::info!("Loaded {} blocks from {}", world.len(), path.display());
    Ok(Some(world))
}

/// Load the save at `path`, or generate a fresh world if there is none
pub fn load_or_generate(path: impl AsRef<Path>, generator: &WorldGenerator) -> PersistenceResult<World> {
    let path = path.as_ref();
    if let Some(world) = load_world(path)? {
        return Ok(world);
    }

    log::info!("No save at {}, generating a new world", path.display());
    let mut world = World::new();
    generator.generate(&mut world);
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_world(temp_dir.path().join("world.dat")).unwrap().is_none());
    }

    #[test]
    fn test_save_preserves_creation_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("world.dat");

        let mut world = World::new();
        world.add_block(BlockKind::Wood, GridPos::new(100, -50));
        world.add_block(BlockKind::Bedrock, GridPos::new(-1000, 3300));
        world.add_block(BlockKind::Leaves, GridPos::new(0, 0));
        save_world(&world, &path).unwrap();

        let loaded = load_world(&path).unwrap().unwrap();
        let kinds: Vec<_> = loaded.blocks().iter().map(|b| (b.position, b.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (GridPos::new(100, -50), BlockKind::Wood),
                (GridPos::new(-1000, 3300), BlockKind::Bedrock),
                (GridPos::new(0, 0), BlockKind::Leaves),
            ]
        );
    }

    #[test]
    fn test_garbage_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("world.dat");
        fs::write(&path, [0xff, 0xff, 0xff]).unwrap();

        assert!(matches!(load_world(&path), Err(PersistenceError::CorruptedData(_))));
    }

    #[test]
    fn test_off_grid_and_duplicates_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("world.dat");

        let off_grid = vec![BlockRecord { x: 10, y: 0, kind: BlockKind::Stone }];
        fs::write(&path, bincode::serialize(&off_grid).unwrap()).unwrap();
        assert!(matches!(load_world(&path), Err(PersistenceError::CorruptedData(_))));

        let duplicate = vec![
            BlockRecord { x: 0, y: 0, kind: BlockKind::Stone },
            BlockRecord { x: 0, y: 0, kind: BlockKind::Dirt },
        ];
        fs::write(&path, bincode::serialize(&duplicate).unwrap()).unwrap();
        assert!(matches!(load_world(&path), Err(PersistenceError::CorruptedData(_))));
    }
}
