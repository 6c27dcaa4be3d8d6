//! Batch inserts for the two write targets.
//!
//! Each batch prepares one parameterized statement and executes it once
//! per record. The first failure propagates immediately: rows already
//! inserted stay inserted, the rest are abandoned. No transaction wraps
//! the batch — partial writes on failure are part of the contract.

use rusqlite::{Connection, params};
use sprite_forge_core::types::{Sprite, SpriteSlice};

use crate::StoreError;

/// Insert one row per sprite. Returns the number of rows inserted.
pub fn insert_sprites(conn: &Connection, sprites: &[Sprite]) -> Result<usize, StoreError> {
    let mut stmt = conn.prepare(
        "INSERT INTO sprite
         (sprite_name, type, image_count, tiled_width, tiled_height, pixels, direction_support)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    for sprite in sprites {
        stmt.execute(params![
            sprite.name,
            sprite.sprite_type.folder_name(),
            sprite.image_count,
            sprite.tiled_width,
            sprite.tiled_height,
            sprite.pixels,
            sprite.direction_support,
        ])?;
    }

    Ok(sprites.len())
}

/// Insert one row per slice. Returns the number of rows inserted.
pub fn insert_slices(conn: &Connection, slices: &[SpriteSlice]) -> Result<usize, StoreError> {
    let mut stmt = conn.prepare(
        "INSERT INTO sprite_slice
         (sprite_id, frame_number, direction, sprite_action_id,
          frame_seconds, event_id, event_json, unity_path)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    for slice in slices {
        stmt.execute(params![
            slice.sprite_id,
            slice.frame_number,
            slice.direction.token(),
            slice.action_id,
            slice.frame_seconds,
            slice.event_id,
            slice.event_json,
            slice.unity_path,
        ])?;
    }

    Ok(slices.len())
}
