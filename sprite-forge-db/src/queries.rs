//! Lookup-table reads for the sprite database.
//!
//! Every row is converted to a typed value right here at the boundary;
//! nothing downstream sees a raw query result.

use std::collections::HashMap;

use rusqlite::Connection;
use sprite_forge_core::types::MetadataRule;

use crate::StoreError;

/// Load the `sprite_megatile_size` lookup as `(name, width, height)` rows
/// in table order.
pub fn load_tile_sizes(conn: &Connection) -> Result<Vec<(String, i64, i64)>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT sprite_name, tiled_width, tiled_height FROM sprite_megatile_size",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Load the `sprite_action` lookup as `(id, name)` rows.
///
/// Classification is first-match-wins over this list, so the natural
/// table order is pinned explicitly with `ORDER BY rowid`.
pub fn load_actions(conn: &Connection) -> Result<Vec<(i64, String)>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT sprite_action_id, sprite_action_name FROM sprite_action ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Load every `sprite_slice_meta` rule.
pub fn load_metadata_rules(conn: &Connection) -> Result<Vec<MetadataRule>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT match_text, start_frame, end_frame, frame_seconds, event_id, event_json
         FROM sprite_slice_meta",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(MetadataRule {
            match_text: row.get(0)?,
            min_frame: row.get(1)?,
            max_frame: row.get(2)?,
            frame_seconds: row.get(3)?,
            event_id: row.get(4)?,
            event_json: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Load the name -> id map for all persisted sprites.
///
/// Slice rows reference sprites strictly by name, so an empty table is an
/// error: the sprite insert pass has to run first. Duplicate names keep
/// the first ID seen and log the shadowed row — collisions would otherwise
/// silently misattach slices.
pub fn load_sprite_id_map(conn: &Connection) -> Result<HashMap<String, i64>, StoreError> {
    let mut stmt = conn.prepare("SELECT sprite_id, sprite_name FROM sprite")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut map = HashMap::new();
    for row in rows {
        let (id, name) = row?;
        if let Some(existing) = map.get(&name) {
            log::warn!(
                "Duplicate sprite name '{}': keeping id {}, shadowing id {}",
                name,
                existing,
                id
            );
            continue;
        }
        map.insert(name, id);
    }

    if map.is_empty() {
        return Err(StoreError::NoSprites);
    }

    Ok(map)
}
