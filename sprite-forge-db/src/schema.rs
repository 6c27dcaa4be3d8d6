//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;

use crate::StoreError;

/// Create all tables if they don't exist.
///
/// This is idempotent — safe to call on an existing database. There is no
/// migration machinery: the schema either exists or is created as-is.
pub fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open (or create) the sprite database at the given path.
pub fn open_database(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- Lookup: tiled dimensions for multi-tile ("megatile") sprites.
-- sprite_name is a pattern matched against derived sprite names.
CREATE TABLE IF NOT EXISTS sprite_megatile_size (
    sprite_name TEXT NOT NULL,
    tiled_width INTEGER NOT NULL,
    tiled_height INTEGER NOT NULL
);

-- Lookup: known sprite actions, matched against filenames in row order.
CREATE TABLE IF NOT EXISTS sprite_action (
    sprite_action_id INTEGER PRIMARY KEY AUTOINCREMENT,
    sprite_action_name TEXT NOT NULL
);

-- Lookup: per-slice timing/event rules keyed by a path pattern.
CREATE TABLE IF NOT EXISTS sprite_slice_meta (
    match_text TEXT NOT NULL,
    start_frame INTEGER NOT NULL DEFAULT 0,
    end_frame INTEGER NOT NULL DEFAULT 0,
    frame_seconds REAL NOT NULL DEFAULT 0.08,
    event_id INTEGER NOT NULL DEFAULT 0,
    event_json TEXT NOT NULL DEFAULT ''
);

-- Write target: one row per logical sprite.
CREATE TABLE IF NOT EXISTS sprite (
    sprite_id INTEGER PRIMARY KEY AUTOINCREMENT,
    sprite_name TEXT NOT NULL,
    type TEXT NOT NULL,
    image_count INTEGER NOT NULL,
    tiled_width INTEGER NOT NULL,
    tiled_height INTEGER NOT NULL,
    pixels INTEGER NOT NULL,
    direction_support INTEGER NOT NULL
);

-- Write target: one row per frame/direction variant of a sprite.
CREATE TABLE IF NOT EXISTS sprite_slice (
    sprite_id INTEGER NOT NULL,
    frame_number INTEGER NOT NULL,
    direction TEXT NOT NULL,
    sprite_action_id INTEGER NOT NULL,
    frame_seconds REAL NOT NULL,
    event_id INTEGER NOT NULL,
    event_json TEXT NOT NULL,
    unity_path TEXT NOT NULL
);
"#;
