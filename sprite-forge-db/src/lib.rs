//! SQLite persistence layer for the sprite importer.
//!
//! Provides schema creation, lookup-table reads, and the two batch-insert
//! operations, backed by SQLite (via rusqlite with the bundled feature).

use thiserror::Error;

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{insert_slices, insert_sprites};
pub use queries::{load_actions, load_metadata_rules, load_sprite_id_map, load_tile_sizes};
pub use schema::{create_schema, open_database, open_memory};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("The sprites have not been saved to the database yet")]
    NoSprites,
}
