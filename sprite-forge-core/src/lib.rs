//! Core inference pipeline for the sprite importer.
//!
//! Turns a flat list of discovered image files into structured records:
//! classification (action, direction, frame number from filename
//! patterns), aggregation (one sprite per logical name), and metadata
//! resolution (regex rules with an explicit last-match-wins policy).
//! Pure logic only — no filesystem or database access.

pub mod aggregate;
pub mod classify;
pub mod metadata;
pub mod sprite_type;
pub mod types;

pub use aggregate::{TileSizeTable, aggregate_sprites};
pub use classify::{ActionTable, MISSING_ACTION, classify_files};
pub use metadata::RuleTable;
pub use sprite_type::{SpriteType, SpriteTypeParseError};
pub use types::{
    DIRECTIONS, Direction, ImageFile, MetadataRule, SliceMetadata, Sprite, SpriteSlice,
};
