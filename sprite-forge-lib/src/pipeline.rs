//! The import pipeline: discovery through the two insert passes.
//!
//! Fully sequential and fail-fast. Each database phase opens its own
//! connection and releases it when the phase's scope ends, whether or not
//! the phase succeeded.

use std::collections::HashMap;
use std::path::Path;

use sprite_forge_core::types::{ImageFile, SpriteSlice};
use sprite_forge_core::{ActionTable, MISSING_ACTION, RuleTable, TileSizeTable};
use sprite_forge_core::{aggregate_sprites, classify_files};
use sprite_forge_db::StoreError;
use thiserror::Error;

use crate::scanner::{ScanError, scan_image_files};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Problem loading sprite files: {0}")]
    Scan(#[from] ScanError),
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Counters for the run summary.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub files_scanned: u64,
    pub sprites_found: u64,
    pub sprites_inserted: u64,
    pub slices_inserted: u64,
    /// Files whose action resolved to the `MISSING` sentinel. These rows
    /// import fine but need manual triage.
    pub action_misses: u64,
}

/// Run the whole import: discover files, classify, aggregate, insert
/// sprites, reload their assigned ids, build and insert slices.
///
/// With `dry_run` set, everything up to aggregation runs (including the
/// lookup reads) and the report says what would be inserted, but neither
/// insert pass executes.
pub fn run_import(root: &Path, db_path: &Path, dry_run: bool) -> Result<ImportReport, PipelineError> {
    let mut report = ImportReport::default();

    log::info!("Scanning sprite folders under {}", root.display());
    let mut files = scan_image_files(root)?;
    report.files_scanned = files.len() as u64;

    // Lookup phase: one connection for the classification tables.
    let (actions, tile_sizes) = {
        let conn = sprite_forge_db::open_database(db_path)?;
        let actions = ActionTable::new(sprite_forge_db::load_actions(&conn)?);
        let tile_sizes = TileSizeTable::new(sprite_forge_db::load_tile_sizes(&conn)?);
        (actions, tile_sizes)
    };

    if actions.is_empty() {
        log::warn!("The sprite_action table is empty; every file will classify as MISSING");
    }

    classify_files(&mut files, &actions);
    for file in &files {
        if file.action_name == MISSING_ACTION {
            report.action_misses += 1;
            log::warn!("No action pattern matches '{}'", file.name);
        }
    }

    let sprites = aggregate_sprites(&files, &tile_sizes);
    report.sprites_found = sprites.len() as u64;
    log::info!("Will insert {} new sprites", sprites.len());

    if dry_run {
        log::info!("Dry run: skipping both insert passes");
        return Ok(report);
    }

    // Sprite insert phase.
    {
        let conn = sprite_forge_db::open_database(db_path)?;
        report.sprites_inserted = sprite_forge_db::insert_sprites(&conn, &sprites)? as u64;
    }

    // Reload phase: assigned ids and the metadata rule table.
    let (sprite_ids, rules) = {
        let conn = sprite_forge_db::open_database(db_path)?;
        let sprite_ids = sprite_forge_db::load_sprite_id_map(&conn)?;
        let rules = RuleTable::new(sprite_forge_db::load_metadata_rules(&conn)?);
        (sprite_ids, rules)
    };

    let slices = build_slices(&files, &sprite_ids, &rules);
    log::info!("Will insert {} new sprite slices", slices.len());

    // Slice insert phase.
    {
        let conn = sprite_forge_db::open_database(db_path)?;
        report.slices_inserted = sprite_forge_db::insert_slices(&conn, &slices)? as u64;
    }

    Ok(report)
}

/// Build one slice per classified file, resolving sprite ids by name and
/// timing/event metadata from the rule table.
///
/// A name absent from the id map resolves to sprite_id 0, preserving the
/// source importer's behavior for unmatched rows.
pub fn build_slices(
    files: &[ImageFile],
    sprite_ids: &HashMap<String, i64>,
    rules: &RuleTable,
) -> Vec<SpriteSlice> {
    files
        .iter()
        .map(|file| {
            let unity_path = file.unity_path();
            let metadata = rules.resolve(&unity_path, file.frame_number);
            SpriteSlice {
                sprite_id: sprite_ids.get(file.sprite_name()).copied().unwrap_or(0),
                frame_number: file.frame_number,
                direction: file.direction,
                action_id: file.action_id,
                frame_seconds: metadata.frame_seconds,
                event_id: metadata.event_id,
                event_json: metadata.event_json,
                unity_path,
            }
        })
        .collect()
}
