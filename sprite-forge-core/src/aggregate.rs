//! Sprite aggregation: group classified files into logical sprites.

use std::collections::HashMap;

use regex::Regex;

use crate::types::{ImageFile, Sprite};

/// The `sprite_megatile_size` lookup table, compiled. Each row's name is
/// matched as a regex followed by a word boundary against the derived
/// sprite name; the first matching row wins.
#[derive(Debug, Default)]
pub struct TileSizeTable {
    rows: Vec<TileSizeRule>,
}

#[derive(Debug)]
struct TileSizeRule {
    pattern: Regex,
    tiled_width: i64,
    tiled_height: i64,
}

impl TileSizeTable {
    /// Compile `(name, tiled_width, tiled_height)` rows in table order.
    /// Rows whose name fails to compile are dropped with a warning.
    pub fn new(rows: Vec<(String, i64, i64)>) -> Self {
        let mut compiled = Vec::with_capacity(rows.len());
        for (name, tiled_width, tiled_height) in rows {
            match Regex::new(&format!(r"{name}\b")) {
                Ok(pattern) => compiled.push(TileSizeRule {
                    pattern,
                    tiled_width,
                    tiled_height,
                }),
                Err(e) => {
                    log::warn!("Dropping unusable tile size pattern '{}': {}", name, e);
                }
            }
        }
        Self { rows: compiled }
    }

    /// Resolve a sprite name to `(tiled_width, tiled_height)`,
    /// defaulting to 1x1 when no row matches.
    pub fn resolve(&self, sprite_name: &str) -> (i64, i64) {
        self.rows
            .iter()
            .find(|r| r.pattern.is_match(sprite_name))
            .map(|r| (r.tiled_width, r.tiled_height))
            .unwrap_or((1, 1))
    }
}

/// Group classified files into one [`Sprite`] per derived sprite name,
/// in first-seen order.
///
/// The first file of a group seeds the sprite: `image_count` 1, `pixels`
/// from that file's width, tiled size resolved from the lookup table.
/// Later files only flip direction flags and bump the count; pixels and
/// tiled size are never revisited even if a later file disagrees.
pub fn aggregate_sprites(files: &[ImageFile], tile_sizes: &TileSizeTable) -> Vec<Sprite> {
    let mut sprites: Vec<Sprite> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for file in files {
        let name = file.sprite_name();

        match index.get(name) {
            Some(&i) => {
                let sprite = &mut sprites[i];
                sprite.observe_direction(file.direction);
                sprite.image_count += 1;
            }
            None => {
                let (tiled_width, tiled_height) = tile_sizes.resolve(name);
                index.insert(name.to_string(), sprites.len());
                sprites.push(Sprite {
                    name: name.to_string(),
                    sprite_type: file.sprite_type,
                    image_count: 1,
                    tiled_width,
                    tiled_height,
                    pixels: file.width as i64,
                    direction_support: 0,
                    has_up: false,
                    has_right: false,
                    has_down: false,
                    has_left: false,
                });
            }
        }
    }

    sprites
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
