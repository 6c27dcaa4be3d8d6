//! Typed records flowing through the import pipeline.
//!
//! Rows read from the database land in these structs once, at the
//! data-access boundary; everything downstream works with explicit fields
//! rather than generic query results.

use crate::SpriteType;

/// One physical image file discovered under the asset root.
///
/// Built during discovery with the classification fields defaulted; the
/// classifier fills `action_id`/`action_name`/`direction`/`frame_number`
/// in place. Never persisted directly.
#[derive(Debug, Clone)]
pub struct ImageFile {
    /// Filename including extension (no directory components).
    pub name: String,
    /// Containing folder: the fractal subfolder name, or the type folder
    /// name for flat files.
    pub parent: String,
    pub sprite_type: SpriteType,
    pub width: u32,
    pub height: u32,
    /// True when the file lives one level deeper, inside a subfolder that
    /// groups the frames of a tiled/animated sprite.
    pub is_fractal: bool,

    pub action_id: i64,
    pub action_name: String,
    pub direction: Direction,
    pub frame_number: i64,
}

impl ImageFile {
    /// A freshly discovered file, before classification.
    pub fn new(
        name: String,
        parent: String,
        sprite_type: SpriteType,
        width: u32,
        height: u32,
        is_fractal: bool,
    ) -> Self {
        Self {
            name,
            parent,
            sprite_type,
            width,
            height,
            is_fractal,
            action_id: 0,
            action_name: String::new(),
            direction: Direction::Down,
            frame_number: 0,
        }
    }

    /// Filename with the extension stripped.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }

    /// The logical sprite this file belongs to: the fractal parent folder
    /// name, or the file stem for flat files.
    pub fn sprite_name(&self) -> &str {
        if self.is_fractal { &self.parent } else { self.stem() }
    }

    /// Slash-joined logical identifier used for metadata matching and
    /// external asset references.
    pub fn unity_path(&self) -> String {
        if self.is_fractal {
            format!("{}/{}", self.parent, self.stem())
        } else {
            self.stem().to_string()
        }
    }
}

/// One of the four cardinal directions a sprite frame can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Classification order. A filename matching several directions resolves
/// to the earliest entry here.
pub const DIRECTIONS: &[Direction] = &[
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// Uppercase token matched against filenames and stored in the
    /// `sprite_slice.direction` column.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
        }
    }
}

/// One logical sprite: a distinct visual entity, one row in the `sprite`
/// table. Aggregated from every [`ImageFile`] sharing a derived name.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub name: String,
    pub sprite_type: SpriteType,
    /// Number of files contributing to this sprite.
    pub image_count: i64,
    pub tiled_width: i64,
    pub tiled_height: i64,
    /// Edge length in pixels, taken from the first file's width. The
    /// source assumes square textures and never checks later files.
    pub pixels: i64,
    /// Count of distinct directions observed, 0-4. Always equals the
    /// number of true `has_*` flags.
    pub direction_support: i64,

    pub has_up: bool,
    pub has_right: bool,
    pub has_down: bool,
    pub has_left: bool,
}

impl Sprite {
    /// Mark `direction` as supported and recompute the support count.
    pub fn observe_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.has_up = true,
            Direction::Right => self.has_right = true,
            Direction::Down => self.has_down = true,
            Direction::Left => self.has_left = true,
        }
        self.direction_support = [self.has_up, self.has_right, self.has_down, self.has_left]
            .iter()
            .filter(|&&f| f)
            .count() as i64;
    }
}

/// One frame/direction variant of a sprite, one row in the `sprite_slice`
/// table. One slice per physical file.
#[derive(Debug, Clone)]
pub struct SpriteSlice {
    /// Foreign key into `sprite`, resolved by name after the sprite insert
    /// pass. Zero when the name was missing from the id map.
    pub sprite_id: i64,
    pub frame_number: i64,
    pub direction: Direction,
    pub action_id: i64,
    pub frame_seconds: f64,
    pub event_id: i64,
    pub event_json: String,
    pub unity_path: String,
}

/// Resolved timing/event annotation for a slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceMetadata {
    pub frame_seconds: f64,
    pub event_id: i64,
    pub event_json: String,
}

impl Default for SliceMetadata {
    /// The global default applied when no rule matches.
    fn default() -> Self {
        Self {
            frame_seconds: 0.08,
            event_id: 0,
            event_json: String::new(),
        }
    }
}

/// One row of the `sprite_slice_meta` rule table, as loaded from the
/// database before compilation into a [`crate::metadata::RuleTable`].
#[derive(Debug, Clone)]
pub struct MetadataRule {
    /// Regular expression matched against a slice's unity path.
    pub match_text: String,
    /// Inclusive frame bounds. Equal bounds mean "applies to all frames".
    pub min_frame: i64,
    pub max_frame: i64,
    pub frame_seconds: f64,
    pub event_id: i64,
    pub event_json: String,
}
