use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Sprite category identifiers for the five fixed asset folders.
///
/// This enum centralizes folder identity in one place, replacing ad-hoc
/// string matching throughout the pipeline. The variant order is the order
/// in which the folders are walked during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteType {
    Maps,
    Houses,
    Zepps,
    Characters,
    Decorations,
}

/// All sprite types in discovery-walk order.
const ALL_TYPES: &[SpriteType] = &[
    SpriteType::Maps,
    SpriteType::Houses,
    SpriteType::Zepps,
    SpriteType::Characters,
    SpriteType::Decorations,
];

impl SpriteType {
    /// Folder name under the asset root, also the value stored in the
    /// `sprite.type` column.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Self::Maps => "maps",
            Self::Houses => "houses",
            Self::Zepps => "zepps",
            Self::Characters => "characters",
            Self::Decorations => "decorations",
        }
    }

    /// All sprite types, in the order their folders are walked.
    pub fn all() -> &'static [SpriteType] {
        ALL_TYPES
    }
}

impl fmt::Display for SpriteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

#[derive(Debug, Clone, Error)]
#[error("Unknown sprite type: {0}")]
pub struct SpriteTypeParseError(String);

impl FromStr for SpriteType {
    type Err = SpriteTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_TYPES
            .iter()
            .find(|t| t.folder_name() == s)
            .copied()
            .ok_or_else(|| SpriteTypeParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/sprite_type_tests.rs"]
mod tests;
