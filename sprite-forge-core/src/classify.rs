//! Filename classification: action, direction, and frame number.
//!
//! Each attribute is derived independently from the filename (never the
//! full path) against an explicit, ordered rule list. Action and direction
//! are first-match-wins; misses resolve to documented sentinels rather
//! than errors, so bad filenames surface as data-quality markers in the
//! imported rows instead of aborting the run.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DIRECTIONS, Direction, ImageFile};

/// Sentinel action name assigned when no action pattern matches.
/// Rows carrying it need manual triage, not a failed import.
pub const MISSING_ACTION: &str = "MISSING";

/// First run of 2-3 consecutive digits anywhere in a filename.
/// Single digits intentionally never match.
static FRAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,3}").expect("frame pattern is valid"));

/// One action pattern from the `sprite_action` lookup table, compiled.
#[derive(Debug)]
struct ActionRule {
    id: i64,
    name: String,
    pattern: Regex,
}

/// The ordered action rule list. Row order is the table's natural return
/// order and is the tie-break contract: the first matching rule wins.
#[derive(Debug, Default)]
pub struct ActionTable {
    rules: Vec<ActionRule>,
}

impl ActionTable {
    /// Compile `(id, name)` rows into an ordered rule list. The action
    /// name doubles as a case-sensitive regex against filenames; a name
    /// that fails to compile is dropped with a warning.
    pub fn new(rows: Vec<(i64, String)>) -> Self {
        let mut rules = Vec::with_capacity(rows.len());
        for (id, name) in rows {
            match Regex::new(&name) {
                Ok(pattern) => rules.push(ActionRule { id, name, pattern }),
                Err(e) => {
                    log::warn!("Dropping unusable action pattern '{}': {}", name, e);
                }
            }
        }
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve a filename to `(action_id, action_name)`.
    /// No match yields the `(0, MISSING)` sentinel.
    pub fn classify(&self, file_name: &str) -> (i64, String) {
        for rule in &self.rules {
            if rule.pattern.is_match(file_name) {
                return (rule.id, rule.name.clone());
            }
        }
        (0, MISSING_ACTION.to_string())
    }
}

/// Case-insensitive substring match against `UP, RIGHT, DOWN, LEFT` in
/// that order; no match defaults to `DOWN`.
pub fn classify_direction(file_name: &str) -> Direction {
    let upper = file_name.to_uppercase();
    DIRECTIONS
        .iter()
        .find(|d| upper.contains(d.token()))
        .copied()
        .unwrap_or(Direction::Down)
}

/// Extract the frame number: the first 2-3 digit run, parsed as an
/// integer, or 0 when absent.
pub fn extract_frame_number(file_name: &str) -> i64 {
    FRAME_RE
        .find(file_name)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Fill the classification fields of every discovered file in place.
pub fn classify_files(files: &mut [ImageFile], actions: &ActionTable) {
    for file in files.iter_mut() {
        let (action_id, action_name) = actions.classify(&file.name);
        file.action_id = action_id;
        file.action_name = action_name;
        file.direction = classify_direction(&file.name);
        file.frame_number = extract_frame_number(&file.name);
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
