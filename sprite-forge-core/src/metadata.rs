//! Slice metadata resolution against the `sprite_slice_meta` rule table.
//!
//! The source data gives no authoritative rule order, so the table is
//! sorted by match text at load time; that sorted order is the contract.
//! Resolution scans every rule and the **last** applying rule wins, the
//! mirror image of the classifier's first-match policy.

use regex::Regex;

use crate::types::{MetadataRule, SliceMetadata};

/// The compiled rule table, built once and passed by reference into the
/// slice-building phase.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    pattern: Regex,
    min_frame: i64,
    max_frame: i64,
    metadata: SliceMetadata,
}

impl CompiledRule {
    /// A rule applies when its pattern matches the path and the frame is
    /// in bounds. Equal bounds mean the rule covers every frame.
    fn applies(&self, unity_path: &str, frame_number: i64) -> bool {
        if !self.pattern.is_match(unity_path) {
            return false;
        }
        let all_frames = self.min_frame == self.max_frame;
        all_frames || (frame_number >= self.min_frame && frame_number <= self.max_frame)
    }
}

impl RuleTable {
    /// Sort rules by match text and compile them. A rule whose match text
    /// is not a valid regex is dropped with a warning.
    pub fn new(mut rows: Vec<MetadataRule>) -> Self {
        rows.sort_by(|a, b| a.match_text.cmp(&b.match_text));

        let mut rules = Vec::with_capacity(rows.len());
        for row in rows {
            match Regex::new(&row.match_text) {
                Ok(pattern) => rules.push(CompiledRule {
                    pattern,
                    min_frame: row.min_frame,
                    max_frame: row.max_frame,
                    metadata: SliceMetadata {
                        frame_seconds: row.frame_seconds,
                        event_id: row.event_id,
                        event_json: row.event_json,
                    },
                }),
                Err(e) => {
                    log::warn!(
                        "Dropping unusable slice metadata pattern '{}': {}",
                        row.match_text,
                        e
                    );
                }
            }
        }
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve metadata for one slice. Every rule is tested; the last
    /// applying rule overwrites earlier matches. No applying rule yields
    /// the default annotation (0.08s per frame, no event).
    pub fn resolve(&self, unity_path: &str, frame_number: i64) -> SliceMetadata {
        let mut resolved = SliceMetadata::default();

        for rule in &self.rules {
            if rule.applies(unity_path, frame_number) {
                resolved = rule.metadata.clone();
            }
        }

        resolved
    }
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
