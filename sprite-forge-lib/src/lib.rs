//! Filesystem discovery and pipeline orchestration for the sprite importer.

pub mod pipeline;
pub mod scanner;

pub use pipeline::{ImportReport, PipelineError, build_slices, run_import};
pub use scanner::{ScanError, scan_image_files};
