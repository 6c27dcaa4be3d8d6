use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Every fatal condition funnels through here so main can print one
/// labeled line and exit nonzero.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The import pipeline failed (scan or database).
    #[error("{0}")]
    Pipeline(#[from] sprite_forge_lib::PipelineError),

    /// A direct database operation failed.
    #[error("Database error: {0}")]
    Store(#[from] sprite_forge_db::StoreError),
}
