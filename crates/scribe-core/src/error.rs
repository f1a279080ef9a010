//! Error types for the Scribe composer engine

use thiserror::Error;

/// Main error type for composer operations
///
/// Collaborator failures are caught at the call site and never re-thrown
/// into the rendering layer; these variants exist so providers have a typed
/// channel to report through and so logs carry a useful message.
#[derive(Error, Debug)]
pub enum ComposerError {
    /// Mention search provider failed
    #[error("Mention search failed: {0}")]
    MentionSearch(String),

    /// Media upload provider failed or rejected the file
    #[error("Media upload failed: {0}")]
    MediaUpload(String),

    /// Autosave persistence provider failed
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// A provider required for the operation was not configured
    #[error("Provider not configured: {0}")]
    ProviderMissing(&'static str),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias using ComposerError
pub type ComposerResult<T> = Result<T, ComposerError>;
