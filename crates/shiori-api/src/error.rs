use thiserror::Error;

/// Usage hint returned for unknown media kinds and operations.
pub const USAGE_HINT: &str = "Invalid endpoint! Use /api/[anime|manga]/[options|info|recommendations]";

/// Errors surfaced to callers of [`MetadataService`](crate::MetadataService).
///
/// The message is meant to be shown to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl MetadataError {
    pub fn invalid_endpoint() -> Self {
        Self::NotFound(USAGE_HINT.to_string())
    }
}
