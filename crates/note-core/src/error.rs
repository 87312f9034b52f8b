//! Error types for the JSON interop paths.

use thiserror::Error;

/// Errors that can occur when building a [`Note`](crate::Note) from JSON.
///
/// The notation operations themselves are total: parsing notation text,
/// serializing, diffing, and patching never fail. Only the JSON conversion
/// paths can reject their input.
#[derive(Error, Debug)]
pub enum NoteError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The JSON root was not an object. A Note is a mapping at the top
    /// level, so scalar and array roots have no Note equivalent.
    #[error("root value must be a mapping, got {0}")]
    NotAMapping(&'static str),
}

/// Convenience alias used throughout note-core.
pub type Result<T> = std::result::Result<T, NoteError>;
