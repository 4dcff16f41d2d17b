//! Decode-side error types.

use thiserror::Error;

/// Decode errors - raised when a JSON payload does not match the post shape.
///
/// Both a missing required key and a wrongly typed value surface here.
/// The error propagates unchanged to the caller; there is no encode-time
/// counterpart because every valid [`crate::Post`] can be encoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed post object: {0}")]
    Malformed(#[from] serde_json::Error),
}
