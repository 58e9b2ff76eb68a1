//! Error types for the richdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for richdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a document.
///
/// Rendering itself is infallible: malformed attributes, unknown node
/// types, and numeric coercion failures are data conditions that
/// degrade to empty output or a default, never to an error. Errors
/// only arise at the deserialization boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a document file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload is not valid JSON or does not match the document shape.
    #[error("Document parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
