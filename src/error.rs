//! Error types for the docweave library.

use std::io;
use thiserror::Error;

/// Result type alias for docweave operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document reassembly.
///
/// Only document-level failures appear here; a failure scoped to a single
/// image never aborts a run — it is reported as an
/// [`ImageNotice`](crate::model::ImageNotice) on the assembled document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout input file does not exist.
    #[error("Layout file not found: {0}")]
    FileNotFound(String),

    /// The extraction collaborator could not open or parse its source.
    #[error("Layout extraction error: {0}")]
    Layout(String),

    /// Error decoding a serialized layout dump.
    #[error("Layout decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page number is out of range.
    #[error("Page {0} is out of range (layout has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error during rendering of the assembled document.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
