//! Error types for release normalization.

use thiserror::Error;

/// Main error type for all normalization operations.
///
/// Network failures never show up here: fetching the release document is the
/// caller's job, so every variant describes a problem with the document itself.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A tracklist node is not shaped like a track, heading or index.
    #[error("Malformed tracklist node at {path}: {reason}")]
    MalformedTracklistNode {
        /// Index path of the node, e.g. `tracklist[3].sub_tracks[1]`.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A field the engine cannot work without is missing or has the wrong shape.
    #[error("Release data incomplete: {0}")]
    ReleaseDataIncomplete(String),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O operation failed while reading a document.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NormalizeError {
    pub(crate) fn malformed<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        NormalizeError::MalformedTracklistNode {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
