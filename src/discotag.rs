//! Unified normalizer interface.
//!
//! This module provides a high-level, easy-to-use interface for turning
//! release documents, in whatever form the caller has them, into normalized
//! tagging records.

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use crate::converters;
use crate::error::Result;
use crate::models::{NormalizedRelease, RawRelease};
use crate::normalize;
use crate::options::NormalizeOptions;

/// Main normalizer interface.
///
/// # Example
///
/// ```rust
/// use discotag::{NormalizeOptions, Normalizer};
///
/// let normalizer = Normalizer::with_options(NormalizeOptions::new().with_multi_format(true));
/// let release = normalizer
///     .normalize_str(r#"{"id": 1, "title": "Album", "artists_sort": "Various", "tracklist": []}"#)
///     .unwrap();
/// assert_eq!(release.artist.as_deref(), Some("Various Artists"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with the given options.
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Enable or disable multi-format merging.
    pub fn set_multi_format(&mut self, multi_format: bool) {
        self.options.multi_format = multi_format;
    }

    /// Normalize an already typed release.
    pub fn normalize(&self, raw: &RawRelease) -> NormalizedRelease {
        normalize::normalize_release(raw, &self.options)
    }

    /// Validate and normalize a JSON release document.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::ReleaseDataIncomplete`] when the tracklist is
    /// missing and [`NormalizeError::MalformedTracklistNode`] when a node has
    /// no valid type tag.
    ///
    /// [`NormalizeError::ReleaseDataIncomplete`]: crate::NormalizeError::ReleaseDataIncomplete
    /// [`NormalizeError::MalformedTracklistNode`]: crate::NormalizeError::MalformedTracklistNode
    pub fn normalize_value(&self, json: &Value) -> Result<NormalizedRelease> {
        let raw = converters::parse_release(json)?;
        debug!(
            "Parsed release {:?} with {} tracklist nodes",
            raw.id,
            raw.tracklist.len()
        );
        Ok(self.normalize(&raw))
    }

    /// Parse and normalize a JSON release document.
    pub fn normalize_str(&self, json: &str) -> Result<NormalizedRelease> {
        let value: Value = serde_json::from_str(json)?;
        self.normalize_value(&value)
    }

    /// Read, parse and normalize a JSON release document.
    pub fn normalize_reader<R: Read>(&self, reader: R) -> Result<NormalizedRelease> {
        let value: Value = serde_json::from_reader(reader)?;
        self.normalize_value(&value)
    }
}
