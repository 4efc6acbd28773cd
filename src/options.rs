//! Normalization options.

use serde::{Deserialize, Serialize};

/// Separator tag writers use between values of a multi-value field.
pub const DEFAULT_SEPARATOR: &str = "\\\\";

/// Base URL of release pages on the catalog website.
pub const DEFAULT_RELEASE_BASE_URL: &str = "https://www.discogs.com/release";

/// Options controlling how a release is normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Merge tracks listed once per format (vinyl side + CD) into one record.
    pub multi_format: bool,

    /// Separator for multi-value fields (genres, styles, labels).
    pub separator: String,

    /// Release page base URL used for the `www` field.
    pub release_base_url: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            multi_format: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            release_base_url: DEFAULT_RELEASE_BASE_URL.to_string(),
        }
    }
}

impl NormalizeOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable multi-format merging.
    pub fn with_multi_format(mut self, multi_format: bool) -> Self {
        self.multi_format = multi_format;
        self
    }

    /// Set the multi-value separator.
    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the release page base URL. A trailing slash is ignored.
    pub fn with_release_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.release_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the release page URL for an ID.
    pub fn release_url(&self, id: u64) -> String {
        format!("{}/{}", self.release_base_url.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NormalizeOptions::default();
        assert!(!options.multi_format);
        assert_eq!(options.separator, "\\\\");
        assert_eq!(options.separator.len(), 2);
        assert_eq!(options.release_url(249504), "https://www.discogs.com/release/249504");
    }

    #[test]
    fn test_builder() {
        let options = NormalizeOptions::new()
            .with_multi_format(true)
            .with_separator("; ")
            .with_release_base_url("https://example.org/r/");
        assert!(options.multi_format);
        assert_eq!(options.separator, "; ");
        assert_eq!(options.release_url(7), "https://example.org/r/7");
    }

    #[test]
    fn test_deserialize_partial() {
        let options: NormalizeOptions = serde_json::from_str(r#"{"multi_format": true}"#).unwrap();
        assert!(options.multi_format);
        assert_eq!(options.separator, DEFAULT_SEPARATOR);
    }
}
