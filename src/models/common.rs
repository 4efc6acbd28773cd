//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// An artist credit as the catalog lists it.
///
/// Used both for performing artists (where `join` links the name to the next
/// credit) and for extra artists (where `role` says what they did).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArtistCredit {
    /// Canonical artist name, possibly carrying a " (N)" disambiguator.
    pub name: String,

    /// Artist name variation as printed on this release.
    pub anv: String,

    /// Connector to the following credit ("&", "feat.", ",").
    pub join: String,

    /// Role for extra artists ("Mixed By", "Written-By").
    pub role: String,
}

impl ArtistCredit {
    /// Create a credit with just a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the connector to the next credit.
    pub fn with_join<S: Into<String>>(mut self, join: S) -> Self {
        self.join = join.into();
        self
    }

    /// Set the name variation.
    pub fn with_anv<S: Into<String>>(mut self, anv: S) -> Self {
        self.anv = anv.into();
        self
    }

    /// Set the role.
    pub fn with_role<S: Into<String>>(mut self, role: S) -> Self {
        self.role = role.into();
        self
    }
}

/// A label or series entry with its catalog number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogEntry {
    /// Label or series name.
    pub name: String,

    /// Catalog number, or the position within a series.
    pub catno: String,
}

impl CatalogEntry {
    /// Create a new entry.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, catno: S2) -> Self {
        Self {
            name: name.into(),
            catno: catno.into(),
        }
    }
}

/// Image reference, passed through to the normalized record untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Image {
    /// "primary" or "secondary".
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,

    /// Full size URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,

    /// API resource URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_url: String,

    /// 150px thumbnail URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri150: String,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(uri: S, width: u32, height: u32) -> Self {
        Self {
            uri: uri.into(),
            width,
            height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_builder() {
        let credit = ArtistCredit::new("Jane Doe (2)")
            .with_anv("J. Doe")
            .with_join("&");
        assert_eq!(credit.name, "Jane Doe (2)");
        assert_eq!(credit.anv, "J. Doe");
        assert_eq!(credit.join, "&");
        assert!(credit.role.is_empty());
    }

    #[test]
    fn test_image_serializes_type_field() {
        let image = Image {
            type_: "primary".to_string(),
            ..Image::new("https://img.example/1.jpg", 600, 600)
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["type"], "primary");
        assert_eq!(json["width"], 600);
        assert!(json.get("uri150").is_none());
    }
}
