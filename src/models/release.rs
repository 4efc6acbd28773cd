//! Raw release models.
//!
//! These mirror the catalog's release document closely. The normalization
//! engine only ever reads them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::converters;
use crate::error::NormalizeError;

use super::common::{ArtistCredit, CatalogEntry, Image};
use super::tracklist::TracklistNode;

/// A physical or digital format entry ("2 x Vinyl, LP, Album").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Format {
    /// Number of items of this format.
    pub qty: u32,

    /// Format name ("Vinyl", "CD", "File").
    pub name: String,

    /// Free text printed next to the format ("180g").
    pub text: String,

    /// Format descriptions ("LP", "Album", "Reissue").
    pub descriptions: Vec<String>,
}

/// A company credit (pressing plant, publisher, studio).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Company {
    /// Company name, possibly carrying a " (N)" disambiguator.
    pub name: String,

    /// What the company did ("Pressed By", "Phonographic Copyright (p)").
    pub entity_type_name: String,

    /// Catalog number attached to the credit.
    pub catno: String,
}

/// A full release document.
///
/// Deserialization goes through [`converters::parse_release`], so a document
/// without a tracklist is rejected the same way on every input path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Value")]
pub struct RawRelease {
    /// Catalog release ID.
    pub id: Option<u64>,

    /// Release title.
    pub title: String,

    /// Sortable album artist string ("Beatles, The", "Various").
    pub artists_sort: String,

    /// Labels with catalog numbers.
    pub labels: Vec<CatalogEntry>,

    /// Series with series numbers.
    pub series: Vec<CatalogEntry>,

    /// Tracklist nodes in catalog order.
    pub tracklist: Vec<TracklistNode>,

    /// Formats in catalog order.
    pub formats: Vec<Format>,

    /// Release-wide extra artists.
    pub extraartists: Vec<ArtistCredit>,

    /// Company credits.
    pub companies: Vec<Company>,

    /// Free-form release notes.
    pub notes: String,

    /// Cover and sleeve images.
    pub images: Vec<Image>,

    /// Master release ID.
    pub master_id: Option<u64>,

    /// Country of release.
    pub country: String,

    /// Genres.
    pub genres: Vec<String>,

    /// Styles.
    pub styles: Vec<String>,

    /// Release year, 0 when unknown.
    pub year: Option<u64>,

    /// Total number of format items.
    pub format_quantity: Option<u64>,
}

impl RawRelease {
    /// Create a release with an ID and title.
    pub fn new<S: Into<String>>(id: u64, title: S) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Whether any top-level track names its own performers.
    pub fn is_compilation(&self) -> bool {
        self.tracklist.iter().any(|node| match node {
            TracklistNode::Track(track) => track.has_artists(),
            _ => false,
        })
    }
}

impl TryFrom<Value> for RawRelease {
    type Error = NormalizeError;

    fn try_from(json: Value) -> Result<Self, Self::Error> {
        converters::parse_release(&json)
    }
}
