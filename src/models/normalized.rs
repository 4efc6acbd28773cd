//! Normalized output models.
//!
//! Every field is subject to sparse omission: empty strings, zeros and absent
//! values are never serialized.

use serde::{Deserialize, Serialize};

use super::common::Image;
use super::sparse::is_omitted;

/// One flat tracklist entry, ready for a tag writer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizedTrack {
    /// Track title.
    #[serde(skip_serializing_if = "is_omitted")]
    pub title: String,

    /// Track artist, falling back to the album artist.
    #[serde(skip_serializing_if = "is_omitted")]
    pub artist: String,

    /// Track credits, `;`-separated.
    #[serde(skip_serializing_if = "is_omitted")]
    pub credits: String,

    /// Heading or index title the track belongs to.
    #[serde(skip_serializing_if = "is_omitted")]
    pub chapter: String,

    /// Disc number (1-indexed).
    #[serde(skip_serializing_if = "is_omitted")]
    pub discnumber: u32,

    /// Track number digits as printed ("05").
    #[serde(skip_serializing_if = "is_omitted")]
    pub trackno: String,

    /// Duration and source position ("4:35 / #A1").
    #[serde(skip_serializing_if = "is_omitted")]
    pub length: String,
}

/// A normalized track still carrying its grouping key.
///
/// The key only lives through flattening and merging; it is dropped by
/// [`FlattenedTrack::into_track`] before assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedTrack {
    /// Position with any sub-index suffix removed.
    pub key: String,

    /// The track record.
    pub track: NormalizedTrack,
}

impl FlattenedTrack {
    /// Drop the grouping key.
    pub fn into_track(self) -> NormalizedTrack {
        self.track
    }
}

/// The flat release record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizedRelease {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,

    /// `1` when tracks carry their own artists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compilation: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Credits, notes and companies text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub totaldiscs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tracks: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracklist: Option<Vec<NormalizedTrack>>,

    /// Canonical release page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub www: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u64>,
}

impl NormalizedRelease {
    /// Number of tracks in the record.
    pub fn track_count(&self) -> usize {
        self.tracklist.as_ref().map(|t| t.len()).unwrap_or(0)
    }

    /// Serialize to a JSON value.
    pub fn to_value(&self) -> serde_json::Value {
        // Plain strings, numbers and lists cannot fail to serialize.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
