//! Tracklist models.
//!
//! A catalog tracklist is a flat list of nodes, some of which (index tracks)
//! nest their own sub-tracks and some of which (headings) only label what
//! follows them.

use serde::{Deserialize, Serialize};

use super::common::ArtistCredit;

/// A single track or sub-track entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawTrack {
    /// Track title.
    pub title: String,

    /// Free-form position string ("A1", "2-05", "CD1-3").
    pub position: String,

    /// Duration as printed ("4:35"), empty when unknown.
    pub duration: String,

    /// Track artists; empty when the album artist applies.
    pub artists: Vec<ArtistCredit>,

    /// Extra artists credited on this track.
    pub extraartists: Vec<ArtistCredit>,
}

impl RawTrack {
    /// Create a track with a position and title.
    pub fn new<S1: Into<String>, S2: Into<String>>(position: S1, title: S2) -> Self {
        Self {
            position: position.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the duration.
    pub fn with_duration<S: Into<String>>(mut self, duration: S) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the track artists.
    pub fn with_artists(mut self, artists: Vec<ArtistCredit>) -> Self {
        self.artists = artists;
        self
    }

    /// Set the extra artists.
    pub fn with_extraartists(mut self, extraartists: Vec<ArtistCredit>) -> Self {
        self.extraartists = extraartists;
        self
    }

    /// Whether the track names its own performers.
    pub fn has_artists(&self) -> bool {
        !self.artists.is_empty()
    }
}

/// One entry of a release tracklist, tagged by the catalog's `type_` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type_", rename_all = "lowercase")]
pub enum TracklistNode {
    /// A playable track.
    Track(RawTrack),

    /// A section label applying to the tracks that follow it.
    Heading {
        #[serde(default)]
        title: String,
    },

    /// A grouping track (a suite, a medley) whose parts are the sub-tracks.
    Index {
        #[serde(default)]
        title: String,
        #[serde(default)]
        sub_tracks: Vec<RawTrack>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_deserializes_by_type_tag() {
        let node: TracklistNode = serde_json::from_value(json!({
            "type_": "index",
            "title": "Suite",
            "sub_tracks": [{ "type_": "track", "position": "3a", "title": "Part I" }]
        }))
        .unwrap();

        match &node {
            TracklistNode::Index { title, sub_tracks } => {
                assert_eq!(title, "Suite");
                assert_eq!(sub_tracks[0].position, "3a");
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_has_artists() {
        let track = RawTrack::new("A1", "Intro");
        assert!(!track.has_artists());
        let track = track.with_artists(vec![ArtistCredit::new("Someone")]);
        assert!(track.has_artists());
    }
}
