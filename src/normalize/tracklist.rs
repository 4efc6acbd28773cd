//! Tracklist flattening.
//!
//! Headings and index tracks label the tracks that follow them. The current
//! label (the chapter) is threaded through a fold over the top-level nodes and
//! stays in effect until the next heading or index replaces it.

use tracing::debug;

use crate::models::{FlattenedTrack, NormalizedTrack, RawTrack, TracklistNode};

use super::artist::track_artist;
use super::credits::track_credits;
use super::field::normalize_str;
use super::patterns::strip_original_mix;
use super::position::PositionInfo;

/// Placeholder duration for tracks without one.
pub const UNKNOWN_DURATION: &str = "-:--";

/// `"<duration> / #<position>"`, or the placeholder when the duration is unknown.
pub fn length_tag(duration: &str, position: &str) -> String {
    let duration = duration.trim();
    if duration.is_empty() {
        format!("{} / #{}", UNKNOWN_DURATION, position)
    } else {
        format!("{} / #{}", duration, position)
    }
}

/// Flatten one track into a record under `chapter`.
fn flatten_track(
    track: &RawTrack,
    chapter: &str,
    album_artist: &str,
    top_level: bool,
) -> FlattenedTrack {
    let position = PositionInfo::parse(&track.position);

    let title = normalize_str(&track.title).unwrap_or_default();
    let title = if top_level {
        strip_original_mix(&title)
    } else {
        title
    };

    FlattenedTrack {
        key: position.key,
        track: NormalizedTrack {
            title,
            artist: track_artist(&track.artists, album_artist),
            credits: track_credits(&track.extraartists),
            chapter: chapter.to_string(),
            discnumber: position.discnumber,
            trackno: position.trackno,
            length: length_tag(&track.duration, &track.position),
        },
    }
}

/// Flatten a tracklist into records in encounter order.
///
/// Index sub-tracks take the place of their parent. Every record keeps its
/// position key for an optional merge step.
pub fn flatten_tracklist(nodes: &[TracklistNode], album_artist: &str) -> Vec<FlattenedTrack> {
    let (_, tracks) = nodes.iter().fold(
        (String::new(), Vec::with_capacity(nodes.len())),
        |(chapter, mut tracks), node| match node {
            TracklistNode::Heading { title } => (normalize_str(title).unwrap_or_default(), tracks),
            TracklistNode::Index { title, sub_tracks } => {
                let chapter = normalize_str(title).unwrap_or_default();
                tracks.extend(
                    sub_tracks
                        .iter()
                        .map(|sub| flatten_track(sub, &chapter, album_artist, false)),
                );
                (chapter, tracks)
            }
            TracklistNode::Track(track) => {
                tracks.push(flatten_track(track, &chapter, album_artist, true));
                (chapter, tracks)
            }
        },
    );

    debug!("Flattened {} tracklist nodes into {} tracks", nodes.len(), tracks.len());
    tracks
}
