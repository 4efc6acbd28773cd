//! Multi-format merging.
//!
//! Some releases list the same songs once per format (the vinyl sides, then
//! the CD). Records sharing a position key are folded into one.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{FlattenedTrack, NormalizedTrack};

use super::patterns::strip_position_tag;
use super::tracklist::UNKNOWN_DURATION;

/// `curr` alone when both sides agree, `"prev / curr"` otherwise.
fn collapse(prev: &str, curr: &str) -> String {
    if prev == curr {
        curr.to_string()
    } else {
        format!("{} / {}", prev, curr)
    }
}

/// Merge two records of the same logical track.
fn merge_pair(prev: FlattenedTrack, curr: FlattenedTrack) -> FlattenedTrack {
    let (prev, curr_key, curr) = (prev.track, curr.key, curr.track);

    let real_length = if prev.length.starts_with(UNKNOWN_DURATION) {
        &curr.length
    } else {
        &prev.length
    };
    let length = format!(
        "{} / #{}-{}",
        strip_position_tag(real_length),
        curr.discnumber,
        curr.trackno
    );

    FlattenedTrack {
        key: curr_key,
        track: NormalizedTrack {
            title: format!("{} / {}", prev.title, curr.title),
            artist: collapse(&prev.artist, &curr.artist),
            credits: collapse(&prev.credits, &curr.credits),
            chapter: curr.chapter,
            discnumber: curr.discnumber,
            trackno: curr.trackno,
            length,
        },
    }
}

/// Group records by key (first-seen order) and fold each group into one.
pub fn merge_formats(tracks: Vec<FlattenedTrack>) -> Vec<FlattenedTrack> {
    let total = tracks.len();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<FlattenedTrack>> = Vec::new();

    for track in tracks {
        match index.get(&track.key) {
            Some(&slot) => groups[slot].push(track),
            None => {
                index.insert(track.key.clone(), groups.len());
                groups.push(vec![track]);
            }
        }
    }

    let merged: Vec<FlattenedTrack> = groups
        .into_iter()
        .filter_map(|group| group.into_iter().reduce(merge_pair))
        .collect();

    debug!("Merged {} tracks into {} multi-format records", total, merged.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(key: &str, title: &str, artist: &str, disc: u32, trackno: &str, length: &str) -> FlattenedTrack {
        FlattenedTrack {
            key: key.to_string(),
            track: NormalizedTrack {
                title: title.to_string(),
                artist: artist.to_string(),
                credits: String::new(),
                chapter: String::new(),
                discnumber: disc,
                trackno: trackno.to_string(),
                length: length.to_string(),
            },
        }
    }

    #[test]
    fn test_merge_same_key() {
        let tracks = vec![
            flat("1-1", "Song (CD)", "Band", 1, "1", "4:00 / #1-1"),
            flat("1-1", "Song (Vinyl)", "Band", 1, "1", "-:-- / #1-1"),
        ];

        let merged = merge_formats(tracks);
        assert_eq!(merged.len(), 1);
        let track = &merged[0].track;
        assert_eq!(track.title, "Song (CD) / Song (Vinyl)");
        assert_eq!(track.artist, "Band");
        assert_eq!(track.length, "4:00 / #1-1");
    }

    #[test]
    fn test_merge_takes_real_duration_from_either_side() {
        let tracks = vec![
            flat("A1", "One", "Foo", 1, "", "-:-- / #A1"),
            flat("A1", "Uno", "Bar", 2, "3", "3:10 / #A1a"),
        ];

        let merged = merge_formats(tracks);
        let track = &merged[0].track;
        assert_eq!(track.artist, "Foo / Bar");
        assert_eq!(track.discnumber, 2);
        assert_eq!(track.trackno, "3");
        assert_eq!(track.length, "3:10 / #2-3");

        let both_unknown = merge_formats(vec![
            flat("B1", "x", "a", 1, "1", "-:-- / #B1"),
            flat("B1", "y", "a", 1, "1", "-:-- / #B1"),
        ]);
        assert_eq!(both_unknown[0].track.length, "-:-- / #1-1");
    }

    #[test]
    fn test_merge_preserves_first_seen_order() {
        let tracks = vec![
            flat("B1", "b", "x", 1, "", "-:-- / #B1"),
            flat("A1", "a", "x", 1, "", "-:-- / #A1"),
            flat("B1", "b2", "x", 1, "", "-:-- / #B1"),
            flat("C1", "c", "x", 2, "", "-:-- / #C1"),
        ];

        let merged = merge_formats(tracks);
        let titles: Vec<_> = merged.iter().map(|f| f.track.title.as_str()).collect();
        assert_eq!(titles, vec!["b / b2", "a", "c"]);
        // Single-member groups pass through untouched.
        assert_eq!(merged[1].track.length, "-:-- / #A1");
    }

    #[test]
    fn test_merge_three_members_folds_left() {
        let merged = merge_formats(vec![
            flat("1", "a", "x", 1, "1", "1:00 / #1"),
            flat("1", "b", "y", 1, "1", "-:-- / #1"),
            flat("1", "c", "y", 1, "1", "-:-- / #1"),
        ]);
        let track = &merged[0].track;
        assert_eq!(track.title, "a / b / c");
        assert_eq!(track.artist, "x / y / y");
        assert_eq!(track.length, "1:00 / #1-1");
    }

    #[test]
    fn test_merge_credits_collapse_or_concatenate() {
        let with_credits = |credits: &str| {
            let mut track = flat("A1", "Song", "Band", 1, "1", "-:-- / #A1");
            track.track.credits = credits.to_string();
            track
        };

        let merged = merge_formats(vec![with_credits("A (Mix)"), with_credits("B (Mix)")]);
        assert_eq!(merged[0].track.credits, "A (Mix) / B (Mix)");

        let merged = merge_formats(vec![with_credits("A (Mix)"), with_credits("A (Mix)")]);
        assert_eq!(merged[0].track.credits, "A (Mix)");
    }
}
