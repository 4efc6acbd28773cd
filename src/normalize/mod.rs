//! The release normalization engine.
//!
//! Turns a [`RawRelease`] into a flat [`NormalizedRelease`]:
//!
//! 1. the album artist is resolved from the sortable artist string,
//! 2. the tracklist is flattened with chapters threaded through,
//! 3. records listed once per format are optionally merged,
//! 4. the sparse release record is assembled.
//!
//! Everything here is a pure function of its input.

pub mod artist;
pub mod credits;
pub mod field;
pub mod merge;
pub mod patterns;
pub mod position;
pub mod release;
pub mod tracklist;

use tracing::debug;

use crate::models::{FlattenedTrack, NormalizedRelease, RawRelease};
use crate::options::NormalizeOptions;

pub use artist::{album_artist, join_artists, VARIOUS_ARTISTS};
pub use field::{normalize_field, normalize_nested_field};
pub use merge::merge_formats;
pub use position::{disc_number, PositionInfo};
pub use release::assemble_release;
pub use tracklist::flatten_tracklist;

/// Normalize a release document.
pub fn normalize_release(raw: &RawRelease, options: &NormalizeOptions) -> NormalizedRelease {
    let artist = album_artist(&raw.artists_sort);
    let flattened = flatten_tracklist(&raw.tracklist, &artist);

    let flattened = if options.multi_format {
        merge_formats(flattened)
    } else {
        flattened
    };

    let tracklist = flattened
        .into_iter()
        .map(FlattenedTrack::into_track)
        .collect();

    let release = assemble_release(raw, &artist, tracklist, options);
    debug!(
        "Normalized release {:?} with {} tracks",
        raw.id,
        release.track_count()
    );
    release
}
