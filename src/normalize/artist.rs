//! Artist name resolution.

use crate::models::ArtistCredit;

use super::field::normalize_str;
use super::patterns::{
    front_article, strip_album_artist_disambiguator, strip_disambiguator, strip_featuring_suffix,
};

/// Display name for compilations.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// Map the catalog's various-artists tokens to the display name.
pub fn various_artists(artist: String) -> String {
    match artist.as_str() {
        "va" | "Various" => VARIOUS_ARTISTS.to_string(),
        _ => artist,
    }
}

/// Display name of one credit: the name variation wins over the canonical
/// name, and the disambiguator is dropped.
pub fn credit_name(credit: &ArtistCredit) -> String {
    let name = normalize_str(&credit.anv)
        .or_else(|| normalize_str(&credit.name))
        .unwrap_or_default();
    strip_disambiguator(&name).trim().to_string()
}

/// Join a list of credits with their connectors.
///
/// `[Foo "&", Bar "feat.", Baz ""]` → `"Foo & Bar feat. Baz"`.
pub fn join_artists(credits: &[ArtistCredit]) -> String {
    let joined = credits
        .iter()
        .flat_map(|credit| [credit_name(credit), credit.join.trim().to_string()])
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    various_artists(joined.trim().to_string())
}

/// Artist string for a track: its own credits when it has any, otherwise the
/// album artist. A connector left dangling at the end is removed.
pub fn track_artist(credits: &[ArtistCredit], album_artist: &str) -> String {
    if credits.is_empty() {
        strip_featuring_suffix(album_artist)
    } else {
        strip_featuring_suffix(&join_artists(credits))
    }
}

/// Album artist from the sortable artist string.
///
/// `"Beatles, The"` → `"The Beatles"`, `"Prince (2)"` → `"Prince"`,
/// `"Various"` → `"Various Artists"`.
pub fn album_artist(artists_sort: &str) -> String {
    let artist = strip_album_artist_disambiguator(artists_sort);
    let artist = strip_disambiguator(&artist);
    various_artists(front_article(artist.trim()))
}
