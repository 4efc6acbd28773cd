//! Named pattern extractors.
//!
//! Catalog text is loosely formatted, so every textual heuristic of the
//! engine lives here as a small function over one compiled expression.
//! Digit classes are spelled `[0-9]` because `\d` is Unicode-aware in `regex`.

use once_cell::sync::Lazy;
use regex::Regex;

static DISAMBIGUATOR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \([0-9]+\)$").expect("valid disambiguator regex"));

static ALBUM_ARTIST_DISAMBIGUATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \([0-9]{1,2}\)").expect("valid album artist regex"));

static THE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r", The$").expect("valid article regex"));

static POSITION_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)(?:[a-z]|\.[0-9]+)$").expect("valid position key regex"));

static DISC_TRACK_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^0-9]*([0-9]+)[.-].+$").expect("valid disc/track regex"));

static PURE_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid numeric regex"));

static SIDE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^0-9]+?)-*[0-9]+").expect("valid side label regex"));

static TRACK_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+?[.-]([0-9]+)").expect("valid track number regex"));

static FEATURING_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?: feat| feat\.| featuring| ,|&| &,|,&)$").expect("valid featuring regex")
});

static ORIGINAL_MIX_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\((?:Original Mix|Original)\)\s*$").expect("valid original mix regex")
});

static POSITION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" / #.*$").expect("valid position tag regex"));

/// Strip a trailing " (N)" disambiguator: `"Artist Name (2)"` → `"Artist Name"`.
pub fn strip_disambiguator(value: &str) -> String {
    DISAMBIGUATOR_SUFFIX.replace(value, "").into_owned()
}

/// Remove the first 1–2 digit " (N)" group anywhere in an album artist.
pub fn strip_album_artist_disambiguator(value: &str) -> String {
    ALBUM_ARTIST_DISAMBIGUATOR.replace(value, "").into_owned()
}

/// Move a trailing ", The" article to the front: `"Beatles, The"` → `"The Beatles"`.
pub fn front_article(value: &str) -> String {
    if THE_SUFFIX.is_match(value) {
        format!("The {}", THE_SUFFIX.replace(value, ""))
    } else {
        value.to_string()
    }
}

/// Grouping key of a position: a trailing sub-index letter or `.N` is dropped.
pub fn position_key(position: &str) -> String {
    match POSITION_KEY.captures(position) {
        Some(caps) => caps[1].to_string(),
        None => position.to_string(),
    }
}

/// Isolate the token that identifies the disc within a position string.
///
/// `"CD2-05"` → `"2"`, `"B3"` → `"B"`, `"12"` → `""` (a bare track number).
pub fn disc_token(position: &str) -> String {
    let isolated = if PURE_NUMERIC.is_match(position) {
        String::new()
    } else if let Some(caps) = DISC_TRACK_FORM.captures(position) {
        caps[1].to_string()
    } else {
        position.to_string()
    };

    let token = match SIDE_LABEL.captures(&isolated) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            format!(
                "{}{}{}",
                &isolated[..whole.start],
                &caps[1],
                &isolated[whole.end..]
            )
        }
        None => isolated,
    };

    token.trim().to_string()
}

/// Digits following the first `.` or `-` separator: `"2-05"` → `"05"`.
pub fn track_number(position: &str) -> String {
    TRACK_NUMBER
        .captures(position)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Remove a dangling connector left at the end of an artist string.
pub fn strip_featuring_suffix(artist: &str) -> String {
    FEATURING_SUFFIX.replace(artist, "").trim_end().to_string()
}

/// Remove a trailing "(Original Mix)" or "(Original)" from a title.
pub fn strip_original_mix(title: &str) -> String {
    ORIGINAL_MIX_SUFFIX.replace(title, "").trim().to_string()
}

/// Remove the `" / #<position>"` tag from a length value.
pub fn strip_position_tag(length: &str) -> String {
    POSITION_TAG.replace(length, "").into_owned()
}
