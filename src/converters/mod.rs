//! JSON to model converters.
//!
//! This module validates a raw catalog release document and converts it into
//! the typed [`RawRelease`] model. The catalog is loose with types (IDs and
//! quantities show up both as numbers and as strings), so scalar fields are
//! read leniently. The tracklist is the one place where shape is enforced:
//! without it, or with nodes of unknown type, no meaningful record can be
//! built.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{NormalizeError, Result};
use crate::models::{
    ArtistCredit, CatalogEntry, Company, Format, Image, RawRelease, RawTrack, TracklistNode,
};

/// Get string from JSON, returning empty string if not found.
///
/// Numbers are rendered as text since catalog numbers are sometimes numeric.
fn get_str(json: &Value, key: &str) -> String {
    match json.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Get a non-negative integer from JSON (handles both numbers and numeric strings).
fn get_u64(json: &Value, key: &str) -> Option<u64> {
    json.get(key).and_then(|v| {
        if let Some(n) = v.as_u64() {
            Some(n)
        } else if let Some(s) = v.as_str() {
            s.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Get u32 from JSON, 0 if not found.
fn get_u32(json: &Value, key: &str) -> u32 {
    get_u64(json, key)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Get an array from JSON, empty if not found.
fn get_array<'a>(json: &'a Value, key: &str) -> &'a [Value] {
    json.get(key)
        .and_then(|v| v.as_array())
        .map(|arr| arr.as_slice())
        .unwrap_or(&[])
}

/// Get a list of strings from JSON.
fn get_strings(json: &Value, key: &str) -> Vec<String> {
    get_array(json, key)
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.to_string())
        .collect()
}

/// Parse an artist credit.
fn parse_artist_credit(json: &Value) -> ArtistCredit {
    ArtistCredit {
        name: get_str(json, "name"),
        anv: get_str(json, "anv"),
        join: get_str(json, "join"),
        role: get_str(json, "role"),
    }
}

fn parse_artist_credits(json: &Value, key: &str) -> Vec<ArtistCredit> {
    get_array(json, key).iter().map(parse_artist_credit).collect()
}

fn parse_catalog_entries(json: &Value, key: &str) -> Vec<CatalogEntry> {
    get_array(json, key)
        .iter()
        .map(|entry| CatalogEntry::new(get_str(entry, "name"), get_str(entry, "catno")))
        .collect()
}

fn parse_format(json: &Value) -> Format {
    Format {
        qty: get_u32(json, "qty"),
        name: get_str(json, "name"),
        text: get_str(json, "text"),
        descriptions: get_strings(json, "descriptions"),
    }
}

fn parse_company(json: &Value) -> Company {
    Company {
        name: get_str(json, "name"),
        entity_type_name: get_str(json, "entity_type_name"),
        catno: get_str(json, "catno"),
    }
}

fn parse_image(json: &Value) -> Image {
    Image {
        type_: get_str(json, "type"),
        uri: get_str(json, "uri"),
        resource_url: get_str(json, "resource_url"),
        uri150: get_str(json, "uri150"),
        width: get_u32(json, "width"),
        height: get_u32(json, "height"),
    }
}

/// Parse the fields shared by tracks and sub-tracks.
fn parse_raw_track(json: &Value) -> RawTrack {
    RawTrack {
        title: get_str(json, "title"),
        position: get_str(json, "position"),
        duration: get_str(json, "duration"),
        artists: parse_artist_credits(json, "artists"),
        extraartists: parse_artist_credits(json, "extraartists"),
    }
}

/// Read the `type_` tag of a tracklist node.
fn node_type<'a>(json: &'a Value, path: &str) -> Result<&'a str> {
    if !json.is_object() {
        return Err(NormalizeError::malformed(path, "node is not an object"));
    }

    match json.get("type_") {
        Some(Value::String(kind)) => Ok(kind.as_str()),
        Some(_) => Err(NormalizeError::malformed(path, "type_ is not a string")),
        None => Err(NormalizeError::malformed(path, "missing type_ tag")),
    }
}

/// Parse the sub-tracks of an index node, keeping only tracks.
fn parse_sub_tracks(json: &Value, path: &str) -> Result<Vec<RawTrack>> {
    let mut sub_tracks = Vec::new();

    for (i, sub) in get_array(json, "sub_tracks").iter().enumerate() {
        let sub_path = format!("{}.sub_tracks[{}]", path, i);
        match node_type(sub, &sub_path)? {
            "track" => sub_tracks.push(parse_raw_track(sub)),
            other => debug!("Skipping {} sub-track at {}", other, sub_path),
        }
    }

    Ok(sub_tracks)
}

/// Parse one tracklist node.
pub fn parse_tracklist_node(json: &Value, path: &str) -> Result<TracklistNode> {
    match node_type(json, path)? {
        "track" => Ok(TracklistNode::Track(parse_raw_track(json))),
        "heading" => Ok(TracklistNode::Heading {
            title: get_str(json, "title"),
        }),
        "index" => {
            if json.get("sub_tracks").is_none() {
                warn!("Index node at {} has no sub_tracks", path);
            }
            Ok(TracklistNode::Index {
                title: get_str(json, "title"),
                sub_tracks: parse_sub_tracks(json, path)?,
            })
        }
        other => Err(NormalizeError::malformed(
            path,
            format!("unknown node type {:?}", other),
        )),
    }
}

/// Parse the tracklist of a release document.
pub fn parse_tracklist(json: &Value) -> Result<Vec<TracklistNode>> {
    let nodes = match json.get("tracklist") {
        Some(Value::Array(nodes)) => nodes,
        Some(_) => {
            return Err(NormalizeError::ReleaseDataIncomplete(
                "tracklist is not an array".to_string(),
            ))
        }
        None => {
            return Err(NormalizeError::ReleaseDataIncomplete(
                "missing tracklist".to_string(),
            ))
        }
    };

    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| parse_tracklist_node(node, &format!("tracklist[{}]", i)))
        .collect()
}

/// Parse a release from raw JSON.
pub fn parse_release(json: &Value) -> Result<RawRelease> {
    if !json.is_object() {
        return Err(NormalizeError::ReleaseDataIncomplete(
            "release document is not an object".to_string(),
        ));
    }

    let tracklist = parse_tracklist(json)?;
    let id = get_u64(json, "id");
    if id.is_none() {
        debug!("Release document has no id");
    }

    Ok(RawRelease {
        id,
        title: get_str(json, "title"),
        artists_sort: get_str(json, "artists_sort"),
        labels: parse_catalog_entries(json, "labels"),
        series: parse_catalog_entries(json, "series"),
        tracklist,
        formats: get_array(json, "formats").iter().map(parse_format).collect(),
        extraartists: parse_artist_credits(json, "extraartists"),
        companies: get_array(json, "companies").iter().map(parse_company).collect(),
        notes: get_str(json, "notes"),
        images: get_array(json, "images").iter().map(parse_image).collect(),
        master_id: get_u64(json, "master_id"),
        country: get_str(json, "country"),
        genres: get_strings(json, "genres"),
        styles: get_strings(json, "styles"),
        year: get_u64(json, "year"),
        format_quantity: get_u64(json, "format_quantity"),
    })
}
