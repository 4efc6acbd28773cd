//! Release record assembly.

use crate::models::sparse::{present, present_opt};
use crate::models::{Format, NormalizedRelease, NormalizedTrack, RawRelease};
use crate::options::NormalizeOptions;

use super::credits::release_credits;
use super::field::{normalize_field, normalize_nested_field, normalize_str};

/// Pieces of one format entry: quantity and name, free text, descriptions.
fn format_pieces(format: &Format) -> [String; 3] {
    let name = normalize_str(&format.name).unwrap_or_default();
    let media = if format.qty > 1 {
        format!("{} x {}", format.qty, name)
    } else {
        name
    };

    [
        media,
        normalize_str(&format.text).unwrap_or_default(),
        normalize_field(&format.descriptions, ",").unwrap_or_default(),
    ]
}

/// All formats as one comma-joined string: `"2 x Vinyl,LP,Album,CD,Album"`.
pub fn media_format(formats: &[Format]) -> Option<String> {
    let joined = formats
        .iter()
        .flat_map(format_pieces)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    present(joined.trim().to_string())
}

/// Total discs: the format quantity, where 0 means one disc.
pub fn total_discs(format_quantity: Option<u64>) -> Option<u64> {
    format_quantity.map(|qty| if qty == 0 { 1 } else { qty })
}

/// Build the sparse release record from the raw document and the final
/// tracklist.
pub fn assemble_release(
    raw: &RawRelease,
    album_artist: &str,
    tracklist: Vec<NormalizedTrack>,
    options: &NormalizeOptions,
) -> NormalizedRelease {
    let sep = options.separator.as_str();

    NormalizedRelease {
        album: normalize_str(&raw.title),
        artist: present(album_artist.to_string()),
        catalog_number: normalize_nested_field(&raw.labels, |l| l.catno.as_str(), sep),
        compilation: raw.is_compilation().then_some(1),
        country: normalize_str(&raw.country),
        credits: present(release_credits(raw)),
        format: media_format(&raw.formats),
        genre: normalize_field(&raw.genres, sep),
        images: Some(raw.images.clone()),
        master_id: present_opt(raw.master_id),
        publisher: normalize_nested_field(&raw.labels, |l| l.name.as_str(), sep),
        release_id: present_opt(raw.id),
        series: normalize_nested_field(&raw.series, |s| s.name.as_str(), sep),
        series_number: normalize_nested_field(&raw.series, |s| s.catno.as_str(), sep),
        styles: normalize_field(&raw.styles, sep),
        totaldiscs: present_opt(total_discs(raw.format_quantity)),
        total_tracks: present(tracklist.len()),
        tracklist: Some(tracklist),
        www: present_opt(raw.id).map(|id| options.release_url(id)),
        year: present_opt(raw.year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;

    fn format(qty: u32, name: &str, text: &str, descriptions: &[&str]) -> Format {
        Format {
            qty,
            name: name.to_string(),
            text: text.to_string(),
            descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_media_format() {
        let formats = vec![
            format(2, "Vinyl", "180g", &["LP", "Album"]),
            format(1, "CD", "", &["Album"]),
        ];
        assert_eq!(
            media_format(&formats),
            Some("2 x Vinyl,180g,LP,Album,CD,Album".to_string())
        );
        assert_eq!(media_format(&[]), None);
        assert_eq!(
            media_format(&[format(0, "File", "", &[])]),
            Some("File".to_string())
        );
    }

    #[test]
    fn test_total_discs() {
        assert_eq!(total_discs(Some(0)), Some(1));
        assert_eq!(total_discs(Some(3)), Some(3));
        assert_eq!(total_discs(None), None);
    }

    #[test]
    fn test_assemble_sparse_release() {
        let mut raw = RawRelease::new(1234, "Album (2)");
        raw.labels = vec![CatalogEntry::new("Warp Records", "WARP 1")];
        raw.genres = vec!["Electronic".to_string(), "Jazz".to_string()];
        raw.year = Some(0);
        raw.master_id = Some(0);
        raw.format_quantity = Some(0);

        let release = assemble_release(&raw, "Artist", Vec::new(), &NormalizeOptions::default());
        assert_eq!(release.album.as_deref(), Some("Album"));
        assert_eq!(release.catalog_number.as_deref(), Some("WARP 1"));
        assert_eq!(release.publisher.as_deref(), Some("Warp Records"));
        assert_eq!(release.genre.as_deref(), Some("Electronic\\\\Jazz"));
        assert_eq!(release.totaldiscs, Some(1));
        assert_eq!(release.year, None);
        assert_eq!(release.master_id, None);
        assert_eq!(release.total_tracks, None);
        assert_eq!(release.compilation, None);
        assert_eq!(release.credits, None);
        assert_eq!(release.series, None);
        assert_eq!(release.images, Some(Vec::new()));
        assert_eq!(
            release.www.as_deref(),
            Some("https://www.discogs.com/release/1234")
        );
    }
}
