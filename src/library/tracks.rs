use std::cmp::Ordering;

use super::filter::{has_extension, is_excluded};
use super::model::TrackRecord;
use super::title::parse_title;
use crate::config::{LibrarySettings, normalized_extensions};

/// `<base_url><folder>/<file>` with both segments percent-encoded.
///
/// `base_url` is used verbatim and is expected to end with `/`.
pub fn asset_url(base_url: &str, folder: &str, file: &str) -> String {
    format!(
        "{base_url}{}/{}",
        urlencoding::encode(folder),
        urlencoding::encode(file)
    )
}

/// Build track records for every qualifying audio file in an album folder.
///
/// The result is in `files` order; run [`order_tracks`] before presenting it.
pub fn collect_tracks(
    album_name: &str,
    files: &[String],
    base_url: &str,
    settings: &LibrarySettings,
) -> Vec<TrackRecord> {
    let audio_exts = normalized_extensions(&settings.audio_extensions);

    files
        .iter()
        .filter(|f| has_extension(f, &audio_exts))
        .filter(|f| !is_excluded(f, &settings.exclude_keywords))
        .map(|f| {
            let parsed = parse_title(f);
            TrackRecord {
                title: parsed.title,
                track_number: parsed.track_number,
                url: asset_url(base_url, album_name, f),
            }
        })
        .collect()
}

/// Numbered tracks first (ascending), then unnumbered ones; title breaks ties.
///
/// Stable: tracks that compare equal keep their relative order.
pub fn order_tracks(tracks: &mut [TrackRecord]) {
    tracks.sort_by(compare_tracks);
}

fn compare_tracks(a: &TrackRecord, b: &TrackRecord) -> Ordering {
    a.track_number
        .is_none()
        .cmp(&b.track_number.is_none())
        .then(a.track_number.cmp(&b.track_number))
        .then_with(|| a.title.cmp(&b.title))
}
