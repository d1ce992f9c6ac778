use tracing::debug;

use super::cover::select_cover;
use super::model::{CollectionRecord, ReleaseType};
use super::tracks::{asset_url, collect_tracks, order_tracks};
use crate::config::{Settings, normalized_extensions};

/// Turn one album folder's file listing into a release record.
///
/// Returns `None` when no qualifying track is left, so folders holding only
/// artwork or excluded mixes never reach the manifest.
pub fn assemble(album_name: &str, files: &[String], settings: &Settings) -> Option<CollectionRecord> {
    let base_url = settings.catalog.base_url.as_str();

    let mut tracks = collect_tracks(album_name, files, base_url, &settings.library);
    if tracks.is_empty() {
        debug!(album = album_name, "no qualifying tracks, skipping");
        return None;
    }
    order_tracks(&mut tracks);

    let image_exts = normalized_extensions(&settings.library.image_extensions);
    let cover_url = select_cover(album_name, files, &image_exts)
        .map(|cover| asset_url(base_url, album_name, cover));

    let release_type = ReleaseType::for_track_count(tracks.len());
    debug!(
        album = album_name,
        tracks = tracks.len(),
        ?release_type,
        has_cover = cover_url.is_some(),
        "assembled collection"
    );

    Some(CollectionRecord {
        album_name: album_name.to_string(),
        artist: settings.catalog.artist.clone(),
        release_type,
        cover_url,
        tracks,
    })
}
