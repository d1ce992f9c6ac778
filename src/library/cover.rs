use std::path::Path;

use super::filter::has_extension;

/// Pick the cover image for an album folder.
///
/// An image named after the folder (case-insensitive, ignoring extension) wins;
/// otherwise the lexicographically first image is used. `None` when the folder
/// holds no image at all.
pub fn select_cover<'a>(album_name: &str, files: &'a [String], image_exts: &[String]) -> Option<&'a str> {
    let mut candidates: Vec<&'a str> = files
        .iter()
        .map(String::as_str)
        .filter(|f| has_extension(f, image_exts))
        .collect();
    candidates.sort_unstable();

    let album = album_name.to_lowercase();
    candidates
        .iter()
        .copied()
        .find(|c| stem(c).to_lowercase() == album)
        .or_else(|| candidates.first().copied())
}

fn stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}
