use serde::Serialize;

/// One playable song within a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub title: String,
    /// 1-based position parsed from a `NN - ` filename prefix.
    pub track_number: Option<u32>,
    pub url: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum ReleaseType {
    Album,
    Single,
}

impl ReleaseType {
    /// A release with exactly one track is a single; anything else is an album.
    pub fn for_track_count(count: usize) -> Self {
        if count == 1 { Self::Single } else { Self::Album }
    }
}

/// One album or single, built from one folder under the catalog root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionRecord {
    pub album_name: String,
    pub artist: String,
    #[serde(rename = "type")]
    pub release_type: ReleaseType,
    pub cover_url: Option<String>,
    /// Never empty.
    pub tracks: Vec<TrackRecord>,
}
