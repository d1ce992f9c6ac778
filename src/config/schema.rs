use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/discography/config.toml` or `~/.config/discography/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DISCOGRAPHY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub library: LibrarySettings,
}

/// Where to read releases from and how to describe them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory whose immediate subdirectories are releases.
    pub root_dir: PathBuf,
    /// URL prefix that track and cover links are built on. Must end with `/`.
    pub base_url: String,
    /// Where the JSON manifest is written.
    pub output_path: PathBuf,
    /// Attribution stamped on every release.
    pub artist: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("Releases"),
            base_url: "https://objectstorage.us-ashburn-1.oraclecloud.com/n/idg3nfddgypd/b/cherryos-deploy-prod/o/music/"
                .to_string(),
            output_path: PathBuf::from("music_manifest.json"),
            artist: "Colin Cherry".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as tracks (case-insensitive, without dot).
    pub audio_extensions: Vec<String>,
    /// File extensions to treat as cover art candidates (case-insensitive, without dot).
    pub image_extensions: Vec<String>,
    /// Audio files whose name contains any of these (case-insensitive) are left out.
    pub exclude_keywords: Vec<String>,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether symlinked release folders and files are followed.
    pub follow_links: bool,
    /// Skip release folders that cannot be listed instead of aborting the run.
    pub skip_unreadable: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            audio_extensions: vec!["wav".into(), "mp3".into()],
            image_extensions: vec!["jpg".into(), "png".into()],
            exclude_keywords: vec!["instrumental".into()],
            include_hidden: true,
            follow_links: true,
            skip_unreadable: false,
        }
    }
}
