use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Read the catalog settings.
    ///
    /// Sources, later ones overriding earlier ones: struct defaults, the TOML file
    /// from [`resolve_config_path`] (skipped when absent), `DISCOGRAPHY__SECTION__KEY`
    /// variables. String values come back normalized, see [`Settings::normalize`].
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        let cfg = builder
            .add_source(
                ::config::Environment::with_prefix("DISCOGRAPHY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = cfg.try_deserialize()?;
        settings.normalize();
        Ok(settings)
    }

    /// Strip stray whitespace from values that end up verbatim in the manifest.
    pub fn normalize(&mut self) {
        let base_url = self.catalog.base_url.trim();
        if base_url.len() != self.catalog.base_url.len() {
            self.catalog.base_url = base_url.to_string();
        }
        let artist = self.catalog.artist.trim();
        if artist.len() != self.catalog.artist.len() {
            self.catalog.artist = artist.to_string();
        }
    }

    /// Reject settings that would produce broken links or unattributed releases.
    pub fn validate(&self) -> Result<(), String> {
        let base_url = self.catalog.base_url.as_str();
        if base_url.is_empty() {
            return Err("catalog.base_url must not be empty".to_string());
        }
        if base_url.trim() != base_url {
            return Err(format!("catalog.base_url has surrounding whitespace: {base_url:?}"));
        }
        if !base_url.ends_with('/') {
            return Err(format!("catalog.base_url must end with '/': {base_url}"));
        }
        if self.catalog.artist.trim().is_empty() {
            return Err("catalog.artist must not be empty".to_string());
        }
        if normalized_extensions(&self.library.audio_extensions).is_empty() {
            return Err("library.audio_extensions must list at least one extension".to_string());
        }
        Ok(())
    }
}

/// Lowercase extensions with any leading dot removed, blanks dropped.
pub fn normalized_extensions(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// `DISCOGRAPHY_CONFIG_PATH` if set, else the per-user default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("DISCOGRAPHY_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `discography/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_home.join("discography").join("config.toml"))
}
