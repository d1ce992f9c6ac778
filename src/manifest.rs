//! Manifest assembly and output.
//!
//! `ManifestBuilder` walks every release folder under the catalog root once and
//! writes the resulting records as a single pretty-printed JSON array.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::CatalogError;
use crate::library::{AlbumDir, CollectionRecord, album_dirs, album_files, assemble};

/// Every release found under the catalog root, in folder-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    pub collections: Vec<CollectionRecord>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Pretty-printed JSON with 2-space indentation; absent values are `null`.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct ManifestBuilder {
    settings: Settings,
}

impl ManifestBuilder {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scan the catalog root and assemble one record per qualifying folder.
    pub fn build(&self) -> Result<Manifest, CatalogError> {
        let root = self.settings.catalog.root_dir.as_path();
        let library = &self.settings.library;

        let mut manifest = Manifest::default();
        for album in album_dirs(root, library)? {
            if let Some(collection) = self.build_album(&album)? {
                manifest.collections.push(collection);
            }
        }

        info!(
            root = %root.display(),
            collections = manifest.len(),
            "catalog scan complete"
        );
        Ok(manifest)
    }

    /// Assemble one release folder.
    ///
    /// A folder that cannot be listed aborts the run unless `library.skip_unreadable`
    /// is set, in which case it is logged and left out.
    fn build_album(&self, album: &AlbumDir) -> Result<Option<CollectionRecord>, CatalogError> {
        let library = &self.settings.library;

        let files = match album_files(&album.path, library) {
            Ok(files) => files,
            Err(e) if library.skip_unreadable => {
                warn!(album = %album.name, "skipping unreadable release folder: {e}");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(assemble(&album.name, &files, &self.settings))
    }

    /// Write `manifest` to the configured output path.
    pub fn write(&self, manifest: &Manifest) -> Result<(), CatalogError> {
        write_manifest(manifest, &self.settings.catalog.output_path)
    }
}

/// Serialize `manifest` and replace `path` with it in one step.
///
/// The document is rendered in full before anything touches the disk, then
/// written to a temporary sibling file that is renamed over `path`.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), CatalogError> {
    let json = manifest.to_json()?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| CatalogError::manifest_write(path, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| CatalogError::manifest_write(path, e))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| CatalogError::manifest_write(path, e))?;
    tmp.persist(path)
        .map_err(|e| CatalogError::manifest_write(path, e.error))?;

    info!(path = %path.display(), bytes = json.len(), "manifest written");
    Ok(())
}
