use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use super::filter::is_hidden;
use crate::config::LibrarySettings;
use crate::error::CatalogError;

/// A release folder directly under the catalog root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDir {
    /// Folder base name; doubles as album name and URL segment.
    pub name: String,
    pub path: PathBuf,
}

/// List the immediate subdirectories of `root`, sorted by name.
pub fn album_dirs(root: &Path, settings: &LibrarySettings) -> Result<Vec<AlbumDir>, CatalogError> {
    let meta = fs::metadata(root).map_err(|e| CatalogError::directory_access(root, e))?;
    if !meta.is_dir() {
        return Err(CatalogError::directory_access(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut albums = Vec::new();
    for entry in children(root, settings) {
        let Some(entry) = entry? else { continue };
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(name) = utf8_name(&entry) {
            albums.push(AlbumDir {
                name,
                path: entry.into_path(),
            });
        }
    }
    Ok(albums)
}

/// List the names of regular files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into.
pub fn album_files(dir: &Path, settings: &LibrarySettings) -> Result<Vec<String>, CatalogError> {
    let mut files = Vec::new();
    for entry in children(dir, settings) {
        let Some(entry) = entry? else { continue };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = utf8_name(&entry) {
            files.push(name);
        }
    }
    Ok(files)
}

/// Immediate children of `dir` in file-name order.
///
/// Failing to read `dir` itself is an error; an individual entry that cannot be
/// inspected (e.g. a dangling symlink) is logged and yields `None`.
fn children<'a>(
    dir: &'a Path,
    settings: &LibrarySettings,
) -> impl Iterator<Item = Result<Option<DirEntry>, CatalogError>> + 'a {
    let include_hidden = settings.include_hidden;

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| include_hidden || !e.file_name().to_str().is_some_and(is_hidden))
        .map(move |res| match res {
            Ok(entry) => Ok(Some(entry)),
            Err(err) if err.depth() > 0 => {
                warn!(path = ?err.path(), "skipping unreadable entry: {err}");
                Ok(None)
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                Err(CatalogError::directory_access(path, err.into()))
            }
        })
}

fn utf8_name(entry: &DirEntry) -> Option<String> {
    match entry.file_name().to_str() {
        Some(name) => Some(name.to_string()),
        None => {
            warn!(path = %entry.path().display(), "skipping entry with non UTF-8 name");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn album_dirs_lists_only_directories_sorted_by_name() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("b-side")).unwrap();
        fs::create_dir(dir.path().join("A Record")).unwrap();
        fs::create_dir(dir.path().join("Colin's Demo")).unwrap();
        fs::write(dir.path().join("loose.mp3"), b"not real").unwrap();

        let albums = album_dirs(dir.path(), &LibrarySettings::default()).unwrap();
        let names: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A Record", "Colin's Demo", "b-side"]);
        assert_eq!(albums[0].path, dir.path().join("A Record"));
    }

    #[test]
    fn album_dirs_missing_root_is_directory_access_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = album_dirs(&missing, &LibrarySettings::default()).unwrap_err();
        match err {
            CatalogError::DirectoryAccess { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn album_dirs_root_that_is_a_file_is_directory_access_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, b"x").unwrap();

        let err = album_dirs(&file, &LibrarySettings::default()).unwrap_err();
        assert!(matches!(err, CatalogError::DirectoryAccess { .. }));
    }

    #[test]
    fn album_files_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("02 - Two.wav"), b"not real").unwrap();
        fs::write(dir.path().join("01 - One.wav"), b"not real").unwrap();
        let bonus = dir.path().join("Bonus");
        fs::create_dir(&bonus).unwrap();
        fs::write(bonus.join("03 - Three.wav"), b"not real").unwrap();

        let files = album_files(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(files, vec!["01 - One.wav", "02 - Two.wav"]);
    }

    #[test]
    fn album_files_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("._01 - One.wav"), b"resource fork").unwrap();
        fs::write(dir.path().join("01 - One.wav"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        assert_eq!(album_files(dir.path(), &settings).unwrap(), vec!["01 - One.wav"]);

        let all = album_files(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn entries_with_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"02 - Bad\xff.wav")), b"not real").unwrap();
        fs::write(dir.path().join("01 - Good.wav"), b"not real").unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"Caf\xe9"))).unwrap();
        fs::create_dir(dir.path().join("Cafe")).unwrap();

        let settings = LibrarySettings::default();
        assert_eq!(album_files(dir.path(), &settings).unwrap(), vec!["01 - Good.wav"]);

        let albums = album_dirs(dir.path(), &settings).unwrap();
        let names: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Cafe"]);
    }
}
