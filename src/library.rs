//! Release discovery: turns album folders into manifest records.
//!
//! Filename heuristics (`title`, `cover`, `filter`) are pure and never touch the
//! file system; `scan` is the only part that lists directories.

mod collection;
mod cover;
mod filter;
mod model;
mod scan;
mod title;
mod tracks;

pub use collection::assemble;
pub use model::*;
pub use scan::{AlbumDir, album_dirs, album_files};
