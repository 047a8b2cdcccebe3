//! Video file discovery.
//!
//! Walks each root directory recursively and yields files whose extension is
//! on the allow-list. Roots are visited in the order given and entries are
//! sorted by file name within each directory, so the same tree always yields
//! the same sequence.

use std::path::{Path, PathBuf};

use vidmeta_common::paths::has_extension_in;
use walkdir::WalkDir;

/// Lazily discover video files under `roots`.
///
/// Missing roots are logged and skipped. Entries that cannot be read while
/// walking are logged and skipped.
pub fn discover<'a>(
    roots: &'a [PathBuf],
    extensions: &'a [String],
) -> impl Iterator<Item = PathBuf> + 'a {
    roots
        .iter()
        .flat_map(move |root| walk_root(root, extensions))
}

fn walk_root<'a>(root: &'a Path, extensions: &'a [String]) -> impl Iterator<Item = PathBuf> + 'a {
    let walker = if root.exists() {
        tracing::info!(root = %root.display(), "Looking in directory");
        Some(
            WalkDir::new(root)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter(),
        )
    } else {
        tracing::warn!(root = %root.display(), "Scan root does not exist, skipping");
        None
    };

    walker
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "Error walking directory");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(move |path| has_extension_in(path, extensions))
}
