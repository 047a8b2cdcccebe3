//! Path utilities for detecting video files by extension.
//!
//! Discovery walks whole directory trees, so every candidate path is checked
//! here against an extension allow-list before it is handed to the prober.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv",
];

/// Suffixes left behind by download managers while a transfer is running.
const PARTIAL_SUFFIXES: &[&str] = &[".part", ".crdownload", ".tmp", ".aria2"];

/// Check if a path has a video file extension from the default allow-list.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vidmeta_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    has_extension_in(path, VIDEO_EXTENSIONS)
}

/// Check if a path's extension is in `extensions` (case-insensitive).
///
/// Entries in `extensions` are expected in lower case without a leading dot.
pub fn has_extension_in<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    if is_partial_download(path) {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|allowed| allowed.as_ref() == ext)
        })
        .unwrap_or(false)
}

/// Check if a path looks like an in-progress download.
pub fn is_partial_download(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| {
            let name = name.to_lowercase();
            PARTIAL_SUFFIXES.iter().any(|s| name.ends_with(s))
        })
        .unwrap_or(false)
}

/// Get the default list of video file extensions.
///
/// # Examples
///
/// ```
/// use vidmeta_common::paths::video_extensions;
///
/// let extensions = video_extensions();
/// assert!(extensions.contains(&"mkv"));
/// assert!(extensions.contains(&"mov"));
/// ```
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Normalize a user-supplied extension: trim, drop a leading dot, lower-case.
///
/// Returns `None` when nothing is left.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}
