//! Shared test harness for integration tests.
//!
//! Provides [`StubFfprobe`], a shell script standing in for ffprobe. It picks
//! a captured JSON fixture by file extension and fails with a non-zero exit
//! for any file whose name contains `corrupt`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/vidmeta-av/tests/fixtures")
}

pub struct StubFfprobe {
    _dir: TempDir,
    pub path: PathBuf,
}

impl StubFfprobe {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create stub dir");
        let path = dir.path().join("ffprobe");
        let fixtures = fixtures_dir();

        let script = format!(
            r#"#!/bin/sh
if [ "$1" = "-version" ]; then
    echo "ffprobe version 7.1-stub"
    exit 0
fi
for last; do :; done
case "$last" in
    *corrupt*)
        echo "$last: Invalid data found when processing input" >&2
        exit 1
        ;;
    *.mkv|*.MKV) cat '{fixtures}/hdr10_multi_audio.json' ;;
    *.mp4|*.MP4) cat '{fixtures}/sdr_single_audio.json' ;;
    *.mov|*.MOV) cat '{fixtures}/hlg_untagged_audio.json' ;;
    *) cat '{fixtures}/no_audio.json' ;;
esac
"#,
            fixtures = fixtures.display()
        );

        fs::write(&path, script).expect("failed to write stub script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to mark stub executable");

        Self { _dir: dir, path }
    }
}

/// Create an empty file (and its parents) standing in for a video.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}
