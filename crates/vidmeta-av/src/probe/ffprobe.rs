//! FFprobe-based [`Prober`] implementation.
//!
//! Runs `ffprobe -of json` with a narrow `-show_entries` selection and maps
//! the output into a [`VideoRecord`]. The serde structs below mirror the
//! subset of ffprobe's schema that is requested and are private to this
//! module.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use vidmeta_common::{FrameRate, HdrFormat, Resolution};

use super::types::{AudioTrack, VideoRecord};
use super::Prober;
use crate::{Error, Result};

/// Entries requested from ffprobe. Anything not listed here is never parsed.
const SHOW_ENTRIES: &str = "format=format_name,bit_rate,duration,size\
:stream=index,codec_name,codec_type,profile,width,height,r_frame_rate,bit_rate,color_space,color_transfer\
:stream_tags=language\
:stream_disposition=attached_pic";

/// A prober backed by the `ffprobe` CLI.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    /// Path to the ffprobe binary.
    ffprobe_path: PathBuf,
}

impl FfprobeProber {
    /// Create a new prober using the given ffprobe path.
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Create a prober that finds ffprobe on `PATH`.
    pub fn from_path() -> Result<Self> {
        crate::tools::require_tool("ffprobe").map(Self::new)
    }

    /// Path of the ffprobe binary this prober runs.
    pub fn ffprobe_path(&self) -> &Path {
        &self.ffprobe_path
    }
}

impl Prober for FfprobeProber {
    fn name(&self) -> &'static str {
        "ffprobe"
    }

    fn probe(&self, path: &Path) -> Result<VideoRecord> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        tracing::debug!(file = %path.display(), "Running ffprobe");

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-show_entries", SHOW_ENTRIES, "-of", "json"])
            .arg(path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(self.ffprobe_path.display().to_string())
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed(
                "ffprobe",
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        let json_str = String::from_utf8(output.stdout)
            .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

        let size_hint = std::fs::metadata(path).ok().map(|m| m.len());

        parse_ffprobe_json(path, &json_str, size_hint)
    }
}

// ---------------------------------------------------------------------------
// JSON structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    format_name: Option<String>,
    bit_rate: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    #[serde(default)]
    index: u32,
    codec_type: Option<String>,
    codec_name: Option<String>,
    profile: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    bit_rate: Option<String>,
    color_transfer: Option<String>,
    #[serde(default)]
    disposition: FfprobeDisposition,
    #[serde(default)]
    tags: FfprobeTags,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    attached_pic: u8,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeTags {
    language: Option<String>,
}

impl FfprobeStream {
    fn is_type(&self, codec_type: &str) -> bool {
        self.codec_type.as_deref() == Some(codec_type)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Map ffprobe JSON output to a [`VideoRecord`].
///
/// `size_hint` is the on-disk size of `path`; when absent the container's
/// reported size is used instead.
///
/// # Errors
///
/// Returns [`Error::Json`] if `json` is not an ffprobe document with a
/// `format` section. Missing stream fields never fail; they map to unknown.
pub fn parse_ffprobe_json(path: &Path, json: &str, size_hint: Option<u64>) -> Result<VideoRecord> {
    let output: FfprobeOutput = serde_json::from_str(json)?;
    Ok(build_record(path, output, size_hint))
}

fn build_record(path: &Path, output: FfprobeOutput, size_hint: Option<u64>) -> VideoRecord {
    let FfprobeOutput { format, streams } = output;

    // Cover art shows up as a video stream with the attached_pic disposition.
    let video = streams
        .iter()
        .find(|s| s.is_type("video") && s.disposition.attached_pic == 0);

    let mut audio_tracks: Vec<AudioTrack> = streams
        .iter()
        .filter(|s| s.is_type("audio"))
        .map(|s| AudioTrack {
            index: s.index,
            codec: s.codec_name.clone().unwrap_or_default(),
            language: non_empty(s.tags.language.as_deref()),
        })
        .collect();
    audio_tracks.sort_by_key(|t| t.index);

    let bitrate_kbps = format
        .bit_rate
        .as_deref()
        .and_then(parse_kbps)
        .or_else(|| video.and_then(|v| v.bit_rate.as_deref()).and_then(parse_kbps));

    let size_bytes = size_hint
        .or_else(|| format.size.as_deref().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(0);

    VideoRecord {
        path: path.to_path_buf(),
        size_bytes,
        container: format.format_name.unwrap_or_default(),
        resolution: video.and_then(|v| match (v.width, v.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(Resolution::new(w, h)),
            _ => None,
        }),
        video_codec: video
            .and_then(|v| v.codec_name.clone())
            .unwrap_or_default(),
        video_profile: video.and_then(|v| non_empty(v.profile.as_deref())),
        bitrate_kbps,
        frame_rate: video
            .and_then(|v| v.r_frame_rate.as_deref())
            .and_then(|s| s.parse::<FrameRate>().ok()),
        hdr: HdrFormat::from_transfer(video.and_then(|v| v.color_transfer.as_deref())),
        audio_tracks,
    }
}

/// Convert a bits-per-second string to kbit/s, rounding to nearest.
fn parse_kbps(bps: &str) -> Option<u64> {
    let bps: u64 = bps.trim().parse().ok()?;
    Some(bps / 1000 + u64::from(bps % 1000 >= 500))
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
