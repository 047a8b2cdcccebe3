//! Normalized probe record types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vidmeta_common::{FrameRate, HdrFormat, Resolution};

/// Metadata for one probed video file.
///
/// Built once by a [`Prober`](super::Prober) and never modified afterwards;
/// the report writer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Path to the probed file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Container format name as reported by the prober (e.g. "matroska,webm").
    pub container: String,
    /// Resolution of the first video stream.
    pub resolution: Option<Resolution>,
    /// Codec of the first video stream (e.g. "hevc"); empty when unknown.
    pub video_codec: String,
    /// Codec profile of the first video stream (e.g. "Main 10").
    pub video_profile: Option<String>,
    /// Overall bitrate in kbit/s.
    pub bitrate_kbps: Option<u64>,
    /// Frame rate of the first video stream.
    pub frame_rate: Option<FrameRate>,
    /// Dynamic range of the first video stream.
    pub hdr: HdrFormat,
    /// Audio tracks in stream index order.
    pub audio_tracks: Vec<AudioTrack>,
}

impl VideoRecord {
    /// Whether the first video stream uses an HDR transfer function.
    pub fn is_hdr(&self) -> bool {
        self.hdr.is_hdr()
    }

    /// File size in GiB.
    pub fn size_gib(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }
}

/// One audio stream of a [`VideoRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Stream index within the container.
    pub index: u32,
    /// Codec name (e.g. "aac", "truehd"); empty when unknown.
    pub codec: String,
    /// Language tag (ISO 639-2), if the stream carries one.
    pub language: Option<String>,
}
