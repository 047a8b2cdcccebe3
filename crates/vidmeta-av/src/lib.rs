//! # vidmeta-av
//!
//! Probe adapter for video files.
//!
//! This crate provides functionality for:
//! - Running ffprobe against a file and mapping its JSON output into a
//!   normalized [`VideoRecord`]
//! - Locating ffprobe and reporting its availability
//!
//! The rest of the workspace talks to the [`Prober`] trait only, so changes in
//! ffprobe's output schema stay inside [`probe::ffprobe`].
//!
//! ## Example
//!
//! ```no_run
//! use vidmeta_av::{FfprobeProber, Prober};
//! use std::path::Path;
//!
//! let prober = FfprobeProber::from_path()?;
//! let record = prober.probe(Path::new("/path/to/video.mkv"))?;
//! println!("Container: {}", record.container);
//! for track in &record.audio_tracks {
//!     println!("Audio #{}: {}", track.index, track.codec);
//! }
//! # Ok::<(), vidmeta_av::Error>(())
//! ```

mod error;
pub mod probe;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use probe::{AudioTrack, FfprobeProber, Prober, VideoRecord};
pub use tools::{check_tool, check_tools, get_tool_path, require_tool, ToolInfo};
