//! Media file probing.
//!
//! [`Prober`] is the seam between the scan pipeline and the external tool.
//! Everything that knows about ffprobe's JSON schema lives in [`ffprobe`];
//! callers only ever see [`VideoRecord`].

pub mod ffprobe;
mod types;

pub use ffprobe::{parse_ffprobe_json, FfprobeProber};
pub use types::*;

use crate::Result;
use std::path::Path;

/// A backend that turns a media file into a [`VideoRecord`].
pub trait Prober {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Probe a single file.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot run or its output cannot be
    /// interpreted. Callers are expected to skip the file and continue.
    fn probe(&self, path: &Path) -> Result<VideoRecord>;
}
