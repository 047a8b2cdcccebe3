//! Tabular report output.
//!
//! One report file per run: a fixed header row followed by one row per probed
//! file, in discovery order. The default is a single-sheet Excel workbook; a
//! `.csv` output path selects a plain CSV file instead. Audio tracks are
//! flattened into a single cell as `Track {index}/{codec}/{LANG}` entries
//! joined by [`AUDIO_TRACK_SEPARATOR`].

mod delimited;
mod workbook;

pub use delimited::{read_csv, write_csv};
pub use workbook::{build_workbook, read_xlsx, SHEET_NAME};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vidmeta_av::{AudioTrack, VideoRecord};
use vidmeta_common::Resolution;

/// File name used when the output path is a directory.
pub const DEFAULT_REPORT_NAME: &str = "video_metadata.xlsx";

/// Separator between entries in the audio tracks cell.
pub const AUDIO_TRACK_SEPARATOR: &str = "; ";

/// Header row, in column order. Must match the serde names on [`ReportRow`].
pub const HEADERS: [&str; 10] = [
    "Path",
    "Size (GB)",
    "Resolution",
    "Audio Tracks",
    "Video Codec",
    "Profile",
    "Bitrate (kbps)",
    "Container",
    "Frame Rate",
    "HDR/SDR",
];

/// On-disk report format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Csv,
}

impl ReportFormat {
    /// Format for `path`, or `None` if the extension is not a report format.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("xlsx") {
            Some(Self::Xlsx)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// One data row of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Size (GB)")]
    pub size_gb: f64,
    #[serde(rename = "Resolution")]
    pub resolution: String,
    #[serde(rename = "Audio Tracks")]
    pub audio_tracks: String,
    #[serde(rename = "Video Codec")]
    pub video_codec: String,
    #[serde(rename = "Profile")]
    pub profile: String,
    #[serde(rename = "Bitrate (kbps)")]
    pub bitrate_kbps: Option<u64>,
    #[serde(rename = "Container")]
    pub container: String,
    #[serde(rename = "Frame Rate")]
    pub frame_rate: String,
    #[serde(rename = "HDR/SDR")]
    pub hdr: String,
}

impl ReportRow {
    /// Parse the resolution cell back into a [`Resolution`].
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution.parse().ok()
    }

    /// Individual entries of the audio tracks cell.
    pub fn audio_track_entries(&self) -> Vec<&str> {
        if self.audio_tracks.is_empty() {
            return Vec::new();
        }
        self.audio_tracks.split(AUDIO_TRACK_SEPARATOR).collect()
    }

    /// Number of audio tracks listed in the row.
    pub fn audio_track_count(&self) -> usize {
        self.audio_track_entries().len()
    }
}

impl From<&VideoRecord> for ReportRow {
    fn from(record: &VideoRecord) -> Self {
        Self {
            path: record.path.display().to_string(),
            size_gb: round_to(record.size_gib(), 3),
            resolution: record
                .resolution
                .map(|r| r.to_string())
                .unwrap_or_default(),
            audio_tracks: record
                .audio_tracks
                .iter()
                .map(track_label)
                .collect::<Vec<_>>()
                .join(AUDIO_TRACK_SEPARATOR),
            video_codec: record.video_codec.clone(),
            profile: record.video_profile.clone().unwrap_or_default(),
            bitrate_kbps: record.bitrate_kbps,
            container: record.container.clone(),
            frame_rate: record
                .frame_rate
                .map(|f| f.to_string())
                .unwrap_or_default(),
            hdr: record.hdr.to_string(),
        }
    }
}

/// Render one audio track as `Track {index}/{codec}/{LANG}`.
pub fn track_label(track: &AudioTrack) -> String {
    let codec = if track.codec.is_empty() {
        "unknown"
    } else {
        track.codec.as_str()
    };
    let language = track
        .language
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_else(|| "UNKNOWN".to_string());

    format!("Track {}/{}/{}", track.index, codec, language)
}

/// Resolve the configured output to a report file path.
///
/// A path ending in `.xlsx` or `.csv` is used as is; anything else is treated
/// as a directory that receives [`DEFAULT_REPORT_NAME`].
pub fn resolve_output_path(output: &Path) -> PathBuf {
    if ReportFormat::from_path(output).is_some() {
        output.to_path_buf()
    } else {
        output.join(DEFAULT_REPORT_NAME)
    }
}

/// Write the report for `records` to `path`, replacing any existing file.
///
/// The format follows the extension of `path`.
pub fn write_report(path: &Path, records: &[VideoRecord]) -> Result<()> {
    let format = ReportFormat::from_path(path)
        .with_context(|| format!("Unsupported report format: {:?}", path))?;

    let result: Result<()> = match format {
        ReportFormat::Xlsx => {
            build_workbook(records).and_then(|mut wb| wb.save(path).map_err(Into::into))
        }
        ReportFormat::Csv => std::fs::File::create(path)
            .map_err(Into::into)
            .and_then(|file| write_csv(file, records)),
    };

    result.with_context(|| format!("Failed to write report file: {:?}", path))
}

/// Read a report written by [`write_report`].
pub fn read_report(path: &Path) -> Result<Vec<ReportRow>> {
    let format = ReportFormat::from_path(path)
        .with_context(|| format!("Unsupported report format: {:?}", path))?;

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open report file: {:?}", path))?;

    let rows = match format {
        ReportFormat::Xlsx => read_xlsx(std::io::BufReader::new(file)),
        ReportFormat::Csv => read_csv(file),
    };

    rows.with_context(|| format!("Failed to read report: {:?}", path))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use vidmeta_common::{FrameRate, HdrFormat};

    pub(crate) fn hdr_record() -> VideoRecord {
        VideoRecord {
            path: PathBuf::from("/movies/Dune (2021)/Dune.mkv"),
            size_bytes: 61_932_410_263,
            container: "matroska,webm".to_string(),
            resolution: Some(Resolution::new(3840, 2160)),
            video_codec: "hevc".to_string(),
            video_profile: Some("Main 10".to_string()),
            bitrate_kbps: Some(60_081),
            frame_rate: FrameRate::new(24000, 1001),
            hdr: HdrFormat::Hdr10,
            audio_tracks: vec![
                AudioTrack {
                    index: 1,
                    codec: "truehd".to_string(),
                    language: Some("eng".to_string()),
                },
                AudioTrack {
                    index: 2,
                    codec: "ac3".to_string(),
                    language: None,
                },
            ],
        }
    }

    pub(crate) fn bare_record() -> VideoRecord {
        VideoRecord {
            path: PathBuf::from("/clips/odd, name.mp4"),
            size_bytes: 0,
            container: String::new(),
            resolution: None,
            video_codec: String::new(),
            video_profile: None,
            bitrate_kbps: None,
            frame_rate: None,
            hdr: HdrFormat::Sdr,
            audio_tracks: vec![],
        }
    }

    #[test]
    fn row_cells() {
        let row = ReportRow::from(&hdr_record());
        assert_eq!(row.path, "/movies/Dune (2021)/Dune.mkv");
        assert_eq!(row.size_gb, 57.679);
        assert_eq!(row.resolution, "3840x2160");
        assert_eq!(row.audio_tracks, "Track 1/truehd/ENG; Track 2/ac3/UNKNOWN");
        assert_eq!(row.video_codec, "hevc");
        assert_eq!(row.profile, "Main 10");
        assert_eq!(row.bitrate_kbps, Some(60_081));
        assert_eq!(row.container, "matroska,webm");
        assert_eq!(row.frame_rate, "23.976 fps");
        assert_eq!(row.hdr, "HDR10");
    }

    #[test]
    fn unknown_values_render_empty() {
        let row = ReportRow::from(&bare_record());
        assert_eq!(row.resolution, "");
        assert_eq!(row.audio_tracks, "");
        assert_eq!(row.profile, "");
        assert_eq!(row.frame_rate, "");
        assert_eq!(row.hdr, "SDR");
        assert_eq!(row.audio_track_count(), 0);
        assert!(row.resolution().is_none());
    }

    #[test]
    fn track_label_unknown_codec() {
        let track = AudioTrack {
            index: 4,
            codec: String::new(),
            language: Some("jpn".to_string()),
        };
        assert_eq!(track_label(&track), "Track 4/unknown/JPN");
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ReportFormat::from_path(Path::new("a/report.xlsx")),
            Some(ReportFormat::Xlsx)
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("a/REPORT.XLSX")),
            Some(ReportFormat::Xlsx)
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("a/report.csv")),
            Some(ReportFormat::Csv)
        );
        assert_eq!(ReportFormat::from_path(Path::new("a/reports")), None);
        assert_eq!(ReportFormat::from_path(Path::new("a/report.xls")), None);
    }

    #[test]
    fn output_path_resolution() {
        assert_eq!(
            resolve_output_path(Path::new("/tmp/report.xlsx")),
            PathBuf::from("/tmp/report.xlsx")
        );
        assert_eq!(
            resolve_output_path(Path::new("/tmp/report.csv")),
            PathBuf::from("/tmp/report.csv")
        );
        assert_eq!(
            resolve_output_path(Path::new("/tmp/REPORT.CSV")),
            PathBuf::from("/tmp/REPORT.CSV")
        );
        assert_eq!(
            resolve_output_path(Path::new("/tmp/reports")),
            PathBuf::from("/tmp/reports/video_metadata.xlsx")
        );
    }

    #[test]
    fn write_and_read_xlsx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_report(&path, &[hdr_record(), bare_record()]).unwrap();

        let rows = read_report(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ReportRow::from(&hdr_record()));
        assert_eq!(rows[1], ReportRow::from(&bare_record()));
    }

    #[test]
    fn write_and_read_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_report(&path, &[hdr_record()]).unwrap();

        let rows = read_report(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].audio_track_count(), 2);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["out.xlsx", "out.csv"] {
            let path = dir.path().join("no/such/dir").join(name);
            let err = write_report(&path, &[]).unwrap_err();
            assert!(err.to_string().contains("Failed to write report file"));
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_report(&dir.path().join("out.txt"), &[]).unwrap_err();
        assert!(err.to_string().contains("Unsupported report format"));
    }
}
