use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Root directories to scan, in order
    #[serde(default)]
    pub directories: Vec<PathBuf>,

    /// Report file (`*.xlsx` or `*.csv`) or directory to place
    /// `video_metadata.xlsx` in.
    /// Defaults to the current directory.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// File extensions treated as video (lower case, no leading dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            output: None,
            extensions: default_extensions(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Final path of the report file.
    pub fn report_path(&self) -> PathBuf {
        let output = self.output.as_deref().unwrap_or(Path::new("."));
        report::resolve_output_path(output)
    }
}

fn default_extensions() -> Vec<String> {
    vidmeta_common::paths::video_extensions()
        .iter()
        .map(|e| e.to_string())
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Explicit ffprobe binary; otherwise ffprobe is looked up on PATH
    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}
