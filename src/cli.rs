use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vidmeta")]
#[command(
    author,
    version,
    about = "Scan video directories with ffprobe and write a metadata report"
)]
pub struct Cli {
    /// Directories to scan (replaces `directories` from the config file)
    pub dirs: Vec<PathBuf>,

    /// Report file (*.xlsx or *.csv) or directory to write video_metadata.xlsx into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the ffprobe binary
    #[arg(long)]
    pub ffprobe: Option<PathBuf>,

    /// Check that required external tools are available and exit
    #[arg(long)]
    pub check_tools: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
