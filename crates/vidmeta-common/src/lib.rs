//! Vidmeta-Common: shared value types and path utilities.
//!
//! This crate provides the pieces used by both the probe adapter and the
//! report writer:
//!
//! - **Value types**: [`Resolution`], [`FrameRate`] and [`HdrFormat`], each
//!   with a stable text form used in reports
//! - **Path utilities**: the video extension allow-list used by discovery
//! - **Error handling**: [`Error`] for values that fail to parse
//!
//! # Examples
//!
//! ```
//! use vidmeta_common::{FrameRate, Resolution};
//! use vidmeta_common::paths::is_video_file;
//! use std::path::Path;
//!
//! let res: Resolution = "1920x1080".parse().unwrap();
//! assert_eq!(res.width, 1920);
//!
//! let fps: FrameRate = "24000/1001".parse().unwrap();
//! assert_eq!(fps.to_string(), "23.976 fps");
//!
//! assert!(is_video_file(Path::new("movie.mkv")));
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
