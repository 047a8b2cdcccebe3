//! Value types shared by the probe adapter and the report writer.
//!
//! Each type has a canonical text form. The report writes that form and the
//! report reader parses it back, so `Display` and `FromStr` must agree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Frame dimensions of a video stream in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidResolution(s.to_string());

        let (w, h) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width = w.parse().map_err(|_| invalid())?;
        let height = h.parse().map_err(|_| invalid())?;

        Ok(Self { width, height })
    }
}

/// A frame rate kept as the exact rational the prober reported.
///
/// NTSC rates such as `24000/1001` have no exact decimal form, so the
/// numerator and denominator are stored and only rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds). Never zero.
    pub den: u32,
}

impl FrameRate {
    /// Create a frame rate, returning `None` for a zero numerator or
    /// denominator.
    pub fn new(num: u32, den: u32) -> Option<Self> {
        if num == 0 || den == 0 {
            None
        } else {
            Some(Self { num, den })
        }
    }

    /// Frames per second as a float.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} fps", self.as_f64())
    }
}

impl FromStr for FrameRate {
    type Err = Error;

    /// Parse `num/den` (ffprobe's `r_frame_rate`) or a bare integer.
    ///
    /// ffprobe reports `0/0` when a stream has no usable rate; that is an
    /// error here so callers can map it to "unknown".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFrameRate(s.to_string());
        let s = s.trim();

        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (
                n.parse().map_err(|_| invalid())?,
                d.parse().map_err(|_| invalid())?,
            ),
            None => (s.parse().map_err(|_| invalid())?, 1),
        };

        Self::new(num, den).ok_or_else(invalid)
    }
}

/// Dynamic range classification of a video stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HdrFormat {
    /// Standard dynamic range.
    #[default]
    Sdr,
    /// PQ transfer (SMPTE ST 2084).
    Hdr10,
    /// Hybrid Log-Gamma transfer (ARIB STD-B67).
    Hlg,
}

impl HdrFormat {
    /// Classify a stream by its color transfer characteristic tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidmeta_common::HdrFormat;
    ///
    /// assert_eq!(HdrFormat::from_transfer(Some("smpte2084")), HdrFormat::Hdr10);
    /// assert_eq!(HdrFormat::from_transfer(Some("bt709")), HdrFormat::Sdr);
    /// assert_eq!(HdrFormat::from_transfer(None), HdrFormat::Sdr);
    /// ```
    pub fn from_transfer(transfer: Option<&str>) -> Self {
        match transfer.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("smpte2084") => Self::Hdr10,
            Some("arib-std-b67") => Self::Hlg,
            _ => Self::Sdr,
        }
    }

    /// Whether this is a high dynamic range format.
    pub fn is_hdr(&self) -> bool {
        !matches!(self, Self::Sdr)
    }
}

impl fmt::Display for HdrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sdr => write!(f, "SDR"),
            Self::Hdr10 => write!(f, "HDR10"),
            Self::Hlg => write!(f, "HLG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_parse_and_display() {
        let res: Resolution = "3840x2160".parse().unwrap();
        assert_eq!(res, Resolution::new(3840, 2160));
        assert_eq!(res.to_string(), "3840x2160");

        assert!("3840".parse::<Resolution>().is_err());
        assert!("x2160".parse::<Resolution>().is_err());
        assert!("".parse::<Resolution>().is_err());
    }

    #[test]
    fn frame_rate_fraction() {
        let fps: FrameRate = "24000/1001".parse().unwrap();
        assert_eq!(fps, FrameRate { num: 24000, den: 1001 });
        assert!((fps.as_f64() - 23.976).abs() < 0.001);
        assert_eq!(fps.to_string(), "23.976 fps");

        let fps: FrameRate = "30/1".parse().unwrap();
        assert_eq!(fps.to_string(), "30.000 fps");
    }

    #[test]
    fn frame_rate_bare_integer() {
        let fps: FrameRate = "25".parse().unwrap();
        assert_eq!(fps, FrameRate { num: 25, den: 1 });
    }

    #[test]
    fn frame_rate_rejects_unknown() {
        assert!("0/0".parse::<FrameRate>().is_err());
        assert!("24/0".parse::<FrameRate>().is_err());
        assert!("invalid".parse::<FrameRate>().is_err());
        assert!("23.976".parse::<FrameRate>().is_err());
        assert!(FrameRate::new(0, 1).is_none());
    }

    #[test]
    fn hdr_from_transfer() {
        assert_eq!(HdrFormat::from_transfer(Some("smpte2084")), HdrFormat::Hdr10);
        assert_eq!(HdrFormat::from_transfer(Some("SMPTE2084")), HdrFormat::Hdr10);
        assert_eq!(HdrFormat::from_transfer(Some("arib-std-b67")), HdrFormat::Hlg);
        assert_eq!(HdrFormat::from_transfer(Some("bt709")), HdrFormat::Sdr);
        assert_eq!(HdrFormat::from_transfer(Some("")), HdrFormat::Sdr);
        assert_eq!(HdrFormat::from_transfer(None), HdrFormat::Sdr);
    }

    #[test]
    fn hdr_is_hdr() {
        assert!(HdrFormat::Hdr10.is_hdr());
        assert!(HdrFormat::Hlg.is_hdr());
        assert!(!HdrFormat::Sdr.is_hdr());
        assert_eq!(HdrFormat::default(), HdrFormat::Sdr);
    }

    #[test]
    fn hdr_serde() {
        let json = serde_json::to_string(&HdrFormat::Hdr10).unwrap();
        assert_eq!(json, "\"hdr10\"");
        let back: HdrFormat = serde_json::from_str("\"hlg\"").unwrap();
        assert_eq!(back, HdrFormat::Hlg);
    }
}
