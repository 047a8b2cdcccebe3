//! Error type for the shared value types.

/// Error returned when a value cannot be parsed from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text is not a `WIDTHxHEIGHT` resolution.
    #[error("invalid resolution: {0:?}")]
    InvalidResolution(String),

    /// The text is not a usable `num/den` frame rate.
    #[error("invalid frame rate: {0:?}")]
    InvalidFrameRate(String),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
