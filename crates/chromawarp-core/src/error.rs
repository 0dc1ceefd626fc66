//! Error types for chromawarp operations.
//!
//! A single [`Error`] enum is shared by the per-value converter, the mixing
//! session and the batch engine, so hosts only ever match on one type.
//!
//! # Usage
//!
//! ```rust
//! use chromawarp_core::{ColorSpace, Error, Result};
//!
//! fn parse(name: &str) -> Result<ColorSpace> {
//!     name.parse()
//! }
//!
//! let err = parse("CMYK").unwrap_err();
//! assert!(err.is_unsupported_space());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting colors or driving a session.
///
/// # Categories
///
/// - **Lifecycle errors**: [`BackendNotLoaded`](Error::BackendNotLoaded),
///   [`WorkerPool`](Error::WorkerPool)
/// - **Argument errors**: [`InvalidColorArguments`](Error::InvalidColorArguments),
///   [`InvalidWhitePoint`](Error::InvalidWhitePoint)
/// - **Space errors**: [`UnsupportedColorSpace`](Error::UnsupportedColorSpace)
#[derive(Debug, Error)]
pub enum Error {
    /// An entry point was used before the conversion backend was loaded.
    ///
    /// Every session operation requires `load_backend` to have completed.
    #[error("conversion backend not loaded; call load_backend() first")]
    BackendNotLoaded,

    /// The arguments to a color-creation call have a shape that cannot be
    /// interpreted in the active input mode.
    #[error("invalid color arguments: {0}")]
    InvalidColorArguments(String),

    /// A color space name or tag is not in the supported set.
    #[error("unsupported color space: {0}")]
    UnsupportedColorSpace(String),

    /// A white point with a zero or non-finite chromaticity.
    #[error("invalid white point: {0}")]
    InvalidWhitePoint(String),

    /// The batch worker pool could not be constructed.
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

impl Error {
    /// Creates an [`Error::InvalidColorArguments`] error.
    #[inline]
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidColorArguments(msg.into())
    }

    /// Creates an [`Error::UnsupportedColorSpace`] error.
    #[inline]
    pub fn unsupported_space(name: impl Into<String>) -> Self {
        Self::UnsupportedColorSpace(name.into())
    }

    /// Creates an [`Error::InvalidWhitePoint`] error.
    #[inline]
    pub fn invalid_white_point(msg: impl Into<String>) -> Self {
        Self::InvalidWhitePoint(msg.into())
    }

    /// Creates an [`Error::WorkerPool`] error.
    #[inline]
    pub fn worker_pool(msg: impl Into<String>) -> Self {
        Self::WorkerPool(msg.into())
    }

    /// Returns `true` if the backend was not loaded.
    #[inline]
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Self::BackendNotLoaded)
    }

    /// Returns `true` if this is an argument-shape error.
    #[inline]
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, Self::InvalidColorArguments(_))
    }

    /// Returns `true` if this is an unsupported color space error.
    #[inline]
    pub fn is_unsupported_space(&self) -> bool {
        matches!(self, Self::UnsupportedColorSpace(_))
    }
}
