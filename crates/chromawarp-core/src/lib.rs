//! # chromawarp-core
//!
//! Core types for colorimetric conversion.
//!
//! This crate provides the foundational types shared by every chromawarp crate:
//!
//! - [`ColorSpace`] - Tag for the supported colorimetric spaces
//! - [`WhitePoint`] - Reference white in CIE xyY, with standard illuminants
//! - [`Tristimulus`] - Three components plus alpha
//! - [`Error`] - The single error type surfaced to hosts
//!
//! ## Crate Structure
//!
//! ```text
//! chromawarp-core (this crate)
//!    ^
//!    |
//!    +-- chromawarp-color (per-value conversion, scaling)
//!    +-- chromawarp-batch (whole-buffer conversion)
//!    +-- chromawarp-mix (mixing-space session)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`ColorSpace`], [`WhitePoint`] and [`Tristimulus`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod space;
pub mod tristimulus;
pub mod white;

pub use error::{Error, Result};
pub use space::ColorSpace;
pub use tristimulus::Tristimulus;
pub use white::WhitePoint;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use chromawarp_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::space::ColorSpace;
    pub use crate::tristimulus::Tristimulus;
    pub use crate::white::WhitePoint;
}
