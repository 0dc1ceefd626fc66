//! # chromawarp-color
//!
//! Per-value colorimetric conversion.
//!
//! - [`kernel`] - one triple to and from CIE XYZ, for every [`ColorSpace`]
//! - [`scaling`] - native range <-> normalized [0, 1]
//! - [`convert`] - space-to-space conversion and the grayscale policy
//! - [`hsx`] - HSB/HSL derived from sRGB
//!
//! # Architecture
//!
//! ```text
//!                 chromawarp-color
//!                        |
//!     +------------------+------------------+
//!     |                  |                  |
//!  rgb, lab, luv       polar             scaling
//!     |                                     |
//! chromawarp-transfer  chromawarp-math      |
//!     |                  |                  |
//!     +------------------+------------------+
//!                        |
//!                 chromawarp-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chromawarp_color::{convert_normalized, ColorSpace, WhitePoint};
//!
//! // sRGB (0, 162, 205) in the normalized CIEXYZ encoding
//! let xyz = convert_normalized(
//!     [0.0, 162.0 / 255.0, 205.0 / 255.0, 1.0],
//!     ColorSpace::Srgb,
//!     WhitePoint::D65,
//!     ColorSpace::CieXyz,
//!     WhitePoint::D65,
//! );
//! assert!((xyz[1] - 0.30245).abs() < 5e-4);
//! ```
//!
//! # Precision
//!
//! Everything in this crate is `f64`. The whole-buffer path in
//! `chromawarp-batch` trades precision for speed with its own `f32` curves.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod hsx;
pub mod kernel;
pub mod lab;
pub mod luv;
pub mod polar;
pub mod rgb;
pub mod scaling;

pub use chromawarp_core::{ColorSpace, Tristimulus, WhitePoint};
pub use convert::{convert, convert_normalized, from_gray, Conversion};
pub use scaling::{to_native, to_normalized, ScaleRange};

// Re-export sub-crates for convenience
pub use chromawarp_math as math;
pub use chromawarp_transfer as transfer;
