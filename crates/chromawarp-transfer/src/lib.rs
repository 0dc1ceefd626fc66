//! # chromawarp-transfer
//!
//! Nonlinear companding curves used by the colorimetric conversions.
//!
//! | Module | Curve | Precision |
//! |--------|-------|-----------|
//! | [`srgb`] | IEC 61966-2-1 gamma | `f64`, exact |
//! | [`cie`] | CIE L* cube root with linear toe | `f64`, exact |
//! | [`fast`] | Both of the above | `f32`, polynomial roots |
//!
//! # Usage
//!
//! ```rust
//! use chromawarp_transfer::{cie, fast, srgb};
//!
//! let linear = srgb::eotf(0.5);
//! assert!((srgb::oetf(linear) - 0.5).abs() < 1e-12);
//!
//! let approx = fast::srgb_eotf(0.5);
//! assert!((approx as f64 - linear).abs() < 1e-3);
//!
//! assert!((cie::f_inv(cie::f(0.2)) - 0.2).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `chromawarp-color` - per-value conversions (exact curves)
//! - `chromawarp-batch` - whole-buffer conversions (fast curves)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie;
pub mod fast;
pub mod srgb;
