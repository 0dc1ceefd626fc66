//! # chromawarp-math
//!
//! Math primitives for colorimetric conversion:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms
//! - [`Vec3`] - 3D vectors for tristimulus triplets
//!
//! # Design
//!
//! Everything is `f64`. The per-value conversion path must round-trip its
//! scaling within 1e-6, which single precision cannot guarantee once the
//! values pass through a 3x3 matrix and a power curve. The batch path keeps
//! its own `f32` copies via [`Mat3::to_f32_rows`].
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chromawarp_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.5]]);
//! let v = m * Vec3::new(1.0, 1.0, 1.0);
//! assert_eq!(v.to_array(), [2.0, 1.0, 0.5]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
