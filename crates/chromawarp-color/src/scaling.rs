//! Native range <-> normalized [0, 1] interchange.
//!
//! Every space maps to the unit cube with a per-channel affine transform:
//!
//! ```text
//! normalized = (native + offset) / extent
//! native     = normalized * extent - offset
//! ```
//!
//! | Space | offset | extent |
//! |-------|--------|--------|
//! | sRGB, linear RGB | 0, 0, 0 | 1, 1, 1 |
//! | CIEXYZ | 0, 0, 0 | 0.95047, 1, 1.08883 |
//! | CIELab | 0, 128, 128 | 100, 255, 255 |
//! | CIELCh | 0, 0, 0 | 100, 150, 360 |
//! | CIELuv | 0, 134, 140 | 100, 354, 262 |
//! | CIELChuv | 0, 0, 0 | 100, 180, 360 |
//!
//! The CIEXYZ extents are the D65 white and stay fixed whatever white the
//! caller converts with. A D50 white therefore normalizes slightly above
//! 1.0 in X; the mapping is still exactly invertible.
//!
//! Alpha passes through untouched.

use chromawarp_core::ColorSpace;

/// Affine map between a space's native range and [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    /// Added to native values before dividing.
    pub offset: [f64; 3],
    /// Width of the native range per channel.
    pub extent: [f64; 3],
}

impl ScaleRange {
    const UNIT: Self = Self {
        offset: [0.0; 3],
        extent: [1.0; 3],
    };

    /// Returns the range used for `space`.
    pub const fn of(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Srgb | ColorSpace::LinearRgb => Self::UNIT,
            ColorSpace::CieXyz => Self {
                offset: [0.0; 3],
                extent: [0.95047, 1.0, 1.08883],
            },
            ColorSpace::CieLab => Self {
                offset: [0.0, 128.0, 128.0],
                extent: [100.0, 255.0, 255.0],
            },
            ColorSpace::CieLch => Self {
                offset: [0.0; 3],
                extent: [100.0, 150.0, 360.0],
            },
            ColorSpace::CieLuv => Self {
                offset: [0.0, 134.0, 140.0],
                extent: [100.0, 354.0, 262.0],
            },
            ColorSpace::CieLchuv => Self {
                offset: [0.0; 3],
                extent: [100.0, 180.0, 360.0],
            },
        }
    }

    /// Native to normalized, three channels.
    #[inline]
    pub fn normalize(&self, native: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|i| (native[i] + self.offset[i]) / self.extent[i])
    }

    /// Normalized to native, three channels.
    #[inline]
    pub fn denormalize(&self, normalized: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|i| normalized[i] * self.extent[i] - self.offset[i])
    }
}

/// Native `[c0, c1, c2, alpha]` to normalized.
#[inline]
pub fn to_normalized(native: [f64; 4], space: ColorSpace) -> [f64; 4] {
    let [a, b, c] = ScaleRange::of(space).normalize([native[0], native[1], native[2]]);
    [a, b, c, native[3]]
}

/// Normalized `[c0, c1, c2, alpha]` to native.
#[inline]
pub fn to_native(normalized: [f64; 4], space: ColorSpace) -> [f64; 4] {
    let [a, b, c] =
        ScaleRange::of(space).denormalize([normalized[0], normalized[1], normalized[2]]);
    [a, b, c, normalized[3]]
}
