//! Space-to-space conversion of single color values.
//!
//! Composes [`crate::kernel`] and [`crate::scaling`]:
//!
//! ```text
//! source native --to_xyz(source white)--> XYZ --from_xyz(target white)--> target native
//! ```
//!
//! White points go through XYZ unadapted: the source white only anchors the
//! decode and the target white only anchors the encode. Alpha is carried
//! through untouched.
//!
//! # Example
//!
//! ```rust
//! use chromawarp_color::convert::convert;
//! use chromawarp_core::{ColorSpace, Tristimulus, WhitePoint};
//!
//! let white = Tristimulus::new(1.0, 1.0, 1.0);
//! let lab = convert(white, ColorSpace::Srgb, WhitePoint::D65, ColorSpace::CieLab, WhitePoint::D65);
//! assert!((lab.components[0] - 100.0).abs() < 1e-3);
//! ```

use chromawarp_core::{ColorSpace, Tristimulus, WhitePoint};

use crate::{kernel, scaling};

/// Converts a native-range value between spaces.
pub fn convert(
    input: Tristimulus,
    source: ColorSpace,
    source_white: WhitePoint,
    target: ColorSpace,
    target_white: WhitePoint,
) -> Tristimulus {
    Conversion::new(source, source_white, target, target_white).apply(input)
}

/// Converts a normalized `[c0, c1, c2, alpha]` value between spaces,
/// returning normalized components of the target space.
pub fn convert_normalized(
    normalized: [f64; 4],
    source: ColorSpace,
    source_white: WhitePoint,
    target: ColorSpace,
    target_white: WhitePoint,
) -> [f64; 4] {
    Conversion::new(source, source_white, target, target_white).apply_normalized(normalized)
}

/// Builds the native-range value for a gray level in `space`.
///
/// - RGB spaces: `(g, g, g)`
/// - CIEXYZ: the white point scaled by `g`, so `g = 1` is the white itself
/// - Lightness-based spaces: `(g, 0, 0)`, lightness only with neutral chroma
///
/// The gray level is used as given; callers apply any input maxima first.
pub fn from_gray(gray: f64, space: ColorSpace, white: WhitePoint) -> Tristimulus {
    let components = match space {
        ColorSpace::Srgb | ColorSpace::LinearRgb => [gray; 3],
        ColorSpace::CieXyz => white.to_xyz().map(|c| c * gray),
        ColorSpace::CieLab | ColorSpace::CieLch | ColorSpace::CieLuv | ColorSpace::CieLchuv => {
            [gray, 0.0, 0.0]
        }
    };
    Tristimulus::with_alpha(components, 1.0)
}

/// A prepared source -> target conversion.
///
/// Caches the white point XYZs so repeated conversions between the same pair
/// of spaces skip the xyY derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    source: ColorSpace,
    source_white: [f64; 3],
    target: ColorSpace,
    target_white: [f64; 3],
}

impl Conversion {
    /// Prepares a conversion.
    pub fn new(
        source: ColorSpace,
        source_white: WhitePoint,
        target: ColorSpace,
        target_white: WhitePoint,
    ) -> Self {
        Self {
            source,
            source_white: source_white.to_xyz(),
            target,
            target_white: target_white.to_xyz(),
        }
    }

    /// Source space.
    #[inline]
    pub fn source(&self) -> ColorSpace {
        self.source
    }

    /// Target space.
    #[inline]
    pub fn target(&self) -> ColorSpace {
        self.target
    }

    /// Converts a native-range value.
    #[inline]
    pub fn apply(&self, input: Tristimulus) -> Tristimulus {
        let xyz = kernel::to_xyz(input.components, self.source, self.source_white);
        let out = kernel::from_xyz(xyz, self.target, self.target_white);
        Tristimulus::with_alpha(out, input.alpha)
    }

    /// Converts a normalized value, normalized in and out.
    #[inline]
    pub fn apply_normalized(&self, normalized: [f64; 4]) -> [f64; 4] {
        let native = scaling::to_native(normalized, self.source);
        let out = self.apply(Tristimulus::from_array(native));
        scaling::to_normalized(out.to_array(), self.target)
    }
}
