//! Color space tags.
//!
//! [`ColorSpace`] is the discriminant used everywhere a tristimulus value,
//! a pixel buffer or a mixing context needs to say what its numbers mean.
//!
//! # Supported Spaces
//!
//! | Variant | Name | Native range |
//! |---------|------|--------------|
//! | [`Srgb`](ColorSpace::Srgb) | `sRGB` | 0..1 per channel, gamma encoded |
//! | [`LinearRgb`](ColorSpace::LinearRgb) | `linear RGB` | 0..1 per channel |
//! | [`CieXyz`](ColorSpace::CieXyz) | `CIEXYZ` | Y in 0..1 |
//! | [`CieLab`](ColorSpace::CieLab) | `CIELab` | L 0..100, a/b about -128..127 |
//! | [`CieLch`](ColorSpace::CieLch) | `CIELCh` | L 0..100, C 0..150, h 0..360 |
//! | [`CieLuv`](ColorSpace::CieLuv) | `CIELuv` | L 0..100, u -134..220, v -140..122 |
//! | [`CieLchuv`](ColorSpace::CieLchuv) | `CIELChuv` | L 0..100, C 0..180, h 0..360 |

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported colorimetric spaces.
///
/// # Example
///
/// ```rust
/// use chromawarp_core::ColorSpace;
///
/// let space: ColorSpace = "CIELab".parse().unwrap();
/// assert_eq!(space, ColorSpace::CieLab);
/// assert_eq!(space.to_string(), "CIELab");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// IEC 61966-2-1 sRGB, gamma encoded.
    #[default]
    Srgb,
    /// sRGB primaries without the transfer function.
    LinearRgb,
    /// CIE 1931 XYZ.
    CieXyz,
    /// CIE 1976 L*a*b*.
    CieLab,
    /// Cylindrical form of CIELab (lightness, chroma, hue).
    CieLch,
    /// CIE 1976 L*u*v*.
    CieLuv,
    /// Cylindrical form of CIELuv.
    CieLchuv,
}

impl ColorSpace {
    /// Every supported space, in declaration order.
    pub const ALL: [ColorSpace; 7] = [
        ColorSpace::Srgb,
        ColorSpace::LinearRgb,
        ColorSpace::CieXyz,
        ColorSpace::CieLab,
        ColorSpace::CieLch,
        ColorSpace::CieLuv,
        ColorSpace::CieLchuv,
    ];

    /// Returns the canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Srgb => "sRGB",
            ColorSpace::LinearRgb => "linear RGB",
            ColorSpace::CieXyz => "CIEXYZ",
            ColorSpace::CieLab => "CIELab",
            ColorSpace::CieLch => "CIELCh",
            ColorSpace::CieLuv => "CIELuv",
            ColorSpace::CieLchuv => "CIELChuv",
        }
    }

    /// Returns `true` for the two RGB encodings.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        matches!(self, ColorSpace::Srgb | ColorSpace::LinearRgb)
    }

    /// Returns `true` for spaces whose first component is CIE lightness.
    #[inline]
    pub fn is_lightness_based(&self) -> bool {
        matches!(
            self,
            ColorSpace::CieLab | ColorSpace::CieLch | ColorSpace::CieLuv | ColorSpace::CieLchuv
        )
    }

    /// Returns `true` for the cylindrical (lightness, chroma, hue) forms.
    #[inline]
    pub fn is_polar(&self) -> bool {
        matches!(self, ColorSpace::CieLch | ColorSpace::CieLchuv)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    /// Parses a space name, case-insensitively.
    ///
    /// Accepts the display names plus the upper-case constant spellings
    /// (`SRGB`, `LINEAR_RGB`, `CIEXYZ`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "srgb" => Ok(ColorSpace::Srgb),
            "linearrgb" | "linear" => Ok(ColorSpace::LinearRgb),
            "ciexyz" | "xyz" => Ok(ColorSpace::CieXyz),
            "cielab" | "lab" => Ok(ColorSpace::CieLab),
            "cielch" | "lch" => Ok(ColorSpace::CieLch),
            "cieluv" | "luv" => Ok(ColorSpace::CieLuv),
            "cielchuv" | "lchuv" => Ok(ColorSpace::CieLchuv),
            _ => Err(Error::unsupported_space(s)),
        }
    }
}
