//! Host-facing color values.

use std::cell::OnceCell;

use chromawarp_color::hsx::{rgb_to_hsb, rgb_to_hsl};
use chromawarp_color::{convert_normalized, to_native};
use chromawarp_core::{ColorSpace, WhitePoint};

/// A color produced by a session, tagged with the space it lives in.
///
/// Components are normalized to [0, 1] in `space` relative to `white`, the
/// same numbers a host would store as its color channels. The value is
/// immutable; the sRGB form and the HSB/HSL triples derived from it are
/// computed on first use and cached.
///
/// # Example
///
/// ```rust
/// use chromawarp_core::{ColorSpace, WhitePoint};
/// use chromawarp_mix::ColorValue;
///
/// let lab = ColorValue::new([0.5, 128.0 / 255.0, 128.0 / 255.0, 1.0], ColorSpace::CieLab, WhitePoint::D65);
/// let srgb = lab.srgb();
/// assert!((srgb[0] - srgb[2]).abs() < 1e-6); // neutral
/// ```
#[derive(Debug, Clone)]
pub struct ColorValue {
    components: [f64; 4],
    space: ColorSpace,
    white: WhitePoint,
    srgb: OnceCell<[f64; 4]>,
    hsb: OnceCell<[f64; 3]>,
    hsl: OnceCell<[f64; 3]>,
}

impl ColorValue {
    /// Wraps normalized components of `space`.
    pub fn new(components: [f64; 4], space: ColorSpace, white: WhitePoint) -> Self {
        Self {
            components,
            space,
            white,
            srgb: OnceCell::new(),
            hsb: OnceCell::new(),
            hsl: OnceCell::new(),
        }
    }

    /// Normalized components plus alpha.
    #[inline]
    pub fn components(&self) -> [f64; 4] {
        self.components
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.components[3]
    }

    /// Space the components are expressed in.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// White point the components are relative to.
    #[inline]
    pub fn white(&self) -> WhitePoint {
        self.white
    }

    /// Components in the native range of [`space`](Self::space).
    pub fn native(&self) -> [f64; 4] {
        to_native(self.components, self.space)
    }

    /// Components as 8-bit channels, rounded and clamped.
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.components
            .map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// The color as sRGB under D65, cached.
    pub fn srgb(&self) -> [f64; 4] {
        *self.srgb.get_or_init(|| {
            convert_normalized(
                self.components,
                self.space,
                self.white,
                ColorSpace::Srgb,
                WhitePoint::D65,
            )
        })
    }

    /// Hue, saturation and brightness of [`srgb`](Self::srgb), unit range.
    pub fn hsb(&self) -> [f64; 3] {
        *self.hsb.get_or_init(|| rgb_to_hsb(rgb3(self.srgb())))
    }

    /// Hue, saturation and lightness of [`srgb`](Self::srgb), unit range.
    pub fn hsl(&self) -> [f64; 3] {
        *self.hsl.get_or_init(|| rgb_to_hsl(rgb3(self.srgb())))
    }

    /// Returns `true` once the sRGB form has been computed.
    #[inline]
    pub fn has_cached_srgb(&self) -> bool {
        self.srgb.get().is_some()
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
            && self.space == other.space
            && self.white == other.white
    }
}

#[inline]
fn rgb3(rgba: [f64; 4]) -> [f64; 3] {
    [rgba[0], rgba[1], rgba[2]]
}
