//! Reference white points.
//!
//! A [`WhitePoint`] anchors the absolute CIE spaces (Lab, Luv and their
//! cylindrical forms). It is stored as CIE xyY and converted to XYZ on demand:
//!
//! ```text
//! X = x / y * Y
//! Y = Y
//! Z = (1 - x - y) / y * Y
//! ```
//!
//! # Standard Illuminants
//!
//! Chromaticities follow the CIE 15:2004 tables for the 2° and 10° observers.

use crate::error::{Error, Result};

/// A reference white in CIE xyY form.
///
/// The chromaticity `y` is never zero; [`WhitePoint::new`] rejects it.
///
/// # Example
///
/// ```rust
/// use chromawarp_core::WhitePoint;
///
/// let xyz = WhitePoint::D65.to_xyz();
/// assert!((xyz[0] - 0.95046).abs() < 1e-4);
/// assert_eq!(xyz[1], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhitePoint {
    x: f64,
    y: f64,
    luminance: f64,
}

impl WhitePoint {
    /// Standard illuminant A (incandescent), 2° observer.
    pub const A: Self = Self::xy(0.44757, 0.40745);
    /// Standard illuminant C (average daylight), 2° observer.
    pub const C: Self = Self::xy(0.31006, 0.31616);
    /// D50 (horizon light), 2° observer.
    pub const D50: Self = Self::xy(0.34567, 0.35850);
    /// D55 (mid-morning daylight), 2° observer.
    pub const D55: Self = Self::xy(0.33242, 0.34743);
    /// D65 (noon daylight), 2° observer. The default white.
    pub const D65: Self = Self::xy(0.31270, 0.32900);
    /// D75 (north sky daylight), 2° observer.
    pub const D75: Self = Self::xy(0.29902, 0.31485);
    /// Equal-energy illuminant E.
    pub const E: Self = Self::xy(1.0 / 3.0, 1.0 / 3.0);
    /// D50, 10° observer.
    pub const D50_10: Self = Self::xy(0.34773, 0.35952);
    /// D65, 10° observer.
    pub const D65_10: Self = Self::xy(0.31382, 0.33100);

    const fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            luminance: 1.0,
        }
    }

    /// Creates a white point from xyY.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWhitePoint`] if any component is non-finite or `y` is zero.
    pub fn new(x: f64, y: f64, luminance: f64) -> Result<Self> {
        if !(x.is_finite() && y.is_finite() && luminance.is_finite()) {
            return Err(Error::invalid_white_point(format!(
                "non-finite xyY ({x}, {y}, {luminance})"
            )));
        }
        if y == 0.0 {
            return Err(Error::invalid_white_point("chromaticity y must be non-zero"));
        }
        Ok(Self { x, y, luminance })
    }

    /// Creates a unit-luminance white point from a chromaticity pair.
    pub fn from_chromaticity(x: f64, y: f64) -> Result<Self> {
        Self::new(x, y, 1.0)
    }

    /// Chromaticity x.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Chromaticity y.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Luminance Y.
    #[inline]
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Returns a copy with a different luminance.
    #[inline]
    pub fn with_luminance(self, luminance: f64) -> Self {
        Self { luminance, ..self }
    }

    /// Converts to CIE XYZ.
    #[inline]
    pub fn to_xyz(&self) -> [f64; 3] {
        let scale = self.luminance / self.y;
        [
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
        ]
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        Self::D65
    }
}
