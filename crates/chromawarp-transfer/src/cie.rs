//! CIE lightness companding.
//!
//! CIELab and CIELuv share the same lightness curve: a cube root above the
//! CIE threshold [`EPSILON`] and a straight line below it, meeting with a
//! continuous first derivative.
//!
//! ```text
//! f(t)     = t^(1/3)                   if t > EPSILON
//!          = t * KAPPA / 116 + 16/116   otherwise
//! f_inv(u) = u^3                       if u > DELTA
//!          = 3 * DELTA^2 * (u - 4/29)   otherwise
//! ```

/// Threshold between the linear toe and the cube root, `216 / 24389`.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// Slope of the lightness toe, `24389 / 27`.
pub const KAPPA: f64 = 24389.0 / 27.0;

/// `f(EPSILON)`, the inverse-side threshold, `6 / 29`.
pub const DELTA: f64 = 6.0 / 29.0;

const OFFSET: f64 = 4.0 / 29.0;

/// Forward companding of a white-relative value.
#[inline]
pub fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        t * KAPPA / 116.0 + OFFSET
    }
}

/// Inverse of [`f`].
#[inline]
pub fn f_inv(u: f64) -> f64 {
    if u > DELTA {
        u * u * u
    } else {
        3.0 * DELTA * DELTA * (u - OFFSET)
    }
}

/// CIE lightness L* (0..100) from relative luminance `Y / Yw`.
#[inline]
pub fn lightness(y_rel: f64) -> f64 {
    if y_rel > EPSILON {
        116.0 * y_rel.cbrt() - 16.0
    } else {
        KAPPA * y_rel
    }
}

/// Relative luminance `Y / Yw` from CIE lightness L*.
#[inline]
pub fn lightness_inv(l: f64) -> f64 {
    if l > 8.0 {
        let t = (l + 16.0) / 116.0;
        t * t * t
    } else {
        l / KAPPA
    }
}
