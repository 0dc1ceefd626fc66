//! CIE 1976 L*u*v*.
//!
//! Chromaticity is carried by the u'v' diagram:
//!
//! ```text
//! u' = 4X / (X + 15Y + 3Z)
//! v' = 9Y / (X + 15Y + 3Z)
//! u  = 13 L (u' - u'w)
//! v  = 13 L (v' - v'w)
//! ```

use chromawarp_transfer::cie;

/// u'v' chromaticity of an XYZ triple. Black maps to (0, 0).
#[inline]
pub fn uv_prime(xyz: [f64; 3]) -> (f64, f64) {
    let denom = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if denom == 0.0 {
        return (0.0, 0.0);
    }
    (4.0 * xyz[0] / denom, 9.0 * xyz[1] / denom)
}

/// XYZ to Luv relative to `white` (XYZ).
pub fn xyz_to_luv(xyz: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let (uw, vw) = uv_prime(white);
    let l = cie::lightness(xyz[1] / white[1]);
    let (u, v) = uv_prime(xyz);
    [l, 13.0 * l * (u - uw), 13.0 * l * (v - vw)]
}

/// Luv to XYZ relative to `white` (XYZ). `L == 0` is black.
pub fn luv_to_xyz(luv: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l == 0.0 {
        return [0.0; 3];
    }
    let (uw, vw) = uv_prime(white);
    let up = u / (13.0 * l) + uw;
    let vp = v / (13.0 * l) + vw;
    let y = white[1] * cie::lightness_inv(l);
    if vp == 0.0 {
        return [0.0, y, 0.0];
    }
    [
        y * 9.0 * up / (4.0 * vp),
        y,
        y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp),
    ]
}
