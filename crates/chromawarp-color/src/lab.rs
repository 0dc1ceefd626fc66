//! CIE 1976 L*a*b*.
//!
//! ```text
//! L = 116 f(Y/Yw) - 16
//! a = 500 (f(X/Xw) - f(Y/Yw))
//! b = 200 (f(Y/Yw) - f(Z/Zw))
//! ```
//!
//! where `f` is [`chromawarp_transfer::cie::f`].

use chromawarp_transfer::cie;

/// XYZ to Lab relative to `white` (XYZ).
#[inline]
pub fn xyz_to_lab(xyz: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let fx = cie::f(xyz[0] / white[0]);
    let fy = cie::f(xyz[1] / white[1]);
    let fz = cie::f(xyz[2] / white[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Lab to XYZ relative to `white` (XYZ).
#[inline]
pub fn lab_to_xyz(lab: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;
    [
        white[0] * cie::f_inv(fx),
        white[1] * cie::f_inv(fy),
        white[2] * cie::f_inv(fz),
    ]
}
