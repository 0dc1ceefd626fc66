//! Cylindrical forms of the opponent spaces.
//!
//! CIELCh is CIELab and CIELChuv is CIELuv with the two chroma axes
//! expressed as `C = hypot(a, b)` and hue `h = atan2(b, a)` in degrees,
//! wrapped to [0, 360). Achromatic input (C == 0) gets h = 0.

/// (L, a, b) to (L, C, h).
#[inline]
pub fn to_polar(v: [f64; 3]) -> [f64; 3] {
    let c = v[1].hypot(v[2]);
    if c == 0.0 {
        return [v[0], 0.0, 0.0];
    }
    let h = v[2].atan2(v[1]).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative angles
    let h = if h >= 360.0 { 0.0 } else { h };
    [v[0], c, h]
}

/// (L, C, h) to (L, a, b).
#[inline]
pub fn from_polar(v: [f64; 3]) -> [f64; 3] {
    let (sin, cos) = v[2].to_radians().sin_cos();
    [v[0], v[1] * cos, v[1] * sin]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quadrants() {
        let cases = [
            ([50.0, 10.0, 0.0], 0.0),
            ([50.0, 0.0, 10.0], 90.0),
            ([50.0, -10.0, 0.0], 180.0),
            ([50.0, 0.0, -10.0], 270.0),
        ];
        for (lab, hue) in cases {
            let lch = to_polar(lab);
            assert_abs_diff_eq!(lch[1], 10.0, epsilon = 1e-12);
            assert_abs_diff_eq!(lch[2], hue, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(to_polar([42.0, 0.0, 0.0]), [42.0, 0.0, 0.0]);
    }

    #[test]
    fn test_roundtrip() {
        let lab = [61.865, -19.882, -31.807];
        let back = from_polar(to_polar(lab));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], lab[i], epsilon = 1e-12);
        }
        assert!(to_polar(lab)[2] > 180.0 && to_polar(lab)[2] < 270.0);
    }
}
