//! Single-precision approximations of the companding curves.
//!
//! The batch engine runs these once per channel per pixel, so they avoid
//! `powf` and `cbrt`. Each root is computed by splitting the float into
//! mantissa and exponent:
//!
//! ```text
//! v = m * 2^e,  m in [0.5, 1)
//! v^(1/n) = poly(m) * 2^(e / n) * 2^((e mod n) / n)
//! ```
//!
//! `poly` is a degree-5 minimax fit of `m^(1/n)` on [0.5, 1); the integer
//! part of `e / n` goes straight into the exponent bits and the remainder is
//! looked up in a table of `2^(k/n)`. Absolute error against the exact
//! curves stays below 1e-4 over [0, 1], well under one 8-bit step.
//!
//! Only call the root helpers on positive finite values; every public curve
//! routes zero and negative inputs to its linear segment first.

/// `2^(k/12)` for `k` in `-11..=11`.
const ROOT_12_CORRECTION: [f32; 23] = [
    0.529_731_5, 0.561_231_04, 0.594_603_55, 0.629_960_5, 0.667_419_9, 0.707_106_8,
    0.749_153_5, 0.793_700_5, 0.840_896_4, 0.890_898_7, 0.943_874_3, 1.0, 1.059_463_1,
    1.122_462, 1.189_207_1, 1.259_921, 1.334_839_9, 1.414_213_5, 1.498_307_1, 1.587_401,
    1.681_792_8, 1.781_797_4, 1.887_748_6,
];

/// `2^(k/5)` for `k` in `-4..=4`.
const ROOT_5_CORRECTION: [f32; 9] = [
    0.574_349_2, 0.659_753_95, 0.757_858_3, 0.870_550_6, 1.0, 1.148_698_4, 1.319_507_9,
    1.515_716_6, 1.741_101_1,
];

/// `2^(k/3)` for `k` in `-2..=2`.
const ROOT_3_CORRECTION: [f32; 5] = [0.629_960_5, 0.793_700_5, 1.0, 1.259_921, 1.587_401];

const CIE_EPSILON: f32 = 0.008_856_452;
const CIE_DELTA: f32 = 0.206_896_56;
const CIE_TOE_SLOPE: f32 = 0.128_418_55;
const CIE_OFFSET: f32 = 0.137_931_03;

#[inline(always)]
fn root_by_parts(val: f32, n: i32, table: &[f32], poly: impl Fn(f32) -> f32) -> f32 {
    let bits = val.to_bits();
    let exponent = ((bits >> 23) & 0xff) as i32 - 126;
    let mantissa = f32::from_bits((bits & 0x807f_ffff) | 0x3f00_0000);

    let exponent_new = exponent / n;
    let shift = f32::from_bits((((exponent_new + 127) as u32) & 0xff) << 23);
    let index = (exponent - exponent_new * n + (n - 1)) as usize;
    poly(mantissa) * shift * table[index]
}

#[inline(always)]
fn root12(val: f32) -> f32 {
    root_by_parts(val, 12, &ROOT_12_CORRECTION, |x| {
        ((((x * 0.067_402_19 - 0.314_149_27) * x + 0.619_391_5) * x - 0.683_865_8) * x
            + 0.512_553_0)
            * x
            + 0.798_668_9
    })
}

#[inline(always)]
fn root5(val: f32) -> f32 {
    root_by_parts(val, 5, &ROOT_5_CORRECTION, |x| {
        ((((x * 0.118_577_29 - 0.556_100_6) * x + 1.108_062) * x - 1.250_547_8) * x
            + 1.008_557_2)
            * x
            + 0.571_452_9
    })
}

/// Cube root for positive finite input.
#[inline(always)]
pub fn cbrt(val: f32) -> f32 {
    root_by_parts(val, 3, &ROOT_3_CORRECTION, |x| {
        ((((x * 0.133_808_15 - 0.632_261_3) * x + 1.276_345_3) * x - 1.481_569_7) * x
            + 1.327_585_8)
            * x
            + 0.376_092_8
    })
}

/// sRGB decode (encoded to linear).
#[inline]
pub fn srgb_eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        // ((v + 0.055) / 1.055)^(12/5)
        let r = root5((v + 0.055) / 1.055);
        let r3 = r * r * r;
        let r6 = r3 * r3;
        r6 * r6
    }
}

/// sRGB encode (linear to encoded).
#[inline]
pub fn srgb_oetf(l: f32) -> f32 {
    if l <= 0.003_130_8 {
        l * 12.92
    } else {
        // l^(5/12)
        let r = root12(l);
        let r2 = r * r;
        r2 * r2 * r * 1.055 - 0.055
    }
}

/// CIE forward companding, see [`crate::cie::f`].
#[inline]
pub fn cie_f(t: f32) -> f32 {
    if t <= CIE_EPSILON {
        t / CIE_TOE_SLOPE + CIE_OFFSET
    } else {
        cbrt(t)
    }
}

/// CIE inverse companding, see [`crate::cie::f_inv`].
#[inline]
pub fn cie_f_inv(u: f32) -> f32 {
    if u <= CIE_DELTA {
        (u - CIE_OFFSET) * CIE_TOE_SLOPE
    } else {
        u * u * u
    }
}

/// CIE lightness L* from relative luminance, see [`crate::cie::lightness`].
#[inline]
pub fn cie_lightness(y_rel: f32) -> f32 {
    if y_rel <= CIE_EPSILON {
        903.296_3 * y_rel
    } else {
        116.0 * cbrt(y_rel) - 16.0
    }
}

/// Relative luminance from CIE lightness, see [`crate::cie::lightness_inv`].
#[inline]
pub fn cie_lightness_inv(l: f32) -> f32 {
    if l <= 8.0 {
        l * 0.001_107_056_5
    } else {
        let t = (l + 16.0) / 116.0;
        t * t * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cie, srgb};

    const MARGIN: f64 = 1e-4;

    #[test]
    fn test_cbrt_across_exponents() {
        for &v in &[0.001f32, 0.01, 0.1, 0.3, 0.5, 0.9, 1.0, 2.0, 7.5, 100.0] {
            let exact = (v as f64).cbrt();
            let approx = cbrt(v) as f64;
            assert!((approx - exact).abs() / exact < 1e-4, "v={}: {} vs {}", v, approx, exact);
        }
    }

    #[test]
    fn test_srgb_matches_exact() {
        for i in 0..=255 {
            let v = i as f32 / 255.0;
            let decoded = srgb_eotf(v) as f64;
            assert!((decoded - srgb::eotf(v as f64)).abs() < MARGIN, "eotf({})", i);
            let encoded = srgb_oetf(v) as f64;
            assert!((encoded - srgb::oetf(v as f64)).abs() < MARGIN, "oetf({})", i);
        }
    }

    #[test]
    fn test_srgb_reference_points() {
        assert!((srgb_eotf(128.0 / 255.0) - 0.21586).abs() < 1e-4);
        assert!((srgb_oetf(0.21586) - 128.0 / 255.0).abs() < 1e-4);
        assert!((srgb_eotf(1.0) - 1.0).abs() < 1e-4);
        assert!((srgb_oetf(1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_cie_matches_exact() {
        for i in 0..=200 {
            let t = i as f32 / 200.0;
            assert!((cie_f(t) as f64 - cie::f(t as f64)).abs() < MARGIN, "f({})", t);
            assert!(
                (cie_lightness(t) as f64 - cie::lightness(t as f64)).abs() < 1e-2,
                "lightness({})",
                t
            );
            let u = 0.1 + t;
            assert!((cie_f_inv(u) as f64 - cie::f_inv(u as f64)).abs() < MARGIN, "f_inv({})", u);
            let l = t * 100.0;
            assert!(
                (cie_lightness_inv(l) as f64 - cie::lightness_inv(l as f64)).abs() < MARGIN,
                "lightness_inv({})",
                l
            );
        }
    }
}
