//! Per-pixel RGBA8 conversion routines.
//!
//! A [`BulkRoutine`] names a direction (into or out of a space) and a
//! [`PixelKernel`] is that routine prepared for one white point, with every
//! constant narrowed to `f32`. Kernels read and write whole pixels only;
//! alpha bytes and any trailing partial pixel are left as they are.
//!
//! Pixels in a non-sRGB space hold the normalized encoding of
//! `chromawarp_color::scaling` times 255, rounded half up and clamped.

use std::fmt;

use chromawarp_color::rgb::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use chromawarp_color::ScaleRange;
use chromawarp_core::{ColorSpace, WhitePoint};
use chromawarp_transfer::fast;

use crate::partition::BYTES_PER_PIXEL;

/// Direction and space of a whole-buffer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkRoutine {
    /// sRGB pixels into the given space.
    Encode(ColorSpace),
    /// Pixels in the given space back to sRGB.
    Decode(ColorSpace),
}

impl BulkRoutine {
    /// The non-sRGB side of the conversion.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        match *self {
            BulkRoutine::Encode(space) | BulkRoutine::Decode(space) => space,
        }
    }

    /// The routine that undoes this one.
    #[inline]
    pub fn inverse(&self) -> Self {
        match *self {
            BulkRoutine::Encode(space) => BulkRoutine::Decode(space),
            BulkRoutine::Decode(space) => BulkRoutine::Encode(space),
        }
    }
}

impl fmt::Display for BulkRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkRoutine::Encode(space) => write!(f, "sRGB -> {}", space),
            BulkRoutine::Decode(space) => write!(f, "{} -> sRGB", space),
        }
    }
}

/// Converts a 0..255 float to a byte, rounding half up.
///
/// Adding 256.5 puts the value in [256, 512), where the float's top eight
/// mantissa bits are exactly the integer part minus 256. NaN maps to 0.
#[inline(always)]
pub fn quantize(v: f32) -> u8 {
    (f32::to_bits(v.max(0.0).min(255.0) + 256.5) >> 15) as u8
}

#[inline(always)]
fn mat_mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline(always)]
fn uv_prime(xyz: [f32; 3]) -> (f32, f32) {
    let denom = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz[0] / denom, 9.0 * xyz[1] / denom)
    }
}

#[inline(always)]
fn to_polar(v: [f32; 3]) -> [f32; 3] {
    let c = v[1].hypot(v[2]);
    let mut h = v[2].atan2(v[1]).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    [v[0], c, h]
}

#[inline(always)]
fn from_polar(v: [f32; 3]) -> [f32; 3] {
    let (sin, cos) = v[2].to_radians().sin_cos();
    [v[0], v[1] * cos, v[1] * sin]
}

/// A [`BulkRoutine`] prepared for one white point.
#[derive(Debug, Clone)]
pub struct PixelKernel {
    routine: BulkRoutine,
    white: [f32; 3],
    white_uv: (f32, f32),
    offset: [f32; 3],
    extent: [f32; 3],
    to_xyz: [[f32; 3]; 3],
    from_xyz: [[f32; 3]; 3],
}

impl PixelKernel {
    /// Prepares `routine` relative to `white`.
    pub fn new(routine: BulkRoutine, white: WhitePoint) -> Self {
        let white = white.to_xyz().map(|c| c as f32);
        let range = ScaleRange::of(routine.space());
        Self {
            routine,
            white,
            white_uv: uv_prime(white),
            offset: range.offset.map(|c| c as f32),
            extent: range.extent.map(|c| c as f32),
            to_xyz: SRGB_TO_XYZ.to_f32_rows(),
            from_xyz: XYZ_TO_SRGB.to_f32_rows(),
        }
    }

    /// The routine this kernel runs.
    #[inline]
    pub fn routine(&self) -> BulkRoutine {
        self.routine
    }

    /// Converts every whole pixel of `chunk` in place.
    pub fn run(&self, chunk: &mut [u8]) {
        match self.routine {
            BulkRoutine::Encode(space) => {
                for px in chunk.chunks_exact_mut(BYTES_PER_PIXEL) {
                    let out = self.encode_pixel(space, [px[0], px[1], px[2]]);
                    px[..3].copy_from_slice(&out);
                }
            }
            BulkRoutine::Decode(space) => {
                for px in chunk.chunks_exact_mut(BYTES_PER_PIXEL) {
                    let out = self.decode_pixel(space, [px[0], px[1], px[2]]);
                    px[..3].copy_from_slice(&out);
                }
            }
        }
    }

    /// sRGB bytes to encoded bytes of `space`.
    #[inline]
    pub fn encode_pixel(&self, space: ColorSpace, rgb: [u8; 3]) -> [u8; 3] {
        let srgb = rgb.map(|c| c as f32 * (1.0 / 255.0));
        let native = match space {
            ColorSpace::Srgb => srgb,
            ColorSpace::LinearRgb => srgb.map(fast::srgb_eotf),
            _ => {
                let xyz = mat_mul(&self.to_xyz, srgb.map(fast::srgb_eotf));
                self.xyz_to_native(space, xyz)
            }
        };
        std::array::from_fn(|i| {
            quantize((native[i] + self.offset[i]) / self.extent[i] * 255.0)
        })
    }

    /// Encoded bytes of `space` back to sRGB bytes.
    #[inline]
    pub fn decode_pixel(&self, space: ColorSpace, encoded: [u8; 3]) -> [u8; 3] {
        let native: [f32; 3] = std::array::from_fn(|i| {
            encoded[i] as f32 * (1.0 / 255.0) * self.extent[i] - self.offset[i]
        });
        let srgb = match space {
            ColorSpace::Srgb => native,
            ColorSpace::LinearRgb => native.map(fast::srgb_oetf),
            _ => {
                let xyz = self.native_to_xyz(space, native);
                mat_mul(&self.from_xyz, xyz).map(fast::srgb_oetf)
            }
        };
        srgb.map(|c| quantize(c * 255.0))
    }

    fn xyz_to_native(&self, space: ColorSpace, xyz: [f32; 3]) -> [f32; 3] {
        match space {
            ColorSpace::CieLab => self.xyz_to_lab(xyz),
            ColorSpace::CieLch => to_polar(self.xyz_to_lab(xyz)),
            ColorSpace::CieLuv => self.xyz_to_luv(xyz),
            ColorSpace::CieLchuv => to_polar(self.xyz_to_luv(xyz)),
            ColorSpace::Srgb | ColorSpace::LinearRgb | ColorSpace::CieXyz => xyz,
        }
    }

    fn native_to_xyz(&self, space: ColorSpace, native: [f32; 3]) -> [f32; 3] {
        match space {
            ColorSpace::CieLab => self.lab_to_xyz(native),
            ColorSpace::CieLch => self.lab_to_xyz(from_polar(native)),
            ColorSpace::CieLuv => self.luv_to_xyz(native),
            ColorSpace::CieLchuv => self.luv_to_xyz(from_polar(native)),
            ColorSpace::Srgb | ColorSpace::LinearRgb | ColorSpace::CieXyz => native,
        }
    }

    #[inline(always)]
    fn xyz_to_lab(&self, xyz: [f32; 3]) -> [f32; 3] {
        let fx = fast::cie_f(xyz[0] / self.white[0]);
        let fy = fast::cie_f(xyz[1] / self.white[1]);
        let fz = fast::cie_f(xyz[2] / self.white[2]);
        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    #[inline(always)]
    fn lab_to_xyz(&self, lab: [f32; 3]) -> [f32; 3] {
        let fy = (lab[0] + 16.0) / 116.0;
        let fx = fy + lab[1] / 500.0;
        let fz = fy - lab[2] / 200.0;
        [
            self.white[0] * fast::cie_f_inv(fx),
            self.white[1] * fast::cie_f_inv(fy),
            self.white[2] * fast::cie_f_inv(fz),
        ]
    }

    #[inline(always)]
    fn xyz_to_luv(&self, xyz: [f32; 3]) -> [f32; 3] {
        let l = fast::cie_lightness(xyz[1] / self.white[1]);
        let (u, v) = uv_prime(xyz);
        let (uw, vw) = self.white_uv;
        [l, 13.0 * l * (u - uw), 13.0 * l * (v - vw)]
    }

    #[inline(always)]
    fn luv_to_xyz(&self, luv: [f32; 3]) -> [f32; 3] {
        let [l, u, v] = luv;
        if l <= 0.0 {
            return [0.0; 3];
        }
        let (uw, vw) = self.white_uv;
        let up = u / (13.0 * l) + uw;
        let vp = v / (13.0 * l) + vw;
        let y = self.white[1] * fast::cie_lightness_inv(l);
        if vp == 0.0 {
            return [0.0, y, 0.0];
        }
        [
            y * 9.0 * up / (4.0 * vp),
            y,
            y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [u8; 3], b: [u8; 3], tol: u8) {
        for i in 0..3 {
            assert!(a[i].abs_diff(b[i]) <= tol, "channel {}: {:?} vs {:?}", i, a, b);
        }
    }

    #[test]
    fn test_quantize_rounding() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.49), 0);
        assert_eq!(quantize(0.5), 1);
        assert_eq!(quantize(127.5), 128);
        assert_eq!(quantize(254.6), 255);
        assert_eq!(quantize(-3.0), 0);
        assert_eq!(quantize(300.0), 255);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn test_encode_xyz_reference() {
        let kernel = PixelKernel::new(BulkRoutine::Encode(ColorSpace::CieXyz), WhitePoint::D65);
        let out = kernel.encode_pixel(ColorSpace::CieXyz, [189, 155, 5]);
        let expected = [
            0.32737 / 0.95047 * 255.0,
            0.34275 * 255.0,
            0.05035 / 1.08883 * 255.0,
        ];
        for i in 0..3 {
            assert!((out[i] as f64 - expected[i]).abs() <= 1.0, "{:?} vs {:?}", out, expected);
        }
    }

    #[test]
    fn test_srgb_routine_is_identity() {
        let kernel = PixelKernel::new(BulkRoutine::Encode(ColorSpace::Srgb), WhitePoint::D65);
        assert_eq!(kernel.encode_pixel(ColorSpace::Srgb, [1, 128, 254]), [1, 128, 254]);
        assert_eq!(kernel.decode_pixel(ColorSpace::Srgb, [1, 128, 254]), [1, 128, 254]);
    }

    #[test]
    fn test_roundtrip_mid_tones() {
        let samples = [[120u8, 150, 180], [0, 162, 205], [108, 60, 175], [128, 128, 128], [200, 90, 60]];
        for space in ColorSpace::ALL {
            let encode = PixelKernel::new(BulkRoutine::Encode(space), WhitePoint::D65);
            let decode = PixelKernel::new(BulkRoutine::Decode(space), WhitePoint::D65);
            for rgb in samples {
                let back = decode.decode_pixel(space, encode.encode_pixel(space, rgb));
                // 8-bit storage of the intermediate costs up to two steps
                assert_close(back, rgb, 3);
            }
        }
    }

    #[test]
    fn test_run_leaves_alpha_and_tail() {
        let kernel = PixelKernel::new(BulkRoutine::Encode(ColorSpace::CieLab), WhitePoint::D65);
        let mut buf = vec![10, 20, 30, 77, 200, 100, 50, 0, 9, 9];
        kernel.run(&mut buf);
        assert_eq!(buf[3], 77);
        assert_eq!(buf[7], 0);
        assert_eq!(&buf[8..], &[9, 9]);
        assert_ne!(&buf[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_routine_inverse_and_display() {
        let r = BulkRoutine::Encode(ColorSpace::CieLuv);
        assert_eq!(r.inverse(), BulkRoutine::Decode(ColorSpace::CieLuv));
        assert_eq!(r.inverse().inverse(), r);
        assert_eq!(r.to_string(), "sRGB -> CIELuv");
        assert_eq!(r.space(), ColorSpace::CieLuv);
    }
}
