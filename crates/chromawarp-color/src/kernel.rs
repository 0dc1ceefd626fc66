//! Single-triple transforms to and from CIE XYZ.
//!
//! Every supported space has a direct path to XYZ; converting between two
//! arbitrary spaces goes through XYZ (see [`crate::convert`]). The functions
//! here take and return arrays by value, so the input is never touched and
//! every result is a fresh value, including the XYZ identity path.
//!
//! No clamping happens here. Out-of-gamut inputs produce out-of-range but
//! finite outputs.

use chromawarp_core::ColorSpace;

use crate::{lab, luv, polar, rgb};

/// Converts `input`, expressed in `space` (native range), to XYZ.
///
/// `white` is the XYZ of the reference white; only the CIE opponent spaces
/// use it.
pub fn to_xyz(input: [f64; 3], space: ColorSpace, white: [f64; 3]) -> [f64; 3] {
    match space {
        ColorSpace::Srgb => rgb::srgb_to_xyz(input),
        ColorSpace::LinearRgb => rgb::linear_to_xyz(input),
        ColorSpace::CieXyz => input,
        ColorSpace::CieLab => lab::lab_to_xyz(input, white),
        ColorSpace::CieLch => lab::lab_to_xyz(polar::from_polar(input), white),
        ColorSpace::CieLuv => luv::luv_to_xyz(input, white),
        ColorSpace::CieLchuv => luv::luv_to_xyz(polar::from_polar(input), white),
    }
}

/// Converts XYZ to `space` (native range) relative to `white` (XYZ).
pub fn from_xyz(xyz: [f64; 3], space: ColorSpace, white: [f64; 3]) -> [f64; 3] {
    match space {
        ColorSpace::Srgb => rgb::xyz_to_srgb(xyz),
        ColorSpace::LinearRgb => rgb::xyz_to_linear(xyz),
        ColorSpace::CieXyz => xyz,
        ColorSpace::CieLab => lab::xyz_to_lab(xyz, white),
        ColorSpace::CieLch => polar::to_polar(lab::xyz_to_lab(xyz, white)),
        ColorSpace::CieLuv => luv::xyz_to_luv(xyz, white),
        ColorSpace::CieLchuv => polar::to_polar(luv::xyz_to_luv(xyz, white)),
    }
}
