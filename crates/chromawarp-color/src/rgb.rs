//! sRGB primaries and the RGB/XYZ matrices.
//!
//! The matrices are the exact IEC 61966-2-1 derivation for Rec.709
//! primaries and the D65 white, carried to full double precision so the
//! forward/inverse pair round-trips well below 1e-12.

use chromawarp_math::{Mat3, Vec3};
use chromawarp_transfer::srgb;

/// Linear sRGB to CIE XYZ.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.412_390_799_265_959_5, 0.357_584_339_383_878, 0.180_480_788_401_834_3],
    [0.212_639_005_871_510_36, 0.715_168_678_767_756, 0.072_192_315_360_733_71],
    [0.019_330_818_715_591_85, 0.119_194_779_794_626, 0.950_532_152_249_660_6],
]);

/// CIE XYZ to linear sRGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.240_969_941_904_521, -1.537_383_177_570_093_5, -0.498_610_760_293_003_3],
    [-0.969_243_636_280_879_8, 1.875_967_501_507_720_7, 0.041_555_057_407_175_61],
    [0.055_630_079_696_993_61, -0.203_976_958_888_976_56, 1.056_971_514_242_878_6],
]);

/// Linear sRGB to XYZ.
#[inline]
pub fn linear_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    (SRGB_TO_XYZ * Vec3::from_array(rgb)).to_array()
}

/// XYZ to linear sRGB.
#[inline]
pub fn xyz_to_linear(xyz: [f64; 3]) -> [f64; 3] {
    (XYZ_TO_SRGB * Vec3::from_array(xyz)).to_array()
}

/// Gamma-encoded sRGB to XYZ.
#[inline]
pub fn srgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    linear_to_xyz(srgb::eotf_rgb(rgb))
}

/// XYZ to gamma-encoded sRGB.
#[inline]
pub fn xyz_to_srgb(xyz: [f64; 3]) -> [f64; 3] {
    srgb::oetf_rgb(xyz_to_linear(xyz))
}
