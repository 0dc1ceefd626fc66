//! Color creation through every input mode and mixing space.
//!
//! The reference color is sRGB (108, 0, 175). Whatever mode it is written
//! in, mixing in XYZ must give the same normalized components.

use approx::assert_abs_diff_eq;
use chromawarp_batch::EngineConfig;
use chromawarp_mix::{ColorSession, ColorSpace, ColorValue, InputMode, WhitePoint};

use crate::MemoryCanvas;

const MARGIN: f64 = 5e-4;

/// (108, 0, 175) as normalized XYZ, D65.
const XYZ_EXPECTED: [f64; 3] = [0.1392 / 0.95047, 0.06283, 0.41029 / 1.08883];

fn session() -> ColorSession<MemoryCanvas> {
    let config = EngineConfig::default().with_workers(2);
    let mut session = ColorSession::with_config(MemoryCanvas::new(8, 8), config);
    session.load_backend().unwrap();
    session
}

fn assert_components(value: &ColorValue, expected: [f64; 3]) {
    let c = value.components();
    for i in 0..3 {
        assert_abs_diff_eq!(c[i], expected[i], epsilon = MARGIN);
    }
}

fn reference_in(mode: InputMode) -> [f64; 3] {
    match mode {
        InputMode::Rgb => [108.0, 0.0, 175.0],
        InputMode::Hsb => [277.028_571_4, 100.0, 68.627_451],
        InputMode::Hsl => [277.028_571_4, 100.0, 34.313_725_5],
        InputMode::Space(ColorSpace::Srgb) => [108.0 / 255.0, 0.0, 175.0 / 255.0],
        InputMode::Space(ColorSpace::LinearRgb) => [0.149_959_79, 0.0, 0.428_690_50],
        InputMode::Space(ColorSpace::CieXyz) => [0.1392, 0.06283, 0.41029],
        InputMode::Space(ColorSpace::CieLab) => [30.116_85, 64.784_05, -64.946_60],
        InputMode::Space(ColorSpace::CieLch) => [30.116_85, 91.733_49, 314.928_21],
        InputMode::Space(ColorSpace::CieLuv) => [30.116_85, 16.807_50, -87.626_94],
        InputMode::Space(ColorSpace::CieLchuv) => [30.116_85, 89.224_28, 280.857_88],
    }
}

const MODES: [InputMode; 10] = [
    InputMode::Rgb,
    InputMode::Hsb,
    InputMode::Hsl,
    InputMode::Space(ColorSpace::Srgb),
    InputMode::Space(ColorSpace::LinearRgb),
    InputMode::Space(ColorSpace::CieXyz),
    InputMode::Space(ColorSpace::CieLab),
    InputMode::Space(ColorSpace::CieLch),
    InputMode::Space(ColorSpace::CieLuv),
    InputMode::Space(ColorSpace::CieLchuv),
];

#[test]
fn test_every_input_mode_lands_on_same_xyz() {
    let mut session = session();
    session.warp_to_color_space(ColorSpace::CieXyz, Some(WhitePoint::D65)).unwrap();

    for mode in MODES {
        session.set_input_mode(mode, Some(WhitePoint::D65)).unwrap();
        let value = session.color(reference_in(mode)).unwrap();
        assert_eq!(value.space(), ColorSpace::CieXyz, "{mode}");
        assert_components(&value, XYZ_EXPECTED);
        assert_abs_diff_eq!(value.alpha(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_alpha_uses_mode_maximum() {
    let mut session = session();
    session.warp_to_color_space(ColorSpace::CieXyz, None).unwrap();

    let [r, g, b] = reference_in(InputMode::Rgb);
    let rgba = session.color([r, g, b, 51.0]).unwrap();
    assert_components(&rgba, XYZ_EXPECTED);
    assert_abs_diff_eq!(rgba.alpha(), 0.2, epsilon = 1e-12);

    session.set_input_mode(ColorSpace::CieLab, None).unwrap();
    let [l, a, bb] = reference_in(InputMode::Space(ColorSpace::CieLab));
    let laba = session.color([l, a, bb, 0.2]).unwrap();
    assert_components(&laba, XYZ_EXPECTED);
    assert_abs_diff_eq!(laba.alpha(), 0.2, epsilon = 1e-12);
}

#[test]
fn test_values_carry_their_space() {
    let mut session = session();
    let mut values = Vec::new();
    for space in ColorSpace::ALL {
        session.warp_to_color_space(space, None).unwrap();
        values.push(session.color([108.0, 0.0, 175.0]).unwrap());
    }

    session.warp_to_color_space(ColorSpace::CieXyz, None).unwrap();
    session.set_input_mode(InputMode::Hsl, None).unwrap();
    for value in &values {
        let xyz = session.color(value).unwrap();
        assert_components(&xyz, XYZ_EXPECTED);
        assert_abs_diff_eq!(session.red(value).unwrap(), 108.0, epsilon = 0.1);
        assert_abs_diff_eq!(session.blue(value).unwrap(), 175.0, epsilon = 0.1);
    }
}

#[test]
fn test_custom_maxima_per_mode() {
    let mut session = session();
    session.warp_to_color_space(ColorSpace::CieXyz, None).unwrap();

    session
        .set_input_mode_with_maxima(InputMode::Hsb, None, [1.0, 1.0, 1.0, 1.0])
        .unwrap();
    let unit = session.color([277.028_571_4 / 360.0, 1.0, 0.686_274_51]).unwrap();
    assert_components(&unit, XYZ_EXPECTED);

    // HSL keeps its own defaults
    session.set_input_mode(InputMode::Hsl, None).unwrap();
    let hsl = session.color(reference_in(InputMode::Hsl)).unwrap();
    assert_components(&hsl, XYZ_EXPECTED);
    assert_eq!(session.context().maxima(InputMode::Hsb), [1.0; 4]);
}

#[test]
fn test_css_strings_are_srgb_everywhere() {
    let mut session = session();
    session.warp_to_color_space(ColorSpace::CieXyz, None).unwrap();

    for mode in [InputMode::Hsb, InputMode::Space(ColorSpace::CieLuv)] {
        session.set_input_mode(mode, None).unwrap();
        assert_components(&session.color("#6c00af").unwrap(), XYZ_EXPECTED);
    }

    let sky = session.color("lightskyblue").unwrap();
    assert_abs_diff_eq!(session.red(&sky).unwrap(), 135.0, epsilon = 0.05);
    assert_abs_diff_eq!(session.green(&sky).unwrap(), 206.0, epsilon = 0.05);
    assert_abs_diff_eq!(session.blue(&sky).unwrap(), 250.0, epsilon = 0.05);
    assert_components(&sky, [0.493_153 / 0.95047, 0.561_939, 0.986_935 / 1.08883]);
}

#[test]
fn test_mixing_spaces() {
    let mut session = session();
    let rgb = [0.0, 162.0, 205.0];
    let lab_l = 61.866_62 / 100.0;
    let cases = [
        (ColorSpace::Srgb, [0.0, 162.0 / 255.0, 205.0 / 255.0]),
        (ColorSpace::LinearRgb, [0.0, 0.361_306_78, 0.610_495_57]),
        (ColorSpace::CieXyz, [0.239_380 / 0.95047, 0.302_468, 0.623_362 / 1.08883]),
        (
            ColorSpace::CieLab,
            [lab_l, (-19.873_14 + 128.0) / 255.0, (-31.805_17 + 128.0) / 255.0],
        ),
        (ColorSpace::CieLch, [lab_l, 37.503_47 / 150.0, 238.001_22 / 360.0]),
        (
            ColorSpace::CieLuv,
            [lab_l, (-43.242_00 + 134.0) / 354.0, (-47.249_15 + 140.0) / 262.0],
        ),
        (ColorSpace::CieLchuv, [lab_l, 64.049_61 / 180.0, 227.535_53 / 360.0]),
    ];

    for (space, expected) in cases {
        session.warp_to_color_space(space, Some(WhitePoint::D65)).unwrap();
        let value = session.color(rgb).unwrap();
        assert_eq!(value.space(), space);
        assert_components(&value, expected);
        assert_abs_diff_eq!(session.green(&value).unwrap(), 162.0, epsilon = 0.05);
    }
}

#[test]
fn test_fill_bytes_follow_mixing_space() {
    let mut session = session();
    session.warp_to_color_space(ColorSpace::CieLab, None).unwrap();
    session.fill([120.0, 150.0, 180.0]).unwrap();
    let fill = session.host().fill();
    for (a, b) in fill.iter().zip([155u8, 125, 109, 255]) {
        assert!(a.abs_diff(b) <= 1, "{fill:?}");
    }

    session.warp_to_color_space(ColorSpace::Srgb, None).unwrap();
    session.stroke(130.0).unwrap();
    assert_eq!(session.host().stroke(), [130, 130, 130, 255]);
}
