//! Whole-canvas excursions through the batch engine.

use chromawarp_batch::{EngineConfig, PixelSurface, WaitStrategy};
use chromawarp_mix::{ColorSession, ColorSpace, WhitePoint};

use crate::MemoryCanvas;

fn session(width: usize, height: usize, config: EngineConfig) -> ColorSession<MemoryCanvas> {
    let mut session = ColorSession::with_config(MemoryCanvas::new(width, height), config);
    session.load_backend().unwrap();
    session
}

fn assert_near(actual: [u8; 4], expected: [u8; 3]) {
    for i in 0..3 {
        assert!(
            actual[i].abs_diff(expected[i]) <= 1,
            "{actual:?} vs {expected:?}"
        );
    }
}

#[test]
fn test_enter_xyz_encodes_every_pixel() {
    let mut session = session(5, 3, EngineConfig::default().with_workers(2));
    session.background([189.0, 155.0, 5.0]).unwrap();
    session.enter_color_space(ColorSpace::CieXyz, Some(WhitePoint::D65)).unwrap();

    let canvas = session.host();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let px = canvas.get(x, y);
            assert_near(px, [88, 87, 12]);
            assert_eq!(px[3], 255);
        }
    }
}

#[test]
fn test_warp_then_exit_decodes_background() {
    for background in [[120.0, 150.0, 180.0], [200.0, 90.0, 60.0]] {
        let mut session = session(4, 4, EngineConfig::default().with_workers(1));
        session.warp_to_color_space(ColorSpace::CieLab, Some(WhitePoint::D65)).unwrap();
        session.background(background).unwrap();
        assert_ne!(session.host().get(0, 0)[..3], background.map(|c| c as u8));

        session.exit_color_space().unwrap();
        let expected = background.map(|c| c as u8);
        for y in 0..4 {
            for x in 0..4 {
                assert_near(session.host().get(x, y), expected);
            }
        }
    }
}

#[test]
fn test_drawing_inside_an_excursion() {
    let spaces = [
        ColorSpace::LinearRgb,
        ColorSpace::CieXyz,
        ColorSpace::CieLab,
        ColorSpace::CieLch,
        ColorSpace::CieLuv,
    ];
    for space in spaces {
        let mut session = session(6, 4, EngineConfig::default().with_workers(3));
        session.background([120.0, 150.0, 180.0]).unwrap();
        session.enter_color_space(space, None).unwrap();

        session.fill([200.0, 90.0, 60.0]).unwrap();
        session.host_mut().rect(1, 1, 2, 2);
        session.exit_color_space().unwrap();

        let canvas = session.host();
        assert_near(canvas.get(0, 0), [120, 150, 180]);
        assert_near(canvas.get(5, 3), [120, 150, 180]);
        assert_near(canvas.get(1, 1), [200, 90, 60]);
        assert_near(canvas.get(2, 2), [200, 90, 60]);
        assert_eq!(session.context().mixing_space(), ColorSpace::Srgb, "{space}");
    }
}

#[test]
fn test_worker_counts_agree() {
    let (width, height) = (7, 5);
    let source: Vec<u8> = (0..width * height * 4)
        .map(|i| if i % 4 == 3 { 255 } else { (i * 37 % 256) as u8 })
        .collect();

    let run = |config: EngineConfig| {
        let mut session = session(width, height, config);
        session.host_mut().write_pixels(&source);
        session.enter_color_space(ColorSpace::CieLab, None).unwrap();
        session.host().pixels().to_vec()
    };

    let reference = run(EngineConfig::default().with_workers(0));
    assert_ne!(reference, source);
    for workers in [1, 2, 3, 6, 40] {
        for wait in [WaitStrategy::Spin, WaitStrategy::Block] {
            let config = EngineConfig::default().with_workers(workers).with_wait(wait);
            assert_eq!(run(config), reference, "workers={workers} wait={wait:?}");
        }
    }
}

#[test]
fn test_alpha_survives_excursion() {
    let mut session = session(3, 3, EngineConfig::default().with_workers(2));
    session.background([120.0, 150.0, 180.0, 128.0]).unwrap();
    session.enter_color_space(ColorSpace::CieLuv, None).unwrap();
    assert!(session.host().pixels().chunks_exact(4).all(|px| px[3] == 128));
    session.exit_color_space().unwrap();
    assert!(session.host().pixels().chunks_exact(4).all(|px| px[3] == 128));
}

#[test]
fn test_switching_spaces_mid_excursion() {
    let mut session = session(4, 2, EngineConfig::default().with_workers(1));
    session.background([120.0, 150.0, 180.0]).unwrap();
    session.enter_color_space(ColorSpace::CieXyz, None).unwrap();
    session.enter_color_space(ColorSpace::CieLab, None).unwrap();
    assert_eq!(
        session.engine().map(|e| e.active_space()),
        Some(ColorSpace::CieLab)
    );

    session.exit_color_space().unwrap();
    assert_near(session.host().get(3, 1), [120, 150, 180]);

    // already back in sRGB
    let before = session.host().pixels().to_vec();
    session.exit_color_space().unwrap();
    assert_eq!(session.host().pixels(), &before[..]);
}

#[test]
fn test_warp_inside_excursion_does_not_reencode() {
    let mut session = session(5, 2, EngineConfig::default().with_workers(2));
    session.background([120.0, 150.0, 180.0]).unwrap();

    session.enter_color_space(ColorSpace::CieXyz, None).unwrap();
    let entered = session.host().pixels().to_vec();
    session.warp_to_color_space(ColorSpace::CieLab, None).unwrap();
    assert_eq!(session.host().pixels(), &entered[..]);

    // new colors mix in Lab while the canvas stays XYZ-encoded
    let lab = session.color([120.0, 150.0, 180.0]).unwrap();
    assert_eq!(lab.space(), ColorSpace::CieLab);

    session.exit_color_space().unwrap();
    assert_near(session.host().get(4, 1), [120, 150, 180]);

    session.enter_color_space(ColorSpace::CieLab, None).unwrap();
    session.warp_to_color_space(ColorSpace::Srgb, None).unwrap();
    session.exit_color_space().unwrap();
    assert_near(session.host().get(0, 0), [120, 150, 180]);
}

#[test]
fn test_dark_channel_drift_is_bounded() {
    // 8-bit storage of the encoded canvas loses the low end of a dark
    // channel. Measured drift for blue 3: 3 steps via Lab, 6 via XYZ.
    let mut warped = session(2, 2, EngineConfig::default().with_workers(1));
    warped.warp_to_color_space(ColorSpace::CieLab, Some(WhitePoint::D65)).unwrap();
    warped.background([188.0, 155.0, 3.0]).unwrap();
    warped.exit_color_space().unwrap();
    let px = warped.host().get(1, 1);
    assert!(px[0].abs_diff(188) <= 1 && px[1].abs_diff(155) <= 1, "{px:?}");
    assert!(px[2] > 3 && px[2] - 3 <= 4, "{px:?}");

    let mut entered = session(2, 2, EngineConfig::default().with_workers(1));
    entered.background([188.0, 155.0, 3.0]).unwrap();
    entered.enter_color_space(ColorSpace::CieXyz, None).unwrap();
    entered.exit_color_space().unwrap();
    let px = entered.host().get(0, 1);
    assert!(px[0].abs_diff(188) <= 1 && px[1].abs_diff(155) <= 1, "{px:?}");
    assert!(px[2] > 3 && px[2] - 3 <= 7, "{px:?}");
}
