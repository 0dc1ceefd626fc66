//! HSB and HSL derived from sRGB.
//!
//! All components are unit range: hue in [0, 1) (one full turn), saturation,
//! brightness and lightness in [0, 1]. Inputs are gamma-encoded sRGB in
//! [0, 1]. Pure black and pure white short-circuit before any division.

#[inline]
fn hue_and_chroma(rgb: [f64; 3]) -> (f64, f64, f64, f64) {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let sector = if chroma == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / chroma + 6.0) % 6.0
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    (sector / 6.0, chroma, max, min)
}

/// sRGB to (hue, saturation, brightness).
pub fn rgb_to_hsb(rgb: [f64; 3]) -> [f64; 3] {
    let (hue, chroma, max, _) = hue_and_chroma(rgb);
    if max == 0.0 {
        return [0.0; 3];
    }
    [hue, chroma / max, max]
}

/// sRGB to (hue, saturation, lightness).
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let (hue, chroma, max, min) = hue_and_chroma(rgb);
    if min == 1.0 {
        return [0.0, 0.0, 1.0];
    }
    if max == 0.0 {
        return [0.0; 3];
    }
    let lightness = (max + min) / 2.0;
    [hue, chroma / (1.0 - (2.0 * lightness - 1.0).abs()), lightness]
}

/// Maps a hue sector and chroma to an RGB triple without the lightness offset.
#[inline]
fn sector_rgb(hue: f64, chroma: f64) -> [f64; 3] {
    let h6 = hue.rem_euclid(1.0) * 6.0;
    let x = chroma * (1.0 - (h6 % 2.0 - 1.0).abs());
    match h6 as u32 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    }
}

/// (hue, saturation, brightness) to sRGB.
pub fn hsb_to_rgb(hsb: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsb;
    let chroma = v * s;
    let m = v - chroma;
    sector_rgb(h, chroma).map(|c| c + m)
}

/// (hue, saturation, lightness) to sRGB.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let m = l - chroma / 2.0;
    sector_rgb(h, chroma).map(|c| c + m)
}
