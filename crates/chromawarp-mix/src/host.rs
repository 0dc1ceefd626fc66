//! The drawing host a session wraps.
//!
//! A [`Host`] supplies the primitives the session cannot do itself: reading
//! raw arguments in its native RGB/HSB/HSL modes, storing draw colors, and
//! (through [`PixelSurface`]) exposing its RGBA8 canvas. The default
//! [`Host::parse_native`] handles numbers and hex strings; hosts with richer
//! color syntax (named colors, `rgb()` functions) override it.

use chromawarp_batch::PixelSurface;
use chromawarp_color::hsx::{hsb_to_rgb, hsl_to_rgb};
use chromawarp_core::{Error, Result};

use crate::args::ColorArgs;
use crate::context::InputMode;
use crate::value::ColorValue;

/// Drawing primitives consumed by [`ColorSession`](crate::ColorSession).
pub trait Host: PixelSurface {
    /// Reads `args` in a host-native `mode` scaled by `maxima`, returning
    /// normalized sRGB plus alpha.
    ///
    /// Only called with [`InputMode::Rgb`], [`InputMode::Hsb`] or
    /// [`InputMode::Hsl`], and never with [`ColorArgs::Value`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorArguments`] if the arguments cannot be read.
    fn parse_native(&self, args: &ColorArgs, mode: InputMode, maxima: [f64; 4]) -> Result<[f64; 4]> {
        parse_native(args, mode, maxima)
    }

    /// Sets the fill color.
    fn set_fill(&mut self, color: &ColorValue);

    /// Sets the stroke color.
    fn set_stroke(&mut self, color: &ColorValue);

    /// Clears the canvas to `color`.
    fn set_background(&mut self, color: &ColorValue);
}

/// Default reading of numeric and hex arguments in a host-native mode.
///
/// One or two numbers are a gray level (and alpha): equal RGB channels in
/// RGB mode, zero hue and saturation otherwise. Hex strings ignore `maxima`.
pub fn parse_native(args: &ColorArgs, mode: InputMode, maxima: [f64; 4]) -> Result<[f64; 4]> {
    let channels = match args {
        ColorArgs::Css(css) => {
            return parse_hex(css)
                .map(|bytes| bytes.map(|b| b as f64 / 255.0))
                .ok_or_else(|| Error::invalid_arguments(format!("unrecognized color string {css:?}")));
        }
        ColorArgs::Value(_) => {
            return Err(Error::invalid_arguments("color values are not host arguments"));
        }
        ColorArgs::Gray(g) => gray_channels(mode, *g, maxima[3]),
        ColorArgs::GrayAlpha(g, a) => gray_channels(mode, *g, *a),
        ColorArgs::Triple([a, b, c]) => [*a, *b, *c, maxima[3]],
        ColorArgs::Quad(q) => *q,
    };

    let unit: [f64; 4] = std::array::from_fn(|i| channels[i] / maxima[i]);
    let rgb = match mode {
        InputMode::Rgb => [unit[0], unit[1], unit[2]],
        InputMode::Hsb => hsb_to_rgb([unit[0], unit[1], unit[2]]),
        InputMode::Hsl => hsl_to_rgb([unit[0], unit[1], unit[2]]),
        InputMode::Space(space) => {
            return Err(Error::invalid_arguments(format!(
                "{space} is not a host-native input mode"
            )));
        }
    };
    Ok([rgb[0], rgb[1], rgb[2], unit[3]])
}

/// Gray level in the units of `mode`: all three RGB channels, or the
/// brightness / lightness channel.
fn gray_channels(mode: InputMode, gray: f64, alpha: f64) -> [f64; 4] {
    match mode {
        InputMode::Rgb => [gray, gray, gray, alpha],
        _ => [0.0, 0.0, gray, alpha],
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex(css: &str) -> Option<[u8; 4]> {
    let hex = css.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 | 4 => {
            let mut out = [255u8; 4];
            for (i, slot) in out.iter_mut().enumerate().take(hex.len()) {
                *slot = digit(i)? * 17;
            }
            Some(out)
        }
        6 | 8 => {
            let mut out = [255u8; 4];
            for (i, slot) in out.iter_mut().enumerate().take(hex.len() / 2) {
                *slot = pair(i * 2)?;
            }
            Some(out)
        }
        _ => None,
    }
}
