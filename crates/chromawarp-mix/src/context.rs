//! Input mode and mixing space state.
//!
//! A [`MixingContext`] answers two questions for every color-creation call:
//! how raw numbers are read (the input mode, its white point and its
//! maxima) and which space the result is stored in (the mixing space and
//! its white point).
//!
//! # Default maxima
//!
//! | Mode | Maxima |
//! |------|--------|
//! | `Rgb` | 255, 255, 255, 255 |
//! | `Hsb`, `Hsl` | 360, 100, 100, 1 |
//! | any [`ColorSpace`] | 1, 1, 1, 1 (arguments are native values) |

use std::fmt;
use std::str::FromStr;

use chromawarp_core::{ColorSpace, Error, Result, WhitePoint};

/// How raw numeric arguments to `color()` are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputMode {
    /// Host RGB, scaled by the RGB maxima.
    #[default]
    Rgb,
    /// Host hue / saturation / brightness.
    Hsb,
    /// Host hue / saturation / lightness.
    Hsl,
    /// Native components of a colorimetric space.
    Space(ColorSpace),
}

impl InputMode {
    /// Returns `true` for the three host-native modes.
    #[inline]
    pub fn is_native(&self) -> bool {
        !matches!(self, InputMode::Space(_))
    }

    /// Maxima a mode starts with.
    pub fn default_maxima(&self) -> [f64; 4] {
        match self {
            InputMode::Rgb => [255.0; 4],
            InputMode::Hsb | InputMode::Hsl => [360.0, 100.0, 100.0, 1.0],
            InputMode::Space(_) => [1.0; 4],
        }
    }

    fn slot(&self) -> usize {
        match self {
            InputMode::Rgb => 0,
            InputMode::Hsb => 1,
            InputMode::Hsl => 2,
            InputMode::Space(space) => {
                3 + ColorSpace::ALL.iter().position(|s| s == space).unwrap_or(0)
            }
        }
    }
}

impl From<ColorSpace> for InputMode {
    fn from(space: ColorSpace) -> Self {
        InputMode::Space(space)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Rgb => f.write_str("RGB"),
            InputMode::Hsb => f.write_str("HSB"),
            InputMode::Hsl => f.write_str("HSL"),
            InputMode::Space(space) => write!(f, "{}", space),
        }
    }
}

impl FromStr for InputMode {
    type Err = Error;

    /// `RGB`, `HSB` (or `HSV`), `HSL`, or any color space name.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "RGB" | "rgb" => Ok(InputMode::Rgb),
            "HSB" | "hsb" | "HSV" | "hsv" => Ok(InputMode::Hsb),
            "HSL" | "hsl" => Ok(InputMode::Hsl),
            other => other.parse().map(InputMode::Space),
        }
    }
}

/// Replacement maxima for one input mode.
///
/// Mirrors the host's argument-count overloads: one value for every
/// channel, three for the color channels with alpha kept, or all four.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Maxima {
    /// One maximum for all four channels.
    Uniform(f64),
    /// Color channel maxima; the alpha maximum is kept.
    Channels([f64; 3]),
    /// All four maxima.
    All([f64; 4]),
}

impl Maxima {
    /// Applies the overload on top of `current`.
    pub fn apply(self, current: [f64; 4]) -> [f64; 4] {
        match self {
            Maxima::Uniform(m) => [m; 4],
            Maxima::Channels([r, g, b]) => [r, g, b, current[3]],
            Maxima::All(all) => all,
        }
    }

    fn validate(self) -> Result<Self> {
        let values: &[f64] = match &self {
            Maxima::Uniform(m) => std::slice::from_ref(m),
            Maxima::Channels(c) => c,
            Maxima::All(a) => a,
        };
        if let Some(bad) = values.iter().find(|m| !m.is_finite() || **m == 0.0) {
            return Err(Error::invalid_arguments(format!(
                "maximum must be finite and non-zero, got {bad}"
            )));
        }
        Ok(self)
    }
}

impl From<f64> for Maxima {
    fn from(m: f64) -> Self {
        Maxima::Uniform(m)
    }
}

impl From<[f64; 3]> for Maxima {
    fn from(c: [f64; 3]) -> Self {
        Maxima::Channels(c)
    }
}

impl From<[f64; 4]> for Maxima {
    fn from(a: [f64; 4]) -> Self {
        Maxima::All(a)
    }
}

impl TryFrom<&[f64]> for Maxima {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [m] => Ok(Maxima::Uniform(m)),
            [r, g, b] => Ok(Maxima::Channels([r, g, b])),
            [r, g, b, a] => Ok(Maxima::All([r, g, b, a])),
            _ => Err(Error::invalid_arguments(format!(
                "expected 1, 3 or 4 maxima, got {}",
                values.len()
            ))),
        }
    }
}

const SLOTS: usize = 3 + ColorSpace::ALL.len();

/// Input and mixing state of one drawing session.
#[derive(Debug, Clone, PartialEq)]
pub struct MixingContext {
    input_mode: InputMode,
    input_white: WhitePoint,
    mixing_space: ColorSpace,
    mixing_white: WhitePoint,
    maxima: [[f64; 4]; SLOTS],
}

impl Default for MixingContext {
    fn default() -> Self {
        let mut maxima = [[1.0; 4]; SLOTS];
        for mode in [InputMode::Rgb, InputMode::Hsb, InputMode::Hsl] {
            maxima[mode.slot()] = mode.default_maxima();
        }
        Self {
            input_mode: InputMode::Rgb,
            input_white: WhitePoint::D65,
            mixing_space: ColorSpace::Srgb,
            mixing_white: WhitePoint::D65,
            maxima,
        }
    }
}

impl MixingContext {
    /// Host RGB input, D65, sRGB mixing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input mode.
    #[inline]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// White point colorimetric input is read against.
    #[inline]
    pub fn input_white(&self) -> WhitePoint {
        self.input_white
    }

    /// Space new colors are stored in.
    #[inline]
    pub fn mixing_space(&self) -> ColorSpace {
        self.mixing_space
    }

    /// White point of the mixing space.
    #[inline]
    pub fn mixing_white(&self) -> WhitePoint {
        self.mixing_white
    }

    /// Maxima of `mode`.
    #[inline]
    pub fn maxima(&self, mode: InputMode) -> [f64; 4] {
        self.maxima[mode.slot()]
    }

    /// Maxima of the current input mode.
    #[inline]
    pub fn current_maxima(&self) -> [f64; 4] {
        self.maxima(self.input_mode)
    }

    /// Switches the input mode. `None` keeps the last input white.
    pub fn set_input_mode(&mut self, mode: InputMode, white: Option<WhitePoint>) {
        self.input_mode = mode;
        if let Some(white) = white {
            self.input_white = white;
        }
    }

    /// Switches the input mode and replaces its maxima.
    ///
    /// Only `mode`'s maxima change. On error nothing changes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorArguments`] for a zero or non-finite maximum.
    pub fn set_input_mode_with_maxima(
        &mut self,
        mode: InputMode,
        white: Option<WhitePoint>,
        maxima: Maxima,
    ) -> Result<()> {
        let maxima = maxima.validate()?;
        let slot = mode.slot();
        self.maxima[slot] = maxima.apply(self.maxima[slot]);
        self.set_input_mode(mode, white);
        Ok(())
    }

    /// Switches the mixing space. `None` keeps the last mixing white.
    pub fn set_mixing_space(&mut self, space: ColorSpace, white: Option<WhitePoint>) {
        self.mixing_space = space;
        if let Some(white) = white {
            self.mixing_white = white;
        }
    }
}
