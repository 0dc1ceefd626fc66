//! Arguments accepted by color-creation calls.

use chromawarp_core::{Error, Result};

use crate::value::ColorValue;

/// The argument shapes `color()`, `fill()`, `stroke()` and `background()`
/// take.
///
/// Numeric shapes are read according to the session's input mode. Strings
/// are CSS-style colors and are always sRGB. A [`ColorValue`] carries its
/// own space and white point.
///
/// # Example
///
/// ```rust
/// use chromawarp_mix::ColorArgs;
///
/// assert_eq!(ColorArgs::from(130.0), ColorArgs::Gray(130.0));
/// assert_eq!(ColorArgs::from([1.0, 2.0, 3.0]), ColorArgs::Triple([1.0, 2.0, 3.0]));
/// assert!(ColorArgs::try_from(&[1.0_f64; 5][..]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ColorArgs {
    /// A single gray level.
    Gray(f64),
    /// Gray level and alpha.
    GrayAlpha(f64, f64),
    /// Three components, opaque.
    Triple([f64; 3]),
    /// Three components and alpha.
    Quad([f64; 4]),
    /// A CSS color string such as `#a5c` or `#aa55cc`.
    Css(String),
    /// An existing color value.
    Value(ColorValue),
}

impl ColorArgs {
    /// Number of numeric components, or `None` for strings and values.
    pub fn arity(&self) -> Option<usize> {
        match self {
            ColorArgs::Gray(_) => Some(1),
            ColorArgs::GrayAlpha(..) => Some(2),
            ColorArgs::Triple(_) => Some(3),
            ColorArgs::Quad(_) => Some(4),
            ColorArgs::Css(_) | ColorArgs::Value(_) => None,
        }
    }
}

impl From<f64> for ColorArgs {
    fn from(gray: f64) -> Self {
        ColorArgs::Gray(gray)
    }
}

impl From<(f64, f64)> for ColorArgs {
    fn from((gray, alpha): (f64, f64)) -> Self {
        ColorArgs::GrayAlpha(gray, alpha)
    }
}

impl From<[f64; 3]> for ColorArgs {
    fn from(c: [f64; 3]) -> Self {
        ColorArgs::Triple(c)
    }
}

impl From<(f64, f64, f64)> for ColorArgs {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        ColorArgs::Triple([a, b, c])
    }
}

impl From<[f64; 4]> for ColorArgs {
    fn from(c: [f64; 4]) -> Self {
        ColorArgs::Quad(c)
    }
}

impl From<(f64, f64, f64, f64)> for ColorArgs {
    fn from((a, b, c, d): (f64, f64, f64, f64)) -> Self {
        ColorArgs::Quad([a, b, c, d])
    }
}

impl From<&str> for ColorArgs {
    fn from(css: &str) -> Self {
        ColorArgs::Css(css.to_owned())
    }
}

impl From<String> for ColorArgs {
    fn from(css: String) -> Self {
        ColorArgs::Css(css)
    }
}

impl From<ColorValue> for ColorArgs {
    fn from(value: ColorValue) -> Self {
        ColorArgs::Value(value)
    }
}

impl From<&ColorValue> for ColorArgs {
    fn from(value: &ColorValue) -> Self {
        ColorArgs::Value(value.clone())
    }
}

impl TryFrom<&[f64]> for ColorArgs {
    type Error = Error;

    /// Picks the shape from the slice length.
    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [g] => Ok(ColorArgs::Gray(g)),
            [g, a] => Ok(ColorArgs::GrayAlpha(g, a)),
            [a, b, c] => Ok(ColorArgs::Triple([a, b, c])),
            [a, b, c, d] => Ok(ColorArgs::Quad([a, b, c, d])),
            _ => Err(Error::invalid_arguments(format!(
                "expected 1, 2, 3 or 4 values, got {}",
                values.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_shapes() {
        let two: &[f64] = &[0.5, 0.25];
        let four: &[f64] = &[1.0, 2.0, 3.0, 4.0];
        assert_eq!(ColorArgs::try_from(two).unwrap(), ColorArgs::GrayAlpha(0.5, 0.25));
        assert_eq!(ColorArgs::try_from(four).unwrap().arity(), Some(4));
    }

    #[test]
    fn test_bad_arity() {
        let none: &[f64] = &[];
        let seven: &[f64] = &[0.0; 7];
        assert!(ColorArgs::try_from(none).unwrap_err().is_invalid_arguments());
        let err = ColorArgs::try_from(seven).unwrap_err();
        assert!(err.to_string().contains("got 7"));
    }

    #[test]
    fn test_css_has_no_arity() {
        assert_eq!(ColorArgs::from("#fff").arity(), None);
        assert_eq!(ColorArgs::from((1.0, 2.0, 3.0)), ColorArgs::Triple([1.0, 2.0, 3.0]));
    }
}
