//! Three-component color values with alpha.

/// Three color components plus alpha.
///
/// The space and white point are implied by context; a `Tristimulus` is just
/// numbers. Whether those numbers are native-range or normalized is likewise
/// up to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tristimulus {
    /// The three color components.
    pub components: [f64; 3],
    /// Alpha, 0..1.
    pub alpha: f64,
}

impl Tristimulus {
    /// Creates an opaque value.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            components: [a, b, c],
            alpha: 1.0,
        }
    }

    /// Creates a value with explicit alpha.
    #[inline]
    pub const fn with_alpha(components: [f64; 3], alpha: f64) -> Self {
        Self { components, alpha }
    }

    /// Creates from a `[c0, c1, c2, alpha]` array.
    #[inline]
    pub const fn from_array(v: [f64; 4]) -> Self {
        Self {
            components: [v[0], v[1], v[2]],
            alpha: v[3],
        }
    }

    /// Returns `[c0, c1, c2, alpha]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        let [a, b, c] = self.components;
        [a, b, c, self.alpha]
    }
}

impl From<[f64; 4]> for Tristimulus {
    fn from(v: [f64; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Tristimulus> for [f64; 4] {
    fn from(t: Tristimulus) -> Self {
        t.to_array()
    }
}
