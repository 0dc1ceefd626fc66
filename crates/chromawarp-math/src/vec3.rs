//! 3D vector type for tristimulus triplets.
//!
//! [`Vec3`] carries RGB, XYZ or any other three-component color value
//! through the matrix stage of a conversion.

/// A 3D vector for color triplets (RGB, XYZ, etc.).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
///
/// # Example
///
/// ```rust
/// use chromawarp_math::Vec3;
///
/// let color = Vec3::from_array([0.5, 0.25, 1.0]);
/// assert_eq!(color.y, 0.25);
/// assert_eq!(color.to_array(), [0.5, 0.25, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
