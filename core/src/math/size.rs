//! Two dimensional extents.

use std::ops::{Div, Mul};

use super::vector::{TypeSensitive, Vector2};

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size<T> {
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

/// Float size, used for texture and widget dimensions.
pub type Sizef = Size<f32>;

impl<T> Size<T> {
    /// Create a size.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: TypeSensitive> Size<T> {
    /// Zero-area size.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Copy> Size<T> {
    /// Size as a vector `(width, height)`.
    pub fn to_vector(&self) -> Vector2<T> {
        Vector2::new(self.width, self.height)
    }
}

impl Sizef {
    /// Whether either side is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl<T: Mul<Output = T>> Mul for Size<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.width * rhs.width, self.height * rhs.height)
    }
}

impl<T: Div<Output = T>> Div for Size<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.width / rhs.width, self.height / rhs.height)
    }
}

impl Mul<f32> for Sizef {
    type Output = Self;

    fn mul(self, c: f32) -> Self {
        Self::new(self.width * c, self.height * c)
    }
}

impl<T> From<Vector2<T>> for Size<T> {
    fn from(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sizes() {
        assert!(Sizef::zero().is_empty());
        assert!(Sizef::new(10.0, 0.0).is_empty());
        assert!(!Sizef::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn vector_conversion() {
        let s = Sizef::new(3.0, 4.0);
        assert_eq!(s.to_vector(), Vector2::new(3.0, 4.0));
        assert_eq!(Sizef::from(Vector2::new(3.0, 4.0)), s);
        assert_eq!(s * 2.0, Sizef::new(6.0, 8.0));
    }
}
