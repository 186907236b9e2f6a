//! Unified dimensions.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::vector::{TypeSensitive, Vector2};

/// A dimension expressed relative to a parent extent plus an absolute offset.
///
/// The absolute value is `scale * base + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UDim {
    /// Fraction of the parent extent.
    pub scale: f32,
    /// Absolute offset in pixels.
    pub offset: f32,
}

/// A position or size made of unified dimensions.
pub type UVector2 = Vector2<UDim>;

impl UDim {
    /// Create a unified dimension.
    pub const fn new(scale: f32, offset: f32) -> Self {
        Self { scale, offset }
    }

    /// Resolve against a parent extent.
    pub fn as_absolute(&self, base: f32) -> f32 {
        base * self.scale + self.offset
    }

    /// Express as a fraction of a parent extent.
    ///
    /// A zero `base` yields `0.0` rather than a non-finite value.
    pub fn as_relative(&self, base: f32) -> f32 {
        if base != 0.0 {
            self.offset / base + self.scale
        } else {
            0.0
        }
    }
}

impl TypeSensitive for UDim {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn one() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Add for UDim {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.scale + rhs.scale, self.offset + rhs.offset)
    }
}

impl Sub for UDim {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.scale - rhs.scale, self.offset - rhs.offset)
    }
}

impl Mul for UDim {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.scale * rhs.scale, self.offset * rhs.offset)
    }
}

impl Div for UDim {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        // Dividing by a zero component leaves that component at zero.
        let scale = if rhs.scale == 0.0 { 0.0 } else { self.scale / rhs.scale };
        let offset = if rhs.offset == 0.0 { 0.0 } else { self.offset / rhs.offset };
        Self::new(scale, offset)
    }
}

impl Mul<f32> for UDim {
    type Output = Self;

    fn mul(self, c: f32) -> Self {
        Self::new(self.scale * c, self.offset * c)
    }
}

impl Mul<f32> for UVector2 {
    type Output = Self;

    fn mul(self, c: f32) -> Self {
        Self::new(self.x * c, self.y * c)
    }
}

impl UVector2 {
    /// Resolve both components against a parent size.
    pub fn as_absolute(&self, base: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(self.x.as_absolute(base.x), self.y.as_absolute(base.y))
    }
}

impl fmt::Display for UDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.scale, self.offset)
    }
}
