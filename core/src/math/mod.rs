//! Math primitives for widget geometry and texture addressing.
//!
//! [`Vector2`] is generic so the same type serves as a float point, an
//! integer texel coordinate, or a [`UVector2`] of unified dimensions.
//! Interop with the rest of the engine goes through the nalgebra [`Vec2`]
//! alias.

pub use nalgebra;

mod rect;
mod size;
mod udim;
mod vector;

pub use rect::{Rect, Rectf};
pub use size::{Size, Sizef};
pub use udim::{UDim, UVector2};
pub use vector::{TypeSensitive, Vector2, Vector2f};

/// 2D vector (f32) used by the rendering side of the engine.
pub type Vec2 = nalgebra::Vector2<f32>;

impl From<Vector2<f32>> for Vec2 {
    fn from(v: Vector2<f32>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2<f32> {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nalgebra_roundtrip() {
        let v = Vector2::new(1.5f32, -2.0);
        let n: Vec2 = v.into();
        assert_eq!(n.x, 1.5);
        assert_eq!(n.y, -2.0);
        assert_eq!(Vector2::from(n), v);
    }
}
