//! Axis aligned rectangles.

use std::ops::{Add, Sub};

use super::size::Size;
use super::vector::Vector2;

/// Rectangle stored as its top-left (`min`) and bottom-right (`max`) corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    /// Top-left corner.
    pub min: Vector2<T>,
    /// Bottom-right corner (exclusive).
    pub max: Vector2<T>,
}

/// Float rectangle, used for texture upload areas and widget bounds.
pub type Rectf = Rect<f32>;

impl<T: Copy + Add<Output = T> + Sub<Output = T> + PartialOrd> Rect<T> {
    /// Create a rectangle from its corners.
    pub const fn new(min: Vector2<T>, max: Vector2<T>) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from a position and a size.
    pub fn from_position_size(position: Vector2<T>, size: Size<T>) -> Self {
        Self {
            min: position,
            max: Vector2::new(position.x + size.width, position.y + size.height),
        }
    }

    pub fn left(&self) -> T {
        self.min.x
    }

    pub fn top(&self) -> T {
        self.min.y
    }

    pub fn right(&self) -> T {
        self.max.x
    }

    pub fn bottom(&self) -> T {
        self.max.y
    }

    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width(), self.height())
    }

    pub fn position(&self) -> Vector2<T> {
        self.min
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Whether the point lies inside the rectangle (max edges exclusive).
    pub fn contains_point(&self, p: Vector2<T>) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }
}
