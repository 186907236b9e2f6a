//! Common types shared across the graphics system.

use redlilium_core::math::{Rectf, Sizef};

// ============================================================================
// Extent2d
// ============================================================================

/// 2D extent of a texture in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2d {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

impl Extent2d {
    /// Create a new extent.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a float size, truncating fractions and clamping negatives to zero.
    pub fn from_size(size: Sizef) -> Self {
        Self::new(size.width.max(0.0) as u32, size.height.max(0.0) as u32)
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rectangle covering the whole extent.
    pub fn full_rect(&self) -> TexelRect {
        TexelRect::from_dimensions(self.width, self.height)
    }
}

// ============================================================================
// TexelRect
// ============================================================================

/// Rectangular region of a texture in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TexelRect {
    /// X coordinate of the top-left corner.
    pub x: u32,
    /// Y coordinate of the top-left corner.
    pub y: u32,
    /// Width of the region.
    pub width: u32,
    /// Height of the region.
    pub height: u32,
}

impl TexelRect {
    /// Create a new texel rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from dimensions with origin at (0, 0).
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Convert a float area, truncating each edge.
    ///
    /// Returns `None` if the area has a negative or non-finite edge, or is
    /// inverted.
    pub fn from_area(area: &Rectf) -> Option<Self> {
        let edges = [area.left(), area.top(), area.right(), area.bottom()];
        if edges.iter().any(|edge| !edge.is_finite() || *edge < 0.0)
            || area.width() < 0.0
            || area.height() < 0.0
        {
            return None;
        }
        Some(Self::new(
            area.left() as u32,
            area.top() as u32,
            area.width() as u32,
            area.height() as u32,
        ))
    }

    /// Exclusive right edge, or `None` if it does not fit in a `u32`.
    pub fn right(&self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Exclusive bottom edge, or `None` if it does not fit in a `u32`.
    pub fn bottom(&self) -> Option<u32> {
        self.y.checked_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the rectangle lies within `extent`.
    pub fn fits_within(&self, extent: Extent2d) -> bool {
        self.right().is_some_and(|right| right <= extent.width)
            && self.bottom().is_some_and(|bottom| bottom <= extent.height)
    }

    pub fn extent(&self) -> Extent2d {
        Extent2d::new(self.width, self.height)
    }
}
