//! # Geometry
//!
//! Passthrough value types for positions and extents. All coordinates are
//! device-independent pixels, matching the render target's coordinate space.

/// A point in render-target coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A floating point extent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Client size packed into a window message parameter: width in the low
    /// word, height in the high word.
    pub fn from_packed(bits: isize) -> Self {
        let width = (bits & 0xFFFF) as u16;
        let height = ((bits >> 16) & 0xFFFF) as u16;
        Self::new(width as f32, height as f32)
    }

    /// Integer pixel dimensions, truncating toward zero.
    ///
    /// Negative and NaN components saturate to 0.
    pub fn to_pixels(self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}

/// Rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create a rectangle from an origin and an extent
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Bounding box of an ellipse
    pub fn centered(center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self::new(
            center.x - radius_x,
            center.y - radius_y,
            center.x + radius_x,
            center.y + radius_y,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Shrink the rectangle by `amount` on every side.
    ///
    /// An inset larger than half the extent collapses that axis onto its midpoint.
    pub fn inset(&self, amount: f32) -> Self {
        let center = self.center();
        let half_w = (self.width() / 2.0 - amount).max(0.0);
        let half_h = (self.height() / 2.0 - amount).max(0.0);
        Self::centered(center, half_w, half_h)
    }

    /// Check if a point is inside this rectangle (right/bottom edges exclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

#[cfg(windows)]
mod native {
    use super::{Point, Rect, Size};
    use windows::Win32::Graphics::Direct2D::Common::{D2D_RECT_F, D2D_SIZE_F, D2D_SIZE_U};
    use windows_numerics::Vector2;

    impl From<Rect> for D2D_RECT_F {
        fn from(r: Rect) -> Self {
            D2D_RECT_F { left: r.left, top: r.top, right: r.right, bottom: r.bottom }
        }
    }

    impl From<Point> for Vector2 {
        fn from(p: Point) -> Self {
            Vector2 { X: p.x, Y: p.y }
        }
    }

    impl From<D2D_SIZE_F> for Size {
        fn from(s: D2D_SIZE_F) -> Self {
            Size::new(s.width, s.height)
        }
    }

    impl From<Size> for D2D_SIZE_U {
        fn from(s: Size) -> Self {
            let (width, height) = s.to_pixels();
            D2D_SIZE_U { width, height }
        }
    }
}
