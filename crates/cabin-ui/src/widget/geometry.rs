//! Pixel geometry used by measurement and layout.
//!
//! Layout in Cabin UI happens on the integer pixel grid: measured sizes,
//! constraints and child bounds are all whole pixels, and centering offsets
//! truncate toward zero.

use serde::{Deserialize, Serialize};

/// A point in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A square size.
    #[inline]
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// A four-sided bounding box.
///
/// `right` and `bottom` are exclusive, so `width() == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::from_ltrb(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::from_ltrb(0, 0, 0, 0);

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Check whether a point lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Grow the rectangle symmetrically until it is at least `min` in each
    /// dimension. Dimensions already large enough are left alone.
    ///
    /// An odd amount of growth puts the extra pixel on the right/bottom.
    pub fn expanded_to(&self, min: Size) -> Rect {
        let grow_x = (min.width - self.width()).max(0);
        let grow_y = (min.height - self.height()).max(0);
        Rect::from_ltrb(
            self.left - grow_x / 2,
            self.top - grow_y / 2,
            self.right + (grow_x - grow_x / 2),
            self.bottom + (grow_y - grow_y / 2),
        )
    }
}

/// Padding around a widget's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    /// Create new insets.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same value on all four sides.
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Same horizontal and same vertical value.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// No padding.
    pub const ZERO: Self = Self::uniform(0);

    /// Total horizontal inset (left + right).
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset (top + bottom).
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(Point::new(4, 8), Size::new(48, 48));
        assert_eq!(rect, Rect::from_ltrb(4, 8, 52, 56));
        assert_eq!(rect.size(), Size::square(48));
        assert_eq!(rect.origin(), Point::new(4, 8));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::from_ltrb(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(9, 9)));
        assert!(!rect.contains(Point::new(10, 5)));
        assert!(!rect.contains(Point::new(5, -1)));
    }

    #[test]
    fn test_rect_expanded_to() {
        let rect = Rect::from_ltrb(10, 10, 54, 54);
        let expanded = rect.expanded_to(Size::square(76));
        assert_eq!(expanded, Rect::from_ltrb(-6, -6, 70, 70));
        assert_eq!(expanded.size(), Size::square(76));

        // Already large enough
        assert_eq!(rect.expanded_to(Size::square(20)), rect);

        // Odd growth puts the extra pixel at the far edge
        let odd = Rect::from_ltrb(0, 0, 10, 10).expanded_to(Size::new(13, 10));
        assert_eq!(odd, Rect::from_ltrb(-1, 0, 12, 10));
    }

    #[test]
    fn test_insets() {
        let insets = Insets::new(1, 2, 3, 4);
        assert_eq!(insets.horizontal(), 4);
        assert_eq!(insets.vertical(), 6);
        assert_eq!(Insets::symmetric(8, 2), Insets::new(8, 2, 8, 2));
        assert_eq!(Insets::ZERO.horizontal(), 0);
    }
}
