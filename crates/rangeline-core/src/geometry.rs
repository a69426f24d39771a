//! Geometric primitives: Point, Size, Rect, `EdgeInsets`, `CornerRadius`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            (other.x - self.x).mul_add(t, self.x),
            (other.y - self.y).mul_add(t, self.y),
        )
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a square size.
    #[must_use]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Per-edge insets. Positive values shrink a rectangle, negative values grow it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset
    pub top: f32,
    /// Left inset
    pub left: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Right inset
    pub right: f32,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create insets with individual values.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create the same inset on every edge.
    #[must_use]
    pub const fn uniform(amount: f32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Shift both horizontal edges outward by `amount`.
    #[must_use]
    pub fn widened(self, amount: f32) -> Self {
        Self {
            left: self.left - amount,
            right: self.right - amount,
            ..self
        }
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Apply per-edge insets. Negative insets enlarge the rectangle.
    #[must_use]
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.left - insets.right).max(0.0),
            (self.height - insets.top - insets.bottom).max(0.0),
        )
    }

    /// Smallest rectangle with integral edges that contains this one.
    ///
    /// Origin is floored and the far edges are ceiled, so the result never
    /// sits on a sub-pixel boundary.
    #[must_use]
    pub fn integral(&self) -> Self {
        if !self.x.is_finite() || !self.y.is_finite() {
            return *self;
        }
        let x = self.x.floor();
        let y = self.y.floor();
        let right = (self.x + self.width).ceil();
        let bottom = (self.y + self.height).ceil();
        Self::new(x, y, right - x, bottom - y)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Top-left radius
    pub top_left: f32,
    /// Top-right radius
    pub top_right: f32,
    /// Bottom-right radius
    pub bottom_right: f32,
    /// Bottom-left radius
    pub bottom_left: f32,
}

impl CornerRadius {
    /// Zero radius
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create uniform corner radius.
    #[must_use]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Check if all corners have zero radius.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_lerp() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(10.0, 10.0);
        assert_eq!(p1.lerp(&p2, 0.5), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(10.0, 20.0, 28.0, 28.0);
        assert_eq!(r.center(), Point::new(24.0, 34.0));
    }

    #[test]
    fn test_rect_contains_point_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(!r.contains_point(&Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_inset_by_negative_grows() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        let grown = r.inset_by(EdgeInsets::uniform(-5.0));
        assert_eq!(grown, Rect::new(5.0, 5.0, 30.0, 30.0));
    }

    #[test]
    fn test_inset_by_positive_shrinks_and_saturates() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            r.inset_by(EdgeInsets::new(1.0, 2.0, 3.0, 4.0)),
            Rect::new(2.0, 1.0, 4.0, 6.0)
        );
        assert_eq!(r.inset_by(EdgeInsets::uniform(8.0)).width, 0.0);
    }

    #[test]
    fn test_edge_insets_widened() {
        let insets = EdgeInsets::uniform(-5.0).widened(3.0);
        assert_eq!(insets.left, -8.0);
        assert_eq!(insets.right, -8.0);
        assert_eq!(insets.top, -5.0);
    }

    #[test]
    fn test_integral_floors_origin_and_ceils_extent() {
        let r = Rect::new(10.4, 2.5, 28.0, 28.0).integral();
        assert_eq!(r, Rect::new(10.0, 2.0, 29.0, 29.0));
    }

    #[test]
    fn test_integral_keeps_whole_rects() {
        let r = Rect::new(3.0, 4.0, 5.0, 6.0);
        assert_eq!(r.integral(), r);
    }

    #[test]
    fn test_integral_leaves_non_finite_alone() {
        let r = Rect::new(f32::NAN, 0.0, 1.0, 1.0);
        assert!(r.integral().x.is_nan());
    }

    proptest! {
        #[test]
        fn prop_integral_contains_original(x in -500.0f32..500.0, y in -500.0f32..500.0, w in 0.0f32..200.0, h in 0.0f32..200.0) {
            let r = Rect::new(x, y, w, h);
            let i = r.integral();
            prop_assert!(i.x <= r.x);
            prop_assert!(i.y <= r.y);
            prop_assert!(i.max_x() >= r.max_x());
            prop_assert_eq!(i.x, i.x.floor());
            prop_assert_eq!(i.width, i.width.floor());
        }
    }
}
