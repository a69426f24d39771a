//! Size limits handed to [`Widget::measure`](crate::Widget::measure).

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Minimum and maximum extents a widget may report from its measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Constraints from explicit limits.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Anything from zero to infinity on both axes.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Only widths up to `max_width`; height is free.
    #[must_use]
    pub const fn max_width(max_width: f32) -> Self {
        Self::new(0.0, max_width, 0.0, f32::INFINITY)
    }

    /// Clamp a preferred size into these limits.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let c = Constraints::default();
        assert_eq!(c, Constraints::unbounded());
        assert!(c.max_height.is_infinite());
    }

    #[test]
    fn test_constrain_clamps_each_axis() {
        let c = Constraints::new(10.0, 100.0, 20.0, 80.0);
        assert_eq!(c.constrain(Size::new(50.0, 50.0)), Size::new(50.0, 50.0));
        assert_eq!(c.constrain(Size::new(5.0, 5.0)), Size::new(10.0, 20.0));
        assert_eq!(c.constrain(Size::new(200.0, 200.0)), Size::new(100.0, 80.0));
    }

    #[test]
    fn test_max_width_narrows_preferred_width() {
        let c = Constraints::max_width(150.0);
        assert_eq!(c.constrain(Size::new(200.0, 28.0)), Size::new(150.0, 28.0));
    }
}
