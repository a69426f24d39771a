//! Draw commands emitted by widgets.
//!
//! All rendering reduces to these primitives; a backend replays them.

use crate::{Color, CornerRadius, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Opaque handle to an image owned by the rendering backend.
///
/// Widgets only need an image's intrinsic size for layout; decoding and
/// compositing stay with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageId {
    /// Backend-assigned identifier
    pub id: u32,
    /// Intrinsic size in pixels
    pub size: Size,
}

impl ImageId {
    /// Create an image handle.
    #[must_use]
    pub const fn new(id: u32, size: Size) -> Self {
        Self { id, size }
    }
}

/// Stroke style for outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Shadow (None = no shadow)
    pub shadow: Option<Shadow>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
            shadow: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            shadow: None,
        }
    }

    /// Add a shadow to the box.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Shadow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.3),
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
        }
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transformation.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0].mul_add(point.x, m[2].mul_add(point.y, m[4])),
            m[1].mul_add(point.x, m[3].mul_add(point.y, m[5])),
        )
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a backend image stretched into bounds
    Image {
        /// Image handle
        image: ImageId,
        /// Destination bounds
        bounds: Rect,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Bounds covered by this command, ignoring shadows.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { bounds, .. } | Self::Image { bounds, .. } => Some(*bounds),
            Self::Circle { center, radius, .. } => Some(Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            )),
            Self::Group { .. } => None,
        }
    }
}
