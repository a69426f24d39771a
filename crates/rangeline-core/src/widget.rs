//! The [`Widget`] contract and the [`Canvas`] it paints into.
//!
//! A host drives every widget through the same cycle: `measure` with the
//! space on offer, `layout` with the bounds it settled on, `paint` into a
//! canvas, and `event` for each input. Events may hand a message back to the
//! host as a boxed [`Any`].
//!
//! ```
//! use rangeline_core::{TypeId, WidgetId};
//!
//! assert_eq!(WidgetId::new(42).0, 42);
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::{BoxStyle, ImageId, Transform2D};
use crate::event::Event;
use crate::geometry::{CornerRadius, Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Host-assigned identity of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Identity of a widget's concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Type id of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// What a widget settled on during layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Size actually occupied
    pub size: Size,
}

/// An interactive or decorative element driven by a host.
pub trait Widget: Send + Sync {
    /// Concrete type of this widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept `bounds` in the parent's coordinates.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Record draw operations.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to input; `Some` carries a message for the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Nested widgets.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Nested widgets, mutably.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Whether the widget consumes pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget takes keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Stable identifier for tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds assigned by the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Backend-neutral drawing surface.
pub trait Canvas {
    /// Fill `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a styled rectangle with optional rounding.
    fn draw_box(&mut self, rect: Rect, radius: CornerRadius, style: &BoxStyle);

    /// Draw a styled circle.
    fn draw_circle(&mut self, center: Point, radius: f32, style: &BoxStyle);

    /// Draw an image stretched into `rect`.
    fn draw_image(&mut self, image: ImageId, rect: Rect);

    /// Restrict drawing to `rect` until the matching pop.
    fn push_clip(&mut self, rect: Rect);

    /// Drop the innermost clip.
    fn pop_clip(&mut self);

    /// Apply `transform` to everything until the matching pop.
    fn push_transform(&mut self, transform: Transform2D);

    /// Drop the innermost transform.
    fn pop_transform(&mut self);
}
