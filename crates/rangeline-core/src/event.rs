//! Input events for widgets.
//!
//! Mouse, touch and unified pointer events all describe the same thing for
//! a single-pointer control: something went down, moved, or lifted. Widgets
//! that do not care about the device can use [`Event::pointer_phase`].

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer cancelled
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Window resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Device-independent phase of a single pointer stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    /// Contact began at the given position.
    Down(Point),
    /// Contact moved to the given position.
    Move(Point),
    /// Contact lifted at the given position.
    Up(Point),
    /// Contact was taken away by the platform.
    Cancel,
}

impl Event {
    /// Check if this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }

    /// Get the position if this is a positional event.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. }
            | Self::PointerDown { position, .. }
            | Self::PointerMove { position, .. }
            | Self::PointerUp { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Collapse mouse, touch and pointer events into a [`PointerPhase`].
    ///
    /// Only the left mouse button drives a pointer stream; other buttons and
    /// non-pointer events return `None`.
    #[must_use]
    pub const fn pointer_phase(&self) -> Option<PointerPhase> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. }
            | Self::PointerDown { position, .. } => Some(PointerPhase::Down(*position)),
            Self::MouseMove { position }
            | Self::TouchMove { position, .. }
            | Self::PointerMove { position, .. } => Some(PointerPhase::Move(*position)),
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchEnd { position, .. }
            | Self::PointerUp { position, .. } => Some(PointerPhase::Up(*position)),
            Self::TouchCancel { .. } | Self::PointerCancel { .. } => Some(PointerPhase::Cancel),
            _ => None,
        }
    }
}
