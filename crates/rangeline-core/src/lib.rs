//! Core types and traits for Rangeline widgets.
//!
//! This crate provides foundational types used by the widget crate:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`EdgeInsets`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`] and the device-independent [`PointerPhase`]
//! - Painting: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Animation: [`Easing`], [`Transition`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{EasedValue, Easing, Interpolate, Transition};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, ImageId, Shadow, StrokeStyle, Transform2D};
pub use event::{Event, MouseButton, PointerId, PointerPhase, PointerType, TouchId};
pub use geometry::{CornerRadius, EdgeInsets, Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, TypeId, Widget, WidgetId};
