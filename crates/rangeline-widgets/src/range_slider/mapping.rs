//! Conversions between domain values and pixel positions along the track.
//!
//! A handle of width `w` travels over `track_width - w` pixels: its left edge
//! sits at 0 for the domain minimum and at `track_width - w` for the maximum.

use rangeline_core::{Rect, Size};

/// Domain value for a handle whose center is at `x`.
///
/// Returns `domain_min` when the handle is at least as wide as the track or
/// the domain is empty, so no NaN or infinity can escape.
#[must_use]
pub fn value_for_x(
    x: f32,
    handle_width: f32,
    track_width: f32,
    domain_min: f64,
    domain_max: f64,
) -> f64 {
    let travel = f64::from(track_width - handle_width);
    if travel < f64::EPSILON || !travel.is_finite() {
        return domain_min;
    }
    let value = domain_min
        + (f64::from(x) - f64::from(handle_width) / 2.0) / travel * (domain_max - domain_min);
    if value.is_finite() {
        value
    } else {
        domain_min
    }
}

/// Left edge of a handle showing `value`. Not rounded to whole pixels.
///
/// Returns 0 for an empty domain or a handle at least as wide as the track.
#[must_use]
pub fn x_for_value(
    value: f64,
    handle_width: f32,
    track_width: f32,
    domain_min: f64,
    domain_max: f64,
) -> f32 {
    let span = domain_max - domain_min;
    if span.abs() < f64::EPSILON || !span.is_finite() {
        return 0.0;
    }
    let travel = f64::from(track_width - handle_width).max(0.0);
    let x = travel * (value - domain_min) / span;
    if x.is_finite() {
        x as f32
    } else {
        0.0
    }
}

/// Track size and domain bundled for repeated conversions during one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMapper {
    /// Size of the slider's own bounds
    pub track: Size,
    /// Lower domain bound
    pub minimum: f64,
    /// Upper domain bound
    pub maximum: f64,
}

impl GeometryMapper {
    /// Create a mapper for the given bounds size and domain.
    #[must_use]
    pub const fn new(track: Size, minimum: f64, maximum: f64) -> Self {
        Self {
            track,
            minimum,
            maximum,
        }
    }

    /// Whether a handle of `handle_width` has any room to move.
    #[must_use]
    pub fn has_travel(&self, handle_width: f32) -> bool {
        self.track.width > handle_width
    }

    /// Domain value for a handle centered at `x`.
    #[must_use]
    pub fn value_for_x(&self, x: f32, handle_width: f32) -> f64 {
        value_for_x(x, handle_width, self.track.width, self.minimum, self.maximum)
    }

    /// Left edge of a handle showing `value`.
    #[must_use]
    pub fn x_for_value(&self, value: f64, handle_width: f32) -> f32 {
        x_for_value(value, handle_width, self.track.width, self.minimum, self.maximum)
    }

    /// Pixel-aligned frame for a handle of `size` showing `value`,
    /// vertically centered in the track.
    #[must_use]
    pub fn handle_rect(&self, value: f64, size: Size) -> Rect {
        let x = self.x_for_value(value, size.width);
        let y = self.track.height / 2.0 - size.height / 2.0;
        Rect::new(x, y, size.width, size.height).integral()
    }
}
