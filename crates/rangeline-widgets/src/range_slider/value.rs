//! Value model for the range slider.
//!
//! Every mutation re-clamps; nothing is ever rejected. The minimum-distance
//! clamp is always applied last so it wins over secondary bounds.

use serde::{Deserialize, Serialize};

/// Domain, selection and stepping state of a two-handle slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueModel {
    minimum: f64,
    maximum: f64,
    low: f64,
    high: f64,
    minimum_distance: f64,
    step: f64,
    step_continuously: bool,
    /// Step used for rounding by the setters. Resolved per drag session.
    active_step: f64,
    low_maximum: Option<f64>,
    high_minimum: Option<f64>,
    low_hidden: bool,
    high_hidden: bool,
    #[serde(skip)]
    dirty: bool,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueModel {
    /// Domain [0, 1] with the full range selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            low: 0.0,
            high: 1.0,
            minimum_distance: 0.0,
            step: 0.0,
            step_continuously: false,
            active_step: 0.0,
            low_maximum: None,
            high_minimum: None,
            low_hidden: false,
            high_hidden: false,
            dirty: true,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Lower domain bound.
    #[must_use]
    pub const fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper domain bound.
    #[must_use]
    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Low selection. Pinned to the domain minimum while the low handle is hidden.
    #[must_use]
    pub const fn low(&self) -> f64 {
        if self.low_hidden {
            self.minimum
        } else {
            self.low
        }
    }

    /// High selection. Pinned to the domain maximum while the high handle is hidden.
    #[must_use]
    pub const fn high(&self) -> f64 {
        if self.high_hidden {
            self.maximum
        } else {
            self.high
        }
    }

    /// Minimum separation between low and high. May be negative.
    #[must_use]
    pub const fn minimum_distance(&self) -> f64 {
        self.minimum_distance
    }

    /// Configured step size; 0 means continuous.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Whether values snap to the step grid while dragging.
    #[must_use]
    pub const fn step_continuously(&self) -> bool {
        self.step_continuously
    }

    /// Step currently applied by the setters.
    #[must_use]
    pub const fn active_step(&self) -> f64 {
        self.active_step
    }

    /// Secondary upper bound for the low handle.
    #[must_use]
    pub const fn low_maximum(&self) -> Option<f64> {
        self.low_maximum
    }

    /// Secondary lower bound for the high handle.
    #[must_use]
    pub const fn high_minimum(&self) -> Option<f64> {
        self.high_minimum
    }

    /// Whether the low handle is hidden.
    #[must_use]
    pub const fn is_low_hidden(&self) -> bool {
        self.low_hidden
    }

    /// Whether the high handle is hidden.
    #[must_use]
    pub const fn is_high_hidden(&self) -> bool {
        self.high_hidden
    }

    /// Low has passed high, which only a negative minimum distance allows.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        self.low() > self.high()
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // =========================================================================
    // Domain configuration
    // =========================================================================

    /// Set the lower domain bound. Resets the low value to it.
    pub fn set_minimum(&mut self, minimum: f64) {
        self.minimum = minimum;
        self.low = minimum;
        self.dirty = true;
    }

    /// Set the upper domain bound. Resets the high value to it.
    pub fn set_maximum(&mut self, maximum: f64) {
        self.maximum = maximum;
        self.high = maximum;
        self.dirty = true;
    }

    /// Set the minimum separation. Existing values are not re-clamped.
    pub fn set_minimum_distance(&mut self, distance: f64) {
        self.minimum_distance = distance;
        self.dirty = true;
    }

    /// Set the step size (0 = continuous).
    pub fn set_step(&mut self, step: f64) {
        self.step = step;
        self.dirty = true;
    }

    /// Choose whether drags snap to the grid live or only on release.
    pub fn set_step_continuously(&mut self, enabled: bool) {
        self.step_continuously = enabled;
    }

    /// Set the secondary upper bound for the low handle.
    pub fn set_low_maximum(&mut self, bound: Option<f64>) {
        self.low_maximum = bound.filter(|b| !b.is_nan());
        self.dirty = true;
    }

    /// Set the secondary lower bound for the high handle.
    pub fn set_high_minimum(&mut self, bound: Option<f64>) {
        self.high_minimum = bound.filter(|b| !b.is_nan());
        self.dirty = true;
    }

    /// Hide or show the low handle. Showing it re-clamps the stored value.
    pub fn set_low_hidden(&mut self, hidden: bool) {
        let was_hidden = self.low_hidden;
        self.low_hidden = hidden;
        if was_hidden && !hidden {
            self.set_low(self.low);
        }
        self.dirty = true;
    }

    /// Hide or show the high handle. Showing it re-clamps the stored value.
    pub fn set_high_hidden(&mut self, hidden: bool) {
        let was_hidden = self.high_hidden;
        self.high_hidden = hidden;
        if was_hidden && !hidden {
            self.set_high(self.high);
        }
        self.dirty = true;
    }

    // =========================================================================
    // Session stepping
    // =========================================================================

    /// Resolve the step for a new drag: the grid step if snapping live, else 0.
    pub fn begin_session_step(&mut self) -> f64 {
        self.active_step = if self.step_continuously {
            self.step
        } else {
            0.0
        };
        self.active_step
    }

    /// Switch to the grid step at drag end. Returns whether a grid is configured.
    pub fn settle_step(&mut self) -> bool {
        if self.step > 0.0 {
            self.active_step = self.step;
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Value setters
    // =========================================================================

    fn snap(&self, value: f64) -> f64 {
        if self.active_step > 0.0 {
            (value / self.active_step).round() * self.active_step
        } else {
            value
        }
    }

    /// Set the low value: snap, clamp to the domain and the secondary bound,
    /// then keep it at least `minimum_distance` below high.
    pub fn set_low(&mut self, value: f64) {
        let mut value = self.snap(value);
        value = value.min(self.maximum);
        value = value.max(self.minimum);
        if let Some(bound) = self.low_maximum {
            value = value.min(bound);
        }
        value = value.min(self.high() - self.minimum_distance);
        self.low = value;
        self.dirty = true;
    }

    /// Set the high value: snap, clamp to the domain and the secondary bound,
    /// then keep it at least `minimum_distance` above low.
    pub fn set_high(&mut self, value: f64) {
        let mut value = self.snap(value);
        value = value.max(self.minimum);
        value = value.min(self.maximum);
        if let Some(bound) = self.high_minimum {
            value = value.max(bound);
        }
        value = value.max(self.low() + self.minimum_distance);
        self.high = value;
        self.dirty = true;
    }

    /// Apply either side independently; `None` leaves that side unchanged.
    /// Low is applied before high.
    pub fn set_values(&mut self, low: Option<f64>, high: Option<f64>) {
        if let Some(low) = low {
            self.set_low(low);
        }
        if let Some(high) = high {
            self.set_high(high);
        }
    }

    /// Low candidate for a drag, limited to the domain floor and the high handle.
    #[must_use]
    pub fn low_candidate(&self, raw: f64) -> f64 {
        raw.max(self.minimum).min(self.high() - self.minimum_distance)
    }

    /// High candidate for a drag, limited to the domain ceiling and the low handle.
    #[must_use]
    pub fn high_candidate(&self, raw: f64) -> f64 {
        raw.min(self.maximum).max(self.low() + self.minimum_distance)
    }
}
