//! Time-based transitions with easing.
//!
//! The host's animation clock drives everything here: nothing advances
//! unless `update(dt)` is called.

use crate::geometry::{Point, Rect};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// =============================================================================
// EasedValue - progress of a fixed-duration timeline
// =============================================================================

/// An easing-based animated scalar.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        (self.to - self.from).mul_add(self.eased_progress(), self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Progress after easing is applied.
    #[must_use]
    pub fn eased_progress(&self) -> f64 {
        self.easing.apply(self.progress())
    }
}

// =============================================================================
// Interpolate + Transition
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Linear interpolation between two values.
    #[must_use]
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        (other - self).mul_add(t, *self)
    }
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        (other - self).mul_add(t as Self, *self)
    }
}

impl Interpolate for Point {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self.lerp(other, t as f32)
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.x.interpolate(&other.x, t),
            self.y.interpolate(&other.y, t),
            self.width.interpolate(&other.width, t),
            self.height.interpolate(&other.height, t),
        )
    }
}

impl<A: Interpolate, B: Interpolate> Interpolate for (A, B) {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        (self.0.interpolate(&other.0, t), self.1.interpolate(&other.1, t))
    }
}

/// A transition between two values of any interpolatable type.
#[derive(Debug, Clone)]
pub struct Transition<T: Clone + Interpolate> {
    from: T,
    to: T,
    timeline: EasedValue,
}

impl<T: Clone + Interpolate> Transition<T> {
    /// Create a transition from `from` to `to` over `duration` seconds.
    #[must_use]
    pub fn new(from: T, to: T, duration: f64) -> Self {
        Self {
            from,
            to,
            timeline: EasedValue::new(0.0, 1.0, duration),
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.timeline = self.timeline.with_easing(easing);
        self
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> T {
        self.from.interpolate(&self.to, self.timeline.eased_progress())
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Whether the transition has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.timeline.update(dt);
    }

    /// Start over towards a new target from wherever this transition is now.
    pub fn retarget(&mut self, to: T, duration: f64) {
        let easing = self.timeline.easing;
        self.from = self.value();
        self.to = to;
        self.timeline = EasedValue::new(0.0, 1.0, duration).with_easing(easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_midpoint_ease_in_out() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_eased_value_zero_duration_is_complete() {
        let v = EasedValue::new(0.0, 10.0, 0.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn test_eased_value_linear_progress() {
        let mut v = EasedValue::new(0.0, 10.0, 1.0).with_easing(Easing::Linear);
        v.update(0.25);
        assert!((v.value() - 2.5).abs() < 1e-9);
        v.update(5.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn test_transition_rect() {
        let mut t = Transition::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(100.0, 0.0, 10.0, 10.0),
            1.0,
        )
        .with_easing(Easing::Linear);
        t.update(0.5);
        assert_eq!(t.value().x, 50.0);
        assert!(!t.is_complete());
        t.update(0.5);
        assert!(t.is_complete());
        assert_eq!(t.value(), *t.target());
    }

    #[test]
    fn test_transition_retarget_begins_from_current() {
        let mut t = Transition::new(0.0f64, 100.0, 1.0).with_easing(Easing::Linear);
        t.update(0.5);
        t.retarget(0.0, 1.0);
        assert!((t.value() - 50.0).abs() < 1e-9);
        t.update(1.0);
        assert!(t.value().abs() < 1e-9);
    }

    #[test]
    fn test_tuple_interpolation() {
        let a = (0.0f64, Point::new(0.0, 0.0));
        let b = (2.0f64, Point::new(4.0, 8.0));
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.0, 1.0);
        assert_eq!(mid.1, Point::new(2.0, 4.0));
    }

    proptest! {
        #[test]
        fn prop_easing_stays_in_unit_range(t in 0.0f64..1.0) {
            for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut, Easing::CubicOut] {
                let v = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
