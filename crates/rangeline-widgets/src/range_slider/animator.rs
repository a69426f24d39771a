//! Animated handle movement.
//!
//! The slider commits values immediately; only the frames it paints are
//! animated. An [`Animator`] is the clock-driven capability that moves the
//! painted frames towards the committed ones.

use rangeline_core::{Easing, Interpolate, Rect, Transition};

/// Duration of an animated value change, in seconds.
pub const ANIMATION_DURATION: f64 = 0.25;

/// Frames of both handles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleFrames {
    /// Low handle frame
    pub low: Rect,
    /// High handle frame
    pub high: Rect,
}

impl HandleFrames {
    /// Bundle two frames.
    #[must_use]
    pub const fn new(low: Rect, high: Rect) -> Self {
        Self { low, high }
    }
}

impl Interpolate for HandleFrames {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            low: self.low.interpolate(&other.low, t),
            high: self.high.interpolate(&other.high, t),
        }
    }
}

/// Result of advancing an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    /// Frames to paint now
    pub frames: HandleFrames,
    /// The animation reached its target with this step
    pub finished: bool,
}

/// Injected "animate over duration" capability.
///
/// A new `animate` call while one is in flight supersedes it, starting from
/// whatever is currently presented.
pub trait Animator: Send + Sync {
    /// Start moving from `from` to `to` over `duration` seconds.
    fn animate(&mut self, from: HandleFrames, to: HandleFrames, duration: f64);

    /// Advance the clock. Returns `None` when nothing is animating.
    fn advance(&mut self, dt: f64) -> Option<AnimationStep>;

    /// Whether an animation is in flight.
    fn is_animating(&self) -> bool;

    /// Drop the in-flight animation, if any.
    fn cancel(&mut self);
}

/// Default animator built on an eased [`Transition`].
#[derive(Debug, Clone)]
pub struct EasedAnimator {
    easing: Easing,
    transition: Option<Transition<HandleFrames>>,
}

impl Default for EasedAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl EasedAnimator {
    /// Animator with ease-in-out timing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            easing: Easing::EaseInOut,
            transition: None,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Animator for EasedAnimator {
    fn animate(&mut self, from: HandleFrames, to: HandleFrames, duration: f64) {
        match &mut self.transition {
            Some(transition) if !transition.is_complete() => {
                tracing::debug!(duration, "superseding in-flight handle animation");
                transition.retarget(to, duration);
            }
            _ => {
                self.transition = Some(Transition::new(from, to, duration).with_easing(self.easing));
            }
        }
    }

    fn advance(&mut self, dt: f64) -> Option<AnimationStep> {
        let transition = self.transition.as_mut()?;
        transition.update(dt);
        let finished = transition.is_complete();
        let frames = if finished {
            *transition.target()
        } else {
            transition.value()
        };
        if finished {
            self.transition = None;
        }
        Some(AnimationStep { frames, finished })
    }

    fn is_animating(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| !transition.is_complete())
    }

    fn cancel(&mut self) {
        self.transition = None;
    }
}
