//! Subscriber hooks for range slider interaction.

use std::fmt;

use rangeline_core::Point;

use super::appearance::TrackSurface;

/// Read-only view of the slider handed to listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSnapshot {
    /// Current low value
    pub low: f64,
    /// Current high value
    pub high: f64,
    /// Lower domain bound
    pub minimum: f64,
    /// Upper domain bound
    pub maximum: f64,
    /// Center of the low handle frame
    pub low_center: Point,
    /// Center of the high handle frame
    pub high_center: Point,
    /// Low handle is being dragged
    pub low_selected: bool,
    /// High handle is being dragged
    pub high_selected: bool,
}

impl RangeSnapshot {
    /// Low has passed high.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        self.low > self.high
    }
}

/// Which track graphic is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackLayer {
    /// Full-width background bar.
    Background,
    /// Segment between the handles.
    Active,
}

/// Receives range slider notifications. Every hook defaults to a no-op.
pub trait RangeSliderListener: Send + Sync {
    /// A pointer went down inside the slider.
    fn drag_began(&self, _slider: &RangeSnapshot) {}

    /// A color-backed track graphic is about to be built. The listener may
    /// restyle the surface.
    fn will_render_track(
        &self,
        _slider: &RangeSnapshot,
        _layer: TrackLayer,
        _surface: &mut TrackSurface,
    ) {
    }

    /// The selection changed, according to the slider's notification policy.
    fn value_changed(&self, _slider: &RangeSnapshot) {}

    /// A handle frame moved.
    fn centers_changed(&self, _slider: &RangeSnapshot) {}
}

/// Ordered list of subscribers, notified in registration order.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Box<dyn RangeSliderListener>>,
}

impl Listeners {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn add(&mut self, listener: Box<dyn RangeSliderListener>) {
        self.entries.push(listener);
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No listeners registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn notify_drag_began(&self, snapshot: &RangeSnapshot) {
        for listener in &self.entries {
            listener.drag_began(snapshot);
        }
    }

    pub(crate) fn notify_will_render_track(
        &self,
        snapshot: &RangeSnapshot,
        layer: TrackLayer,
        surface: &mut TrackSurface,
    ) {
        for listener in &self.entries {
            listener.will_render_track(snapshot, layer, surface);
        }
    }

    pub(crate) fn notify_value_changed(&self, snapshot: &RangeSnapshot) {
        for listener in &self.entries {
            listener.value_changed(snapshot);
        }
    }

    pub(crate) fn notify_centers_changed(&self, snapshot: &RangeSnapshot) {
        for listener in &self.entries {
            listener.centers_changed(snapshot);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
