//! Pointer tracking: which handle a gesture drives and what it commits.
//!
//! The controller never touches the widget directly. Each pointer phase
//! yields a list of [`TrackingAction`]s that the widget applies in order.

use rangeline_core::{EdgeInsets, Point, Rect};

use super::animator::HandleFrames;
use super::mapping::GeometryMapper;
use super::value::ValueModel;

/// One of the two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// Lower handle
    Low,
    /// Upper handle
    High,
}

/// State of the drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingSession {
    /// Handle the pointer went down on, if any
    pub active: Option<Handle>,
    /// Pointer x minus the active handle's center x at pointer-down
    pub pointer_offset: f32,
    /// Step frozen for the drag
    pub effective_step: f64,
}

/// Handle frames and hit insets for pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitGeometry {
    /// Current handle frames
    pub frames: HandleFrames,
    /// Low hit insets, already widened by image padding
    pub low_insets: EdgeInsets,
    /// High hit insets, already widened by image padding
    pub high_insets: EdgeInsets,
    /// Low handle is hidden and cannot be hit
    pub low_hidden: bool,
    /// High handle is hidden and cannot be hit
    pub high_hidden: bool,
}

impl HitGeometry {
    /// Hit rectangle of the low handle, if it can be hit.
    #[must_use]
    pub fn low_hit_rect(&self) -> Option<Rect> {
        (!self.low_hidden).then(|| self.frames.low.inset_by(self.low_insets))
    }

    /// Hit rectangle of the high handle, if it can be hit.
    #[must_use]
    pub fn high_hit_rect(&self) -> Option<Rect> {
        (!self.high_hidden).then(|| self.frames.high.inset_by(self.high_insets))
    }
}

/// Mapping inputs for pointer-move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGeometry {
    /// Value/pixel mapper for the current bounds
    pub mapper: GeometryMapper,
    /// Low handle frame width
    pub low_width: f32,
    /// High handle frame width
    pub high_width: f32,
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackingAction {
    /// Raise the drag-began notification.
    DragBegan,
    /// Commit values through the model setters; `None` leaves a side alone.
    SetValues {
        /// New low value
        low: Option<f64>,
        /// New high value
        high: Option<f64>,
        /// Animate the move
        animated: bool,
    },
    /// Raise the value-changed notification.
    ValueChanged,
}

/// Gesture state machine for a two-handle slider.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingController {
    low_selected: bool,
    high_selected: bool,
    front: Handle,
    low_offset: f32,
    high_offset: f32,
    session: Option<TrackingSession>,
}

impl Default for TrackingController {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingController {
    /// Idle controller with the high handle stacked in front.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            low_selected: false,
            high_selected: false,
            front: Handle::High,
            low_offset: 0.0,
            high_offset: 0.0,
            session: None,
        }
    }

    /// Low handle is highlighted.
    #[must_use]
    pub const fn is_low_selected(&self) -> bool {
        self.low_selected
    }

    /// High handle is highlighted.
    #[must_use]
    pub const fn is_high_selected(&self) -> bool {
        self.high_selected
    }

    /// Handle drawn on top.
    #[must_use]
    pub const fn front(&self) -> Handle {
        self.front
    }

    /// Drag in progress, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    /// A pointer stream is being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    fn select(&mut self, handle: Handle, point: Point, frame: Rect) {
        let offset = point.x - frame.center().x;
        match handle {
            Handle::Low => {
                self.low_selected = true;
                self.low_offset = offset;
            }
            Handle::High => {
                self.high_selected = true;
                self.high_offset = offset;
            }
        }
        self.front = handle;
    }

    /// Start a drag at `point`.
    ///
    /// The low handle is tested first. Where both hit areas contain the
    /// point, the handle in front wins; selecting a handle brings it to the
    /// front, so at most one handle ends up selected.
    pub fn pointer_down(
        &mut self,
        point: Point,
        geometry: &HitGeometry,
        model: &mut ValueModel,
        change_continuously: bool,
    ) -> Vec<TrackingAction> {
        let low_rect = geometry.low_hit_rect();
        let high_rect = geometry.high_hit_rect();
        let in_low = low_rect.is_some_and(|r| r.contains_point(&point));
        let in_high = high_rect.is_some_and(|r| r.contains_point(&point));

        self.low_selected = false;
        self.high_selected = false;
        if in_low && (!in_high || self.front == Handle::Low) {
            self.select(Handle::Low, point, geometry.frames.low);
        }
        if in_high && (!in_low || self.front == Handle::High) {
            self.select(Handle::High, point, geometry.frames.high);
        }

        let active = self.active_handle();
        let pointer_offset = match active {
            Some(Handle::Low) => self.low_offset,
            Some(Handle::High) => self.high_offset,
            None => 0.0,
        };
        let effective_step = model.begin_session_step();
        self.session = Some(TrackingSession {
            active,
            pointer_offset,
            effective_step,
        });
        tracing::debug!(
            handle = ?active,
            offset = pointer_offset,
            step = effective_step,
            "range slider drag began"
        );

        let mut actions = vec![TrackingAction::DragBegan];
        if change_continuously {
            actions.push(TrackingAction::ValueChanged);
        }
        actions
    }

    fn active_handle(&self) -> Option<Handle> {
        match (self.low_selected, self.high_selected) {
            (true, _) => Some(Handle::Low),
            (false, true) => Some(Handle::High),
            (false, false) => None,
        }
    }

    /// Follow the pointer to `point`.
    ///
    /// Each selected handle first probes the low formula. The low handle
    /// commits when the probe moves it left of its value or the high handle
    /// is not also selected; the high handle commits when the probe lies
    /// right of the high value or the low handle is not also selected. A
    /// handle that does not commit is deselected. A handle with no room to
    /// travel keeps its value.
    pub fn pointer_move(
        &mut self,
        point: Point,
        geometry: &DragGeometry,
        model: &ValueModel,
        change_continuously: bool,
    ) -> Vec<TrackingAction> {
        if self.session.is_none() || (!self.low_selected && !self.high_selected) {
            return Vec::new();
        }
        let mapper = &geometry.mapper;
        let animated = model.step_continuously();
        let mut actions = Vec::new();
        // Both branches read the stored values as they were before this move.
        let mut low_value = model.low();

        if self.low_selected && mapper.has_travel(geometry.low_width) {
            let raw = mapper.value_for_x(point.x - self.low_offset, geometry.low_width);
            let candidate = model.low_candidate(raw);
            if candidate < model.low() || !self.high_selected {
                self.high_selected = false;
                self.front = Handle::Low;
                low_value = candidate;
                actions.push(TrackingAction::SetValues {
                    low: Some(candidate),
                    high: None,
                    animated,
                });
                tracing::trace!(value = candidate, "low handle moved");
            } else {
                self.low_selected = false;
            }
        }

        if self.high_selected && mapper.has_travel(geometry.high_width) {
            let probe = model.low_candidate(mapper.value_for_x(point.x, geometry.low_width));
            if probe > model.high() || !self.low_selected {
                self.low_selected = false;
                self.front = Handle::High;
                let raw = mapper.value_for_x(point.x - self.high_offset, geometry.high_width);
                let candidate = raw
                    .min(model.maximum())
                    .max(low_value + model.minimum_distance());
                actions.push(TrackingAction::SetValues {
                    low: None,
                    high: Some(candidate),
                    animated,
                });
                tracing::trace!(value = candidate, "high handle moved");
            } else {
                self.high_selected = false;
            }
        }

        if change_continuously {
            actions.push(TrackingAction::ValueChanged);
        }
        actions
    }

    /// Finish the drag. Also used for cancelled pointers.
    ///
    /// With a configured grid, both values are re-applied at the grid step
    /// with animation so the handles settle onto it.
    pub fn pointer_up(&mut self, model: &mut ValueModel) -> Vec<TrackingAction> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        self.low_selected = false;
        self.high_selected = false;
        tracing::debug!(handle = ?session.active, "range slider drag ended");

        let mut actions = Vec::new();
        if model.settle_step() {
            actions.push(TrackingAction::SetValues {
                low: (!model.is_low_hidden()).then(|| model.low()),
                high: (!model.is_high_hidden()).then(|| model.high()),
                animated: true,
            });
        }
        actions.push(TrackingAction::ValueChanged);
        actions
    }
}
