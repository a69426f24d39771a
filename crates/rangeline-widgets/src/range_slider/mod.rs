//! Dual-thumb range slider.
//!
//! [`RangeSlider`] ties together the value model, the value/pixel mapping,
//! the tracking state machine and the layout engine. Values are committed
//! synchronously; only the painted handle frames are animated, advanced by
//! [`RangeSlider::tick`].

mod animator;
mod appearance;
mod config;
mod layout;
mod listener;
mod mapping;
mod tracking;
mod value;

pub use animator::{AnimationStep, Animator, EasedAnimator, HandleFrames, ANIMATION_DURATION};
pub use appearance::{
    HandleAppearance, SliderStyle, TrackAppearance, TrackPaint, TrackSurface,
    COLOR_TRACK_HEIGHT, DEFAULT_TOUCH_INSETS, SYSTEM_HANDLE_DIAMETER,
};
pub use config::RangeSliderConfig;
pub use layout::{LayoutEngine, SliderLayout};
pub use listener::{Listeners, RangeSliderListener, RangeSnapshot, TrackLayer};
pub use mapping::{value_for_x, x_for_value, GeometryMapper};
pub use tracking::{
    DragGeometry, Handle, HitGeometry, TrackingAction, TrackingController, TrackingSession,
};
pub use value::ValueModel;

use rangeline_core::{
    Canvas, Constraints, EdgeInsets, Event, LayoutResult, Point, PointerPhase, Rect, Size,
    Transform2D, TypeId, Widget,
};
use std::any::Any;
use std::fmt;

use crate::error::ConfigError;

/// Message emitted when the range slider reports a value change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSliderChanged {
    /// Low value
    pub low: f64,
    /// High value
    pub high: f64,
}

/// Range slider widget with two draggable handles.
pub struct RangeSlider {
    model: ValueModel,
    style: SliderStyle,
    /// Notify on every pointer event instead of only on release
    change_continuously: bool,
    tracking: TrackingController,
    listeners: Listeners,
    animator: Box<dyn Animator>,
    bounds: Rect,
    /// Bounds have been assigned at least once
    laid_out: bool,
    /// Geometry inputs other than the model changed
    needs_layout: bool,
    layout: SliderLayout,
    /// Frames currently painted; trails `layout.frames` while animating
    presented: HandleFrames,
    track_paint: TrackPaint,
    background_paint: TrackPaint,
    test_id: Option<String>,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("model", &self.model)
            .field("style", &self.style)
            .field("change_continuously", &self.change_continuously)
            .field("tracking", &self.tracking)
            .field("listeners", &self.listeners)
            .field("bounds", &self.bounds)
            .field("layout", &self.layout)
            .field("test_id", &self.test_id)
            .finish_non_exhaustive()
    }
}

impl RangeSlider {
    /// Slider over [0, 1] with the whole range selected.
    #[must_use]
    pub fn new() -> Self {
        let style = SliderStyle::default();
        Self {
            model: ValueModel::new(),
            track_paint: placeholder_paint(style.track),
            background_paint: placeholder_paint(style.track_background),
            style,
            change_continuously: true,
            tracking: TrackingController::new(),
            listeners: Listeners::new(),
            animator: Box::new(EasedAnimator::new()),
            bounds: Rect::default(),
            laid_out: false,
            needs_layout: true,
            layout: SliderLayout::default(),
            presented: HandleFrames::default(),
            test_id: None,
        }
    }

    /// Build a slider from a declarative configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &RangeSliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut slider = Self::new().style(config.style()?);
        slider.model.set_minimum(config.minimum);
        slider.model.set_maximum(config.maximum);
        slider.model.set_minimum_distance(config.minimum_distance);
        slider.model.set_step(config.step);
        slider.model.set_step_continuously(config.step_continuously);
        slider.model.set_low_maximum(config.low_maximum);
        slider.model.set_high_minimum(config.high_minimum);
        slider.model.set_values(config.low, config.high);
        slider.model.set_low_hidden(config.low_hidden);
        slider.model.set_high_hidden(config.high_hidden);
        slider.change_continuously = config.change_continuously;
        slider.test_id.clone_from(&config.test_id);
        Ok(slider)
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the lower domain bound. Resets low to it.
    #[must_use]
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.set_minimum(minimum);
        self
    }

    /// Set the upper domain bound. Resets high to it.
    #[must_use]
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.set_maximum(maximum);
        self
    }

    /// Set the low value.
    #[must_use]
    pub fn low(mut self, low: f64) -> Self {
        self.set_low(low);
        self
    }

    /// Set the high value.
    #[must_use]
    pub fn high(mut self, high: f64) -> Self {
        self.set_high(high);
        self
    }

    /// Set the minimum separation between the values.
    #[must_use]
    pub fn minimum_distance(mut self, distance: f64) -> Self {
        self.set_minimum_distance(distance);
        self
    }

    /// Set the grid step (0 = continuous).
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.set_step(step);
        self
    }

    /// Snap to the grid while dragging rather than on release.
    #[must_use]
    pub fn step_continuously(mut self, enabled: bool) -> Self {
        self.set_step_continuously(enabled);
        self
    }

    /// Notify on every pointer event (the default) rather than only on
    /// release.
    #[must_use]
    pub const fn change_continuously(mut self, enabled: bool) -> Self {
        self.change_continuously = enabled;
        self
    }

    /// Set the secondary upper bound for the low handle.
    #[must_use]
    pub fn low_maximum(mut self, bound: f64) -> Self {
        self.set_low_maximum(Some(bound));
        self
    }

    /// Set the secondary lower bound for the high handle.
    #[must_use]
    pub fn high_minimum(mut self, bound: f64) -> Self {
        self.set_high_minimum(Some(bound));
        self
    }

    /// Hide the low handle.
    #[must_use]
    pub fn low_hidden(mut self, hidden: bool) -> Self {
        self.set_low_hidden(hidden);
        self
    }

    /// Hide the high handle.
    #[must_use]
    pub fn high_hidden(mut self, hidden: bool) -> Self {
        self.set_high_hidden(hidden);
        self
    }

    /// Replace the whole visual style.
    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Set the low handle graphic.
    #[must_use]
    pub fn low_handle(mut self, appearance: HandleAppearance) -> Self {
        self.restyle(|style| style.low_handle = appearance);
        self
    }

    /// Set the high handle graphic.
    #[must_use]
    pub fn high_handle(mut self, appearance: HandleAppearance) -> Self {
        self.restyle(|style| style.high_handle = appearance);
        self
    }

    /// Set the track graphic.
    #[must_use]
    pub fn track(mut self, appearance: TrackAppearance) -> Self {
        self.restyle(|style| style.track = appearance);
        self
    }

    /// Set the track graphic used while crossed.
    #[must_use]
    pub fn track_crossed(mut self, appearance: TrackAppearance) -> Self {
        self.restyle(|style| style.track_crossed = appearance);
        self
    }

    /// Set the background bar graphic.
    #[must_use]
    pub fn track_background(mut self, appearance: TrackAppearance) -> Self {
        self.restyle(|style| style.track_background = appearance);
        self
    }

    /// Set the low handle hit-area insets.
    #[must_use]
    pub fn low_touch_insets(mut self, insets: EdgeInsets) -> Self {
        self.restyle(|style| style.low_touch_insets = insets);
        self
    }

    /// Set the high handle hit-area insets.
    #[must_use]
    pub fn high_touch_insets(mut self, insets: EdgeInsets) -> Self {
        self.restyle(|style| style.high_touch_insets = insets);
        self
    }

    /// Set the transparent margin on each side of the low handle image.
    #[must_use]
    pub fn low_horizontal_padding(mut self, padding: f32) -> Self {
        self.restyle(|style| style.low_horizontal_padding = padding);
        self
    }

    /// Set the transparent margin on each side of the high handle image.
    #[must_use]
    pub fn high_horizontal_padding(mut self, padding: f32) -> Self {
        self.restyle(|style| style.high_horizontal_padding = padding);
        self
    }

    /// Register a listener.
    #[must_use]
    pub fn listener(mut self, listener: impl RangeSliderListener + 'static) -> Self {
        self.add_listener(Box::new(listener));
        self
    }

    /// Replace the animation driver.
    #[must_use]
    pub fn animator(mut self, animator: impl Animator + 'static) -> Self {
        self.set_animator(Box::new(animator));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Lower domain bound.
    #[must_use]
    pub const fn get_minimum(&self) -> f64 {
        self.model.minimum()
    }

    /// Upper domain bound.
    #[must_use]
    pub const fn get_maximum(&self) -> f64 {
        self.model.maximum()
    }

    /// Low value. The domain minimum while the low handle is hidden.
    #[must_use]
    pub const fn get_low(&self) -> f64 {
        self.model.low()
    }

    /// High value. The domain maximum while the high handle is hidden.
    #[must_use]
    pub const fn get_high(&self) -> f64 {
        self.model.high()
    }

    /// Minimum separation between the values.
    #[must_use]
    pub const fn get_minimum_distance(&self) -> f64 {
        self.model.minimum_distance()
    }

    /// Grid step.
    #[must_use]
    pub const fn get_step(&self) -> f64 {
        self.model.step()
    }

    /// Whether drags snap to the grid live.
    #[must_use]
    pub const fn is_step_continuously(&self) -> bool {
        self.model.step_continuously()
    }

    /// Whether every move is reported.
    #[must_use]
    pub const fn is_change_continuously(&self) -> bool {
        self.change_continuously
    }

    /// Secondary upper bound for the low handle.
    #[must_use]
    pub const fn get_low_maximum(&self) -> Option<f64> {
        self.model.low_maximum()
    }

    /// Secondary lower bound for the high handle.
    #[must_use]
    pub const fn get_high_minimum(&self) -> Option<f64> {
        self.model.high_minimum()
    }

    /// Whether the low handle is hidden.
    #[must_use]
    pub const fn is_low_hidden(&self) -> bool {
        self.model.is_low_hidden()
    }

    /// Whether the high handle is hidden.
    #[must_use]
    pub const fn is_high_hidden(&self) -> bool {
        self.model.is_high_hidden()
    }

    /// Whether the low handle is being dragged.
    #[must_use]
    pub const fn is_low_handle_selected(&self) -> bool {
        self.tracking.is_low_selected()
    }

    /// Whether the high handle is being dragged.
    #[must_use]
    pub const fn is_high_handle_selected(&self) -> bool {
        self.tracking.is_high_selected()
    }

    /// Center of the low handle, in the slider's local coordinates.
    #[must_use]
    pub fn low_center(&self) -> Point {
        self.layout.frames.low.center()
    }

    /// Center of the high handle, in the slider's local coordinates.
    #[must_use]
    pub fn high_center(&self) -> Point {
        self.layout.frames.high.center()
    }

    /// Visual style.
    #[must_use]
    pub const fn get_style(&self) -> &SliderStyle {
        &self.style
    }

    /// Result of the latest layout pass.
    #[must_use]
    pub const fn get_layout(&self) -> &SliderLayout {
        &self.layout
    }

    /// Handle frames as currently painted.
    #[must_use]
    pub const fn presented_frames(&self) -> HandleFrames {
        self.presented
    }

    /// Whether handle frames are still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Registered listeners.
    #[must_use]
    pub const fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Snapshot handed to listeners.
    #[must_use]
    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            low: self.model.low(),
            high: self.model.high(),
            minimum: self.model.minimum(),
            maximum: self.model.maximum(),
            low_center: self.low_center(),
            high_center: self.high_center(),
            low_selected: self.tracking.is_low_selected(),
            high_selected: self.tracking.is_high_selected(),
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    fn update(&mut self, f: impl FnOnce(&mut ValueModel)) {
        f(&mut self.model);
        self.relayout(false);
    }

    fn restyle(&mut self, f: impl FnOnce(&mut SliderStyle)) {
        f(&mut self.style);
        self.needs_layout = true;
        self.relayout(false);
    }

    /// Set the lower domain bound. Resets low to it.
    pub fn set_minimum(&mut self, minimum: f64) {
        self.update(|m| m.set_minimum(minimum));
    }

    /// Set the upper domain bound. Resets high to it.
    pub fn set_maximum(&mut self, maximum: f64) {
        self.update(|m| m.set_maximum(maximum));
    }

    /// Set the low value without animation or notification.
    pub fn set_low(&mut self, low: f64) {
        self.update(|m| m.set_low(low));
    }

    /// Set the high value without animation or notification.
    pub fn set_high(&mut self, high: f64) {
        self.update(|m| m.set_high(high));
    }

    /// Set the minimum separation between the values.
    pub fn set_minimum_distance(&mut self, distance: f64) {
        self.update(|m| m.set_minimum_distance(distance));
    }

    /// Set the grid step (0 = continuous).
    pub fn set_step(&mut self, step: f64) {
        self.update(|m| m.set_step(step));
    }

    /// Snap to the grid while dragging rather than on release.
    pub fn set_step_continuously(&mut self, enabled: bool) {
        self.model.set_step_continuously(enabled);
    }

    /// Notify on every pointer event rather than only on release.
    pub fn set_change_continuously(&mut self, enabled: bool) {
        self.change_continuously = enabled;
    }

    /// Set or clear the secondary upper bound for the low handle.
    pub fn set_low_maximum(&mut self, bound: Option<f64>) {
        self.update(|m| m.set_low_maximum(bound));
    }

    /// Set or clear the secondary lower bound for the high handle.
    pub fn set_high_minimum(&mut self, bound: Option<f64>) {
        self.update(|m| m.set_high_minimum(bound));
    }

    /// Hide or show the low handle.
    pub fn set_low_hidden(&mut self, hidden: bool) {
        self.update(|m| m.set_low_hidden(hidden));
    }

    /// Hide or show the high handle.
    pub fn set_high_hidden(&mut self, hidden: bool) {
        self.update(|m| m.set_high_hidden(hidden));
    }

    /// Replace the whole visual style.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.restyle(|s| *s = style);
    }

    /// Register a listener.
    pub fn add_listener(&mut self, listener: Box<dyn RangeSliderListener>) {
        self.listeners.add(listener);
    }

    /// Replace the animation driver. Any in-flight animation is dropped.
    pub fn set_animator(&mut self, animator: Box<dyn Animator>) {
        self.animator = animator;
        self.presented = self.layout.frames;
    }

    /// Move either or both handles. `None` leaves a side unchanged.
    ///
    /// With `animated`, the handles glide over [`ANIMATION_DURATION`]
    /// starting from wherever they are currently painted. Does not notify
    /// value listeners.
    pub fn set_values(&mut self, low: Option<f64>, high: Option<f64>, animated: bool) {
        self.model.set_values(low, high);
        self.relayout(animated);
    }

    /// Advance animations by `dt` seconds. Returns whether a repaint is needed.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(step) = self.animator.advance(dt) else {
            return false;
        };
        self.presented = step.frames;
        if step.finished {
            self.layout_if_needed();
        }
        true
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Run a layout pass if anything changed since the last one.
    pub fn layout_if_needed(&mut self) {
        self.relayout(false);
    }

    fn relayout(&mut self, animated: bool) {
        if !self.laid_out {
            return;
        }
        let model_dirty = self.model.take_dirty();
        if !model_dirty && !self.needs_layout {
            return;
        }
        self.needs_layout = false;

        let next = LayoutEngine::new(&self.style, self.bounds.size()).layout(&self.model);
        let previous = std::mem::replace(&mut self.layout, next);

        if animated {
            self.animator
                .animate(self.presented, next.frames, ANIMATION_DURATION);
        } else {
            self.animator.cancel();
            self.presented = next.frames;
        }

        let snapshot = self.snapshot();
        self.background_paint = self.resolve_track(
            &snapshot,
            TrackLayer::Background,
            self.style.track_background,
        );
        self.track_paint = self.resolve_track(
            &snapshot,
            TrackLayer::Active,
            self.style.track_for(next.crossed),
        );

        if previous.frames != next.frames {
            self.listeners.notify_centers_changed(&snapshot);
        }
    }

    fn resolve_track(
        &self,
        snapshot: &RangeSnapshot,
        layer: TrackLayer,
        appearance: TrackAppearance,
    ) -> TrackPaint {
        match appearance {
            TrackAppearance::Image(image) => TrackPaint::Image(image),
            TrackAppearance::Color(color) => {
                let mut surface =
                    TrackSurface::new(Size::new(1.0, COLOR_TRACK_HEIGHT), color);
                self.listeners
                    .notify_will_render_track(snapshot, layer, &mut surface);
                TrackPaint::Surface(surface)
            }
        }
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    fn to_local(&self, position: Point) -> Point {
        Point::new(position.x - self.bounds.x, position.y - self.bounds.y)
    }

    fn hit_geometry(&self) -> HitGeometry {
        HitGeometry {
            frames: self.layout.frames,
            low_insets: self.style.low_hit_insets(),
            high_insets: self.style.high_hit_insets(),
            low_hidden: self.model.is_low_hidden(),
            high_hidden: self.model.is_high_hidden(),
        }
    }

    fn drag_geometry(&self) -> DragGeometry {
        DragGeometry {
            mapper: LayoutEngine::new(&self.style, self.bounds.size()).mapper(&self.model),
            low_width: self.layout.frames.low.width,
            high_width: self.layout.frames.high.width,
        }
    }

    fn apply(&mut self, actions: Vec<TrackingAction>) -> Option<Box<dyn Any + Send>> {
        let mut message: Option<Box<dyn Any + Send>> = None;
        for action in actions {
            match action {
                TrackingAction::DragBegan => {
                    self.listeners.notify_drag_began(&self.snapshot());
                }
                TrackingAction::SetValues {
                    low,
                    high,
                    animated,
                } => self.set_values(low, high, animated),
                TrackingAction::ValueChanged => {
                    let snapshot = self.snapshot();
                    self.listeners.notify_value_changed(&snapshot);
                    message = Some(Box::new(RangeSliderChanged {
                        low: snapshot.low,
                        high: snapshot.high,
                    }));
                }
            }
        }
        message
    }
}

/// Track paint shown before the first layout pass.
fn placeholder_paint(appearance: TrackAppearance) -> TrackPaint {
    match appearance {
        TrackAppearance::Image(image) => TrackPaint::Image(image),
        TrackAppearance::Color(color) => {
            TrackPaint::Surface(TrackSurface::new(Size::new(1.0, COLOR_TRACK_HEIGHT), color))
        }
    }
}

impl Widget for RangeSlider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = self
            .style
            .low_frame_size()
            .height
            .max(self.style.high_frame_size().height);
        constraints.constrain(Size::new(200.0, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        if !self.laid_out || bounds.size() != self.bounds.size() {
            self.needs_layout = true;
        }
        self.bounds = bounds;
        self.laid_out = true;
        self.layout_if_needed();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.push_transform(Transform2D::translate(self.bounds.x, self.bounds.y));

        self.background_paint.paint(canvas, self.layout.background);
        let track = LayoutEngine::new(&self.style, self.bounds.size()).track_rect(
            &self.presented,
            self.model.is_low_hidden(),
            self.model.is_high_hidden(),
        );
        self.track_paint.paint(canvas, track);

        let low = (
            &self.style.low_handle,
            self.presented.low,
            self.model.is_low_hidden(),
            self.tracking.is_low_selected(),
        );
        let high = (
            &self.style.high_handle,
            self.presented.high,
            self.model.is_high_hidden(),
            self.tracking.is_high_selected(),
        );
        // Back to front
        let order = if self.tracking.front() == Handle::High {
            [low, high]
        } else {
            [high, low]
        };
        for (appearance, frame, hidden, selected) in order {
            if !hidden {
                appearance.paint(canvas, frame, selected);
            }
        }

        canvas.pop_transform();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let phase = event.pointer_phase()?;
        self.layout_if_needed();

        let actions = match phase {
            PointerPhase::Down(position) => {
                if !self.bounds.contains_point(&position) {
                    return None;
                }
                let geometry = self.hit_geometry();
                let local = self.to_local(position);
                self.tracking.pointer_down(
                    local,
                    &geometry,
                    &mut self.model,
                    self.change_continuously,
                )
            }
            PointerPhase::Move(position) => {
                let geometry = self.drag_geometry();
                let local = self.to_local(position);
                self.tracking
                    .pointer_move(local, &geometry, &self.model, self.change_continuously)
            }
            PointerPhase::Up(_) | PointerPhase::Cancel => self.tracking.pointer_up(&mut self.model),
        };
        self.apply(actions)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeline_core::{Color, DrawCommand, ImageId, MouseButton, RecordingCanvas, TouchId};

    fn laid_out(slider: RangeSlider) -> RangeSlider {
        let mut slider = slider;
        slider.layout(Rect::new(10.0, 20.0, 228.0, 28.0));
        slider
    }

    fn down(x: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, 34.0),
            button: MouseButton::Left,
        }
    }

    fn moved(x: f32) -> Event {
        Event::MouseMove {
            position: Point::new(x, 34.0),
        }
    }

    fn up(x: f32) -> Event {
        Event::MouseUp {
            position: Point::new(x, 34.0),
            button: MouseButton::Left,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_range_slider_new() {
        let slider = RangeSlider::new();
        assert_eq!(slider.get_minimum(), 0.0);
        assert_eq!(slider.get_maximum(), 1.0);
        assert_eq!(slider.get_low(), 0.0);
        assert_eq!(slider.get_high(), 1.0);
        assert!(slider.is_change_continuously());
        assert_eq!(slider.get_step(), 0.0);
        assert!(!slider.is_step_continuously());
        assert!(!slider.is_low_handle_selected());
        assert!(slider.listeners().is_empty());
    }

    #[test]
    fn test_range_slider_builder() {
        let slider = RangeSlider::new()
            .maximum(100.0)
            .low(20.0)
            .high(80.0)
            .minimum_distance(5.0)
            .step(10.0)
            .step_continuously(true)
            .change_continuously(false)
            .low_maximum(50.0)
            .with_test_id("price");

        assert_eq!(slider.get_low(), 20.0);
        assert_eq!(slider.get_high(), 80.0);
        assert_eq!(slider.get_minimum_distance(), 5.0);
        assert_eq!(slider.get_step(), 10.0);
        assert!(slider.is_step_continuously());
        assert!(!slider.is_change_continuously());
        assert_eq!(slider.get_low_maximum(), Some(50.0));
        assert_eq!(slider.get_high_minimum(), None);
        assert_eq!(Widget::test_id(&slider), Some("price"));
    }

    #[test]
    fn test_range_slider_minimum_resets_low() {
        let slider = RangeSlider::new().maximum(10.0).low(4.0).minimum(2.0);
        assert_eq!(slider.get_low(), 2.0);
    }

    #[test]
    fn test_range_slider_from_config() {
        let config = RangeSliderConfig::from_yaml(
            "maximum: 100\nlow: 30\nhigh: 60\nchange_continuously: false\ntest_id: cfg\n",
        )
        .unwrap();
        let slider = RangeSlider::from_config(&config).unwrap();
        assert_eq!(slider.get_low(), 30.0);
        assert_eq!(slider.get_high(), 60.0);
        assert!(!slider.is_change_continuously());
        assert_eq!(Widget::test_id(&slider), Some("cfg"));
    }

    #[test]
    fn test_range_slider_from_invalid_config() {
        let config = RangeSliderConfig {
            maximum: -1.0,
            ..RangeSliderConfig::default()
        };
        assert!(RangeSlider::from_config(&config).is_err());
    }

    // =========================================================================
    // Widget trait
    // =========================================================================

    #[test]
    fn test_range_slider_type_id() {
        let slider = RangeSlider::new();
        assert_eq!(Widget::type_id(&slider), TypeId::of::<RangeSlider>());
    }

    #[test]
    fn test_range_slider_measure() {
        let slider = RangeSlider::new();
        assert_eq!(
            slider.measure(Constraints::unbounded()),
            Size::new(200.0, 28.0)
        );
        assert_eq!(
            slider.measure(Constraints::max_width(150.0)),
            Size::new(150.0, 28.0)
        );

        let tall = RangeSlider::new()
            .high_handle(HandleAppearance::image(ImageId::new(1, Size::new(30.0, 40.0))));
        assert_eq!(tall.measure(Constraints::unbounded()).height, 40.0);
    }

    #[test]
    fn test_range_slider_is_interactive() {
        let slider = RangeSlider::new();
        assert!(slider.is_interactive());
        assert!(!slider.is_focusable());
        assert!(slider.children().is_empty());
    }

    #[test]
    fn test_range_slider_layout() {
        let slider = laid_out(RangeSlider::new());
        assert_eq!(slider.bounds(), Rect::new(10.0, 20.0, 228.0, 28.0));
        assert_eq!(slider.low_center(), Point::new(14.0, 14.0));
        assert_eq!(slider.high_center(), Point::new(214.0, 14.0));
        assert_eq!(slider.get_layout().track, Rect::new(14.0, 13.0, 200.0, 2.0));
    }

    #[test]
    fn test_range_slider_setter_relayouts() {
        let mut slider = laid_out(RangeSlider::new());
        slider.set_low(0.5);
        assert_eq!(slider.low_center(), Point::new(114.0, 14.0));
        assert_eq!(slider.presented_frames().low.x, 100.0);
        assert!(!slider.is_animating());
    }

    // =========================================================================
    // Paint
    // =========================================================================

    #[test]
    fn test_range_slider_paint_order() {
        let slider = laid_out(RangeSlider::new());
        let mut canvas = RecordingCanvas::new();
        slider.paint(&mut canvas);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Group { transform, .. } => {
                assert_eq!(*transform, Transform2D::translate(10.0, 20.0));
            }
            other => panic!("expected group, got {other:?}"),
        }

        let cmds = canvas.flattened();
        assert_eq!(cmds.len(), 4);
        assert!(matches!(
            cmds[0],
            DrawCommand::Rect { bounds, style, .. }
                if *bounds == Rect::new(0.0, 13.0, 228.0, 2.0)
                    && style.fill == Some(Color::LIGHT_GRAY)
        ));
        assert!(matches!(
            cmds[1],
            DrawCommand::Rect { style, .. } if style.fill == Some(Color::ACCENT_BLUE)
        ));
        assert!(matches!(
            cmds[2],
            DrawCommand::Circle { center, .. } if *center == Point::new(14.0, 14.0)
        ));
        assert!(matches!(
            cmds[3],
            DrawCommand::Circle { center, .. } if *center == Point::new(214.0, 14.0)
        ));
    }

    #[test]
    fn test_range_slider_paint_skips_hidden_handle() {
        let slider = laid_out(RangeSlider::new().high_hidden(true));
        let mut canvas = RecordingCanvas::new();
        slider.paint(&mut canvas);
        let circles = canvas
            .flattened()
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 1);
    }

    #[test]
    fn test_range_slider_paint_crossed_track() {
        let slider = laid_out(RangeSlider::new().minimum_distance(-1.0).high(0.2).low(0.8));
        assert!(slider.get_layout().crossed);
        let mut canvas = RecordingCanvas::new();
        slider.paint(&mut canvas);
        assert!(matches!(
            canvas.flattened()[1],
            DrawCommand::Rect { style, .. } if style.fill == Some(Color::RED)
        ));
    }

    // =========================================================================
    // Events
    // =========================================================================

    #[test]
    fn test_range_slider_drag_reports_on_release() {
        let mut slider = laid_out(RangeSlider::new().change_continuously(false));

        assert!(slider.event(&down(24.0)).is_none());
        assert!(slider.is_low_handle_selected());

        assert!(slider.event(&moved(124.0)).is_none());
        assert_eq!(slider.get_low(), 0.5);

        let msg = slider
            .event(&up(124.0))
            .unwrap()
            .downcast::<RangeSliderChanged>()
            .unwrap();
        assert_eq!(*msg, RangeSliderChanged { low: 0.5, high: 1.0 });
        assert!(!slider.is_low_handle_selected());
    }

    #[test]
    fn test_range_slider_reports_every_event_by_default() {
        let mut slider = laid_out(RangeSlider::new());
        assert!(slider.event(&down(24.0)).is_some());
        let msg = slider
            .event(&moved(74.0))
            .unwrap()
            .downcast::<RangeSliderChanged>()
            .unwrap();
        assert_eq!(msg.low, 0.25);
    }

    #[test]
    fn test_range_slider_down_outside_bounds() {
        let mut slider = laid_out(RangeSlider::new());
        assert!(slider.event(&down(400.0)).is_none());
        assert!(slider.event(&up(400.0)).is_none());
    }

    #[test]
    fn test_range_slider_right_button_ignored() {
        let mut slider = laid_out(RangeSlider::new());
        let result = slider.event(&Event::MouseDown {
            position: Point::new(24.0, 34.0),
            button: MouseButton::Right,
        });
        assert!(result.is_none());
        assert!(!slider.is_low_handle_selected());
    }

    #[test]
    fn test_range_slider_touch_cancel_ends_drag() {
        let mut slider = laid_out(RangeSlider::new());
        slider.event(&Event::TouchStart {
            id: TouchId(1),
            position: Point::new(24.0, 34.0),
        });
        assert!(slider.is_low_handle_selected());
        let result = slider.event(&Event::TouchCancel {
            id: TouchId(1),
        });
        assert!(result.is_some());
        assert!(!slider.is_low_handle_selected());
    }

    // =========================================================================
    // Animation
    // =========================================================================

    #[test]
    fn test_range_slider_animated_set_values() {
        let mut slider = laid_out(RangeSlider::new());
        slider.set_values(Some(0.5), None, true);

        assert_eq!(slider.get_low(), 0.5);
        assert_eq!(slider.low_center().x, 114.0);
        assert_eq!(slider.presented_frames().low.x, 0.0);
        assert!(slider.is_animating());

        assert!(slider.tick(ANIMATION_DURATION));
        assert_eq!(slider.presented_frames(), slider.get_layout().frames);
        assert!(!slider.is_animating());
        assert!(!slider.tick(0.1));
    }

    #[test]
    fn test_range_slider_non_animated_cancels_animation() {
        let mut slider = laid_out(RangeSlider::new());
        slider.set_values(Some(0.5), None, true);
        slider.set_values(None, Some(0.75), false);
        assert!(!slider.is_animating());
        assert_eq!(slider.presented_frames(), slider.get_layout().frames);
    }
}
