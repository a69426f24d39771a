//! Handle and track rectangles computed from the value model.

use rangeline_core::{Rect, Size};

use super::animator::HandleFrames;
use super::appearance::SliderStyle;
use super::mapping::GeometryMapper;
use super::value::ValueModel;

/// Output of one layout pass, in the slider's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderLayout {
    /// Handle frames
    pub frames: HandleFrames,
    /// Full-width background bar
    pub background: Rect,
    /// Segment between the handles
    pub track: Rect,
    /// Low has passed high
    pub crossed: bool,
}

/// Computes a [`SliderLayout`] for a given style and bounds size.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    style: &'a SliderStyle,
    size: Size,
}

impl<'a> LayoutEngine<'a> {
    /// Engine for bounds of `size`.
    #[must_use]
    pub const fn new(style: &'a SliderStyle, size: Size) -> Self {
        Self { style, size }
    }

    /// Value/pixel mapper for the model's domain.
    #[must_use]
    pub const fn mapper(&self, model: &ValueModel) -> GeometryMapper {
        GeometryMapper::new(self.size, model.minimum(), model.maximum())
    }

    /// Frames for both handles at the model's effective values.
    #[must_use]
    pub fn handle_frames(&self, model: &ValueModel) -> HandleFrames {
        let mapper = self.mapper(model);
        HandleFrames::new(
            mapper.handle_rect(model.low(), self.style.low_frame_size()),
            mapper.handle_rect(model.high(), self.style.high_frame_size()),
        )
    }

    /// Full-width background bar, vertically centered.
    #[must_use]
    pub fn background_rect(&self) -> Rect {
        let height = self.style.track_background.height();
        Rect::new(
            0.0,
            (self.size.height - height) / 2.0,
            self.size.width,
            height,
        )
    }

    /// Segment between the handle centers, sharing the background's band.
    ///
    /// A hidden handle lets the segment run to that edge of the bounds.
    #[must_use]
    pub fn track_rect(&self, frames: &HandleFrames, low_hidden: bool, high_hidden: bool) -> Rect {
        let band = self.background_rect();
        let low_width = self.style.low_handle.intrinsic_size().width;
        let high_width = self.style.high_handle.intrinsic_size().width;
        let outer_right = frames.low.max_x().max(frames.high.max_x());

        let mut x = frames.low.min_x().min(frames.high.min_x()) + low_width / 2.0;
        let mut right = outer_right - high_width / 2.0;
        if low_hidden {
            x = 0.0;
        }
        if high_hidden {
            right = outer_right;
        }
        Rect::new(x, band.y, right - x, band.height)
    }

    /// Run a full pass.
    #[must_use]
    pub fn layout(&self, model: &ValueModel) -> SliderLayout {
        let frames = self.handle_frames(model);
        let layout = SliderLayout {
            frames,
            background: self.background_rect(),
            track: self.track_rect(&frames, model.is_low_hidden(), model.is_high_hidden()),
            crossed: model.is_crossed(),
        };
        tracing::trace!(
            low = model.low(),
            high = model.high(),
            low_frame = ?layout.frames.low,
            high_frame = ?layout.frames.high,
            "range slider layout"
        );
        layout
    }
}
