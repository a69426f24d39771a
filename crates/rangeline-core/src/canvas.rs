//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, ImageId, Transform2D};
use crate::widget::Canvas;
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Commands issued between `push_transform` and `pop_transform` are
/// collected into a single [`DrawCommand::Group`].
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    open_groups: Vec<(Transform2D, Vec<DrawCommand>)>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded top-level draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded commands with groups flattened, in paint order.
    #[must_use]
    pub fn flattened(&self) -> Vec<&DrawCommand> {
        fn walk<'a>(cmds: &'a [DrawCommand], out: &mut Vec<&'a DrawCommand>) {
            for cmd in cmds {
                match cmd {
                    DrawCommand::Group { children, .. } => walk(children, out),
                    other => out.push(other),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.commands, &mut out);
        out
    }

    /// Get the number of recorded top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip rectangle, if any.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.open_groups.clear();
        self.clip_stack.clear();
    }

    fn push(&mut self, cmd: DrawCommand) {
        match self.open_groups.last_mut() {
            Some((_, children)) => children.push(cmd),
            None => self.commands.push(cmd),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::filled_rect(rect, color));
    }

    fn draw_box(&mut self, rect: Rect, radius: CornerRadius, style: &BoxStyle) {
        self.push(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: style.clone(),
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, style: &BoxStyle) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect) {
        self.push(DrawCommand::Image {
            image,
            bounds: rect,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.open_groups.push((transform, Vec::new()));
    }

    fn pop_transform(&mut self) {
        if let Some((transform, children)) = self.open_groups.pop() {
            self.push(DrawCommand::Group {
                children,
                transform,
            });
        }
    }
}
