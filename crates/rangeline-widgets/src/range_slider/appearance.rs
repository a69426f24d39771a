//! Handle and track appearance.

use rangeline_core::{
    BoxStyle, Canvas, Color, CornerRadius, EdgeInsets, ImageId, Rect, Shadow, Size, StrokeStyle,
};

/// Diameter of the default system-styled handle.
pub const SYSTEM_HANDLE_DIAMETER: f32 = 28.0;

/// Height of a color-only track graphic.
pub const COLOR_TRACK_HEIGHT: f32 = 2.0;

/// How a handle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HandleAppearance {
    /// White ball with a drop shadow.
    #[default]
    System,
    /// Custom graphic, optionally swapped while the handle is selected.
    Image {
        /// Graphic shown normally
        normal: ImageId,
        /// Graphic shown while selected
        highlighted: Option<ImageId>,
    },
}

impl HandleAppearance {
    /// Image handle without a highlighted variant.
    #[must_use]
    pub const fn image(normal: ImageId) -> Self {
        Self::Image {
            normal,
            highlighted: None,
        }
    }

    /// Size of the graphic before any padding is removed.
    #[must_use]
    pub const fn intrinsic_size(&self) -> Size {
        match self {
            Self::System => Size::square(SYSTEM_HANDLE_DIAMETER),
            Self::Image { normal, .. } => normal.size,
        }
    }

    /// Size of the handle frame. Image handles lose `padding` on both sides.
    #[must_use]
    pub fn frame_size(&self, horizontal_padding: f32) -> Size {
        match self {
            Self::System => self.intrinsic_size(),
            Self::Image { normal, .. } => Size::new(
                2.0f32.mul_add(-horizontal_padding, normal.size.width),
                normal.size.height,
            ),
        }
    }

    /// Horizontal padding that actually applies to this appearance.
    #[must_use]
    pub const fn effective_padding(&self, horizontal_padding: f32) -> f32 {
        match self {
            Self::System => 0.0,
            Self::Image { .. } => horizontal_padding,
        }
    }

    /// Paint the handle centered in `frame`.
    pub fn paint(&self, canvas: &mut dyn Canvas, frame: Rect, selected: bool) {
        match self {
            Self::System => {
                let style = BoxStyle::fill(Color::WHITE).with_shadow(Shadow {
                    color: Color::rgba(0.0, 0.0, 0.0, 0.5),
                    offset_x: 0.0,
                    offset_y: 2.0,
                    blur: 3.0,
                });
                canvas.draw_circle(frame.center(), SYSTEM_HANDLE_DIAMETER / 2.0, &style);
            }
            Self::Image {
                normal,
                highlighted,
            } => {
                let image = if selected {
                    highlighted.unwrap_or(*normal)
                } else {
                    *normal
                };
                // Drawn at natural size, centered on the (possibly padded) frame
                let center = frame.center();
                let size = image.size;
                let rect = Rect::new(
                    center.x - size.width / 2.0,
                    center.y - size.height / 2.0,
                    size.width,
                    size.height,
                );
                canvas.draw_image(image, rect);
            }
        }
    }
}

/// How a track graphic is sourced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackAppearance {
    /// Solid color, rendered through a [`TrackSurface`].
    Color(Color),
    /// Custom graphic.
    Image(ImageId),
}

impl TrackAppearance {
    /// Height of the graphic.
    #[must_use]
    pub const fn height(&self) -> f32 {
        match self {
            Self::Color(_) => COLOR_TRACK_HEIGHT,
            Self::Image(image) => image.size.height,
        }
    }
}

/// Drawing surface for a color-backed track, offered to listeners before
/// it is rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSurface {
    /// Size of the surface when it was built
    pub size: Size,
    /// Fill color
    pub fill: Color,
    /// Corner rounding
    pub corner_radius: CornerRadius,
    /// Optional outline
    pub stroke: Option<StrokeStyle>,
}

impl TrackSurface {
    /// Plain surface with the given fill.
    #[must_use]
    pub const fn new(size: Size, fill: Color) -> Self {
        Self {
            size,
            fill,
            corner_radius: CornerRadius::ZERO,
            stroke: None,
        }
    }
}

/// A track graphic resolved during layout, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackPaint {
    /// Color surface, possibly customized by listeners.
    Surface(TrackSurface),
    /// Custom graphic.
    Image(ImageId),
}

impl TrackPaint {
    /// Paint stretched into `rect`.
    pub fn paint(&self, canvas: &mut dyn Canvas, rect: Rect) {
        match self {
            Self::Surface(surface) => {
                let style = BoxStyle {
                    fill: Some(surface.fill),
                    stroke: surface.stroke.clone(),
                    shadow: None,
                };
                canvas.draw_box(rect, surface.corner_radius, &style);
            }
            Self::Image(image) => canvas.draw_image(*image, rect),
        }
    }
}

/// Default enlargement of each handle's hit area.
pub const DEFAULT_TOUCH_INSETS: EdgeInsets = EdgeInsets::uniform(-5.0);

/// Complete visual configuration of a range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderStyle {
    /// Low handle graphic
    pub low_handle: HandleAppearance,
    /// High handle graphic
    pub high_handle: HandleAppearance,
    /// Transparent margin on each side of the low handle image
    pub low_horizontal_padding: f32,
    /// Transparent margin on each side of the high handle image
    pub high_horizontal_padding: f32,
    /// Segment between the handles
    pub track: TrackAppearance,
    /// Segment between the handles while crossed
    pub track_crossed: TrackAppearance,
    /// Full-width background bar
    pub track_background: TrackAppearance,
    /// Hit area adjustment for the low handle
    pub low_touch_insets: EdgeInsets,
    /// Hit area adjustment for the high handle
    pub high_touch_insets: EdgeInsets,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            low_handle: HandleAppearance::System,
            high_handle: HandleAppearance::System,
            low_horizontal_padding: 0.0,
            high_horizontal_padding: 0.0,
            track: TrackAppearance::Color(Color::ACCENT_BLUE),
            track_crossed: TrackAppearance::Color(Color::RED),
            track_background: TrackAppearance::Color(Color::LIGHT_GRAY),
            low_touch_insets: DEFAULT_TOUCH_INSETS,
            high_touch_insets: DEFAULT_TOUCH_INSETS,
        }
    }
}

impl SliderStyle {
    /// Frame size of the low handle.
    #[must_use]
    pub fn low_frame_size(&self) -> Size {
        self.low_handle.frame_size(self.low_horizontal_padding)
    }

    /// Frame size of the high handle.
    #[must_use]
    pub fn high_frame_size(&self) -> Size {
        self.high_handle.frame_size(self.high_horizontal_padding)
    }

    /// Low touch insets widened by the low image padding.
    #[must_use]
    pub fn low_hit_insets(&self) -> EdgeInsets {
        self.low_touch_insets.widened(self.low_horizontal_padding)
    }

    /// High touch insets widened by the high image padding.
    #[must_use]
    pub fn high_hit_insets(&self) -> EdgeInsets {
        self.high_touch_insets.widened(self.high_horizontal_padding)
    }

    /// Track graphic for the current crossing state.
    #[must_use]
    pub const fn track_for(&self, crossed: bool) -> TrackAppearance {
        if crossed {
            self.track_crossed
        } else {
            self.track
        }
    }
}
