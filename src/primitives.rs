use crate::foundation::core::{Point, Rgba};

/// Default rectangle border thickness in pixels.
pub const DEFAULT_BORDER_WIDTH: u32 = 4;

/// Default label and clock font face.
pub const DEFAULT_FONT: &str = "Serif";

/// Default label and clock font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Upper bound accepted for the clock font size.
pub const MAX_FONT_SIZE: u32 = 60;

/// Bounding-box rectangle with border and optional fill.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectParams {
    /// Left edge in pixels.
    pub left: f32,
    /// Top edge in pixels.
    pub top: f32,
    /// Box width in pixels.
    pub width: f32,
    /// Box height in pixels.
    pub height: f32,
    /// Border thickness in pixels.
    pub border_width: u32,
    /// Border color.
    pub border_color: Rgba,
    /// Fill color, present when the rectangle has a background.
    pub bg_color: Option<Rgba>,
    /// Index into the hardware-blend color table, resolved per frame in
    /// hardware mode.
    pub color_id: Option<usize>,
}

impl RectParams {
    /// Rectangle with the default border and no fill.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: Rgba::new(1.0, 0.0, 0.0, 1.0),
            bg_color: None,
            color_id: None,
        }
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(f64::from(self.left), f64::from(self.top))
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(
            f64::from(self.left) + f64::from(self.width),
            f64::from(self.top) + f64::from(self.height),
        )
    }
}

impl Default for RectParams {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Instance-mask payload drawn over its paired rectangle.
///
/// `data` holds one confidence value per mask cell, row-major; cells at or
/// above `threshold` are composited.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MaskParams {
    /// Row-major mask values.
    pub data: Vec<f32>,
    /// Cutoff below which cells are transparent.
    pub threshold: f32,
    /// Mask grid width.
    pub width: u32,
    /// Mask grid height.
    pub height: u32,
}

impl MaskParams {
    /// Whether the mask carries no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Rectangle + mask pair dispatched through the mask entry point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MaskedRect {
    /// Rectangle the mask is stretched over.
    pub rect: RectParams,
    /// Mask payload.
    pub mask: MaskParams,
}

/// Font face, size and color for rendered text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontParams {
    /// Font face name.
    pub name: String,
    /// Size in points.
    pub size: u32,
    /// Text color.
    pub color: Rgba,
}

impl Default for FontParams {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT.to_string(),
            size: DEFAULT_FONT_SIZE,
            color: Rgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// Text label anchored at a pixel offset.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextParams {
    /// Label text.
    pub text: String,
    /// Anchor x offset in pixels.
    pub x_offset: u32,
    /// Anchor y offset in pixels.
    pub y_offset: u32,
    /// Label font.
    pub font: FontParams,
    /// Background fill behind the text, if any.
    pub bg_color: Option<Rgba>,
}

/// Clock-overlay parameters primed into the drawing context.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClockParams {
    /// Clock font.
    pub font: FontParams,
    /// Clock x offset in pixels.
    pub x_offset: u32,
    /// Clock y offset in pixels.
    pub y_offset: u32,
}

/// Straight line segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineParams {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// Stroke width in pixels.
    pub width: u32,
    /// Stroke color.
    pub color: Rgba,
}

/// Which ends of an arrow carry a head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowHead {
    /// Head at the start point.
    Start,
    /// Head at the end point.
    End,
    /// Heads at both ends.
    Both,
}

/// Arrow segment with one or two heads.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowParams {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// Stroke width in pixels.
    pub width: u32,
    /// Stroke color.
    pub color: Rgba,
    /// Head placement.
    pub head: ArrowHead,
}

/// Circle outline with optional fill.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleParams {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f32,
    /// Outline color.
    pub color: Rgba,
    /// Fill color, if any.
    pub bg_color: Option<Rgba>,
}
