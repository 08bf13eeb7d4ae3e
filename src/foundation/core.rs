use crate::foundation::error::{OverlyteError, OverlyteResult};

pub use kurbo::Point;

/// Negotiated frame geometry in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Validated geometry; zero width or height is rejected.
    pub fn new(width: u32, height: u32) -> OverlyteResult<Self> {
        if width == 0 || height == 0 {
            return Err(OverlyteError::resource("caps without width/height"));
        }
        Ok(Self { width, height })
    }
}

/// Straight (non-premultiplied) RGBA color, all channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
    /// Alpha channel.
    pub alpha: f32,
}

impl Rgba {
    /// Color from unit-range channels.
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Unpack a `0xRRGGBBAA` packed color into unit-range channels.
    pub fn from_packed_rgba(packed: u32) -> Self {
        Self {
            red: ((packed >> 24) & 0xff) as f32 / 255.0,
            green: ((packed >> 16) & 0xff) as f32 / 255.0,
            blue: ((packed >> 8) & 0xff) as f32 / 255.0,
            alpha: (packed & 0xff) as f32 / 255.0,
        }
    }
}

/// Opaque handle to a GPU-resident pixel surface.
///
/// The stage never touches pixels through the handle; it is forwarded to the
/// drawing backend with every batched draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SurfaceHandle(pub u64);

/// Pixel surface for the current frame plus its negotiated geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTarget {
    /// Surface the batch is rendered into.
    pub surface: SurfaceHandle,
    /// Negotiated frame width.
    pub width: u32,
    /// Negotiated frame height.
    pub height: u32,
}

/// Opaque handle to a drawing context's internal conversion buffer.
///
/// Returned by [`DrawingContext::configure`](crate::DrawingContext::configure)
/// and retained by the stage until the next geometry change or stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionBuffer(pub u64);
