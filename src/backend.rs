use crate::color_attrs::ClassColorEntry;
use crate::foundation::core::{ConversionBuffer, FrameTarget};
use crate::foundation::error::OverlyteResult;
use crate::primitives::{
    ArrowParams, CircleParams, ClockParams, LineParams, MaskedRect, RectParams, TextParams,
};
use crate::settings::ProcessMode;

/// One bounded batch of primitives submitted to a draw entry point.
///
/// Borrowed from the accumulator that is flushing; a backend must consume it
/// within the call and never retain it.
#[derive(Debug)]
pub struct DrawRequest<'a, P> {
    /// Buffered primitives, at most [`MAX_OSD_ELEMS`](crate::MAX_OSD_ELEMS).
    pub items: &'a [P],
    /// Pixel surface and geometry for the current frame.
    pub target: FrameTarget,
    /// Effective execution mode for this dispatch.
    pub mode: ProcessMode,
}

impl<P> DrawRequest<'_, P> {
    /// Number of primitives in the batch.
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Stateful drawing context owned by a single stage instance.
///
/// Created by [`OverlayBackend::create_context`] after the device is bound;
/// destroyed by dropping. All six draw entry points are independent: a
/// failure in one leaves batches already rendered through the others in the
/// frame buffer.
pub trait DrawingContext {
    /// Allocate or resize the internal conversion buffer for new geometry.
    fn configure(&mut self, width: u32, height: u32) -> OverlyteResult<ConversionBuffer>;

    /// Prime clock-overlay parameters; the clock renders with the next text
    /// dispatch.
    fn set_clock(&mut self, params: &ClockParams) -> OverlyteResult<()>;

    /// Push the hardware-blend color table.
    fn load_blend_colors(&mut self, entries: &[ClassColorEntry]) -> OverlyteResult<()>;

    /// Draw one batch of rectangles.
    fn draw_rects(&mut self, request: &DrawRequest<'_, RectParams>) -> OverlyteResult<()>;

    /// Draw one batch of rectangle + mask pairs.
    fn draw_masks(&mut self, request: &DrawRequest<'_, MaskedRect>) -> OverlyteResult<()>;

    /// Draw one batch of text labels, plus the clock when primed.
    fn draw_texts(&mut self, request: &DrawRequest<'_, TextParams>) -> OverlyteResult<()>;

    /// Draw one batch of lines.
    fn draw_lines(&mut self, request: &DrawRequest<'_, LineParams>) -> OverlyteResult<()>;

    /// Draw one batch of arrows.
    fn draw_arrows(&mut self, request: &DrawRequest<'_, ArrowParams>) -> OverlyteResult<()>;

    /// Draw one batch of circles.
    fn draw_circles(&mut self, request: &DrawRequest<'_, CircleParams>) -> OverlyteResult<()>;
}

/// Device runtime and drawing-context factory.
///
/// The stage binds the device before every operation (start, stop, geometry
/// change and each frame), so implementations should make a redundant bind
/// cheap. A failed bind is reported as
/// [`OverlyteError::Device`](crate::OverlyteError::Device).
pub trait OverlayBackend {
    /// Make `device` current for the calling thread.
    fn bind_device(&self, device: u32) -> OverlyteResult<()>;

    /// Whether `device` is an integrated-GPU platform.
    fn is_integrated(&self, device: u32) -> OverlyteResult<bool>;

    /// Create a drawing context bound to the current device.
    fn create_context(&self) -> OverlyteResult<Box<dyn DrawingContext>>;
}
