use crate::backend::{DrawRequest, DrawingContext};
use crate::foundation::core::FrameTarget;
use crate::foundation::error::OverlyteResult;
use crate::primitives::{
    ArrowParams, CircleParams, LineParams, MaskedRect, RectParams, TextParams,
};
use crate::settings::ProcessMode;

/// Hard element-count ceiling per batched draw call.
pub const MAX_OSD_ELEMS: usize = 1024;

/// Descriptor binding one primitive kind to its payload type and backend
/// draw entry point.
pub(crate) trait PrimitiveKind {
    /// Payload buffered for this kind.
    type Params;

    /// Kind name used in diagnostics and error messages.
    const NAME: &'static str;

    /// Invoke the kind's draw entry point for one flushed batch.
    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, Self::Params>,
    ) -> OverlyteResult<()>;
}

pub(crate) struct Rects;

impl PrimitiveKind for Rects {
    type Params = RectParams;
    const NAME: &'static str = "rect";

    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, RectParams>,
    ) -> OverlyteResult<()> {
        ctx.draw_rects(request)
    }
}

pub(crate) struct Masks;

impl PrimitiveKind for Masks {
    type Params = MaskedRect;
    const NAME: &'static str = "mask";

    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, MaskedRect>,
    ) -> OverlyteResult<()> {
        ctx.draw_masks(request)
    }
}

pub(crate) struct Texts;

impl PrimitiveKind for Texts {
    type Params = TextParams;
    const NAME: &'static str = "text";

    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, TextParams>,
    ) -> OverlyteResult<()> {
        ctx.draw_texts(request)
    }
}

pub(crate) struct Lines;

impl PrimitiveKind for Lines {
    type Params = LineParams;
    const NAME: &'static str = "line";

    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, LineParams>,
    ) -> OverlyteResult<()> {
        ctx.draw_lines(request)
    }
}

pub(crate) struct Arrows;

impl PrimitiveKind for Arrows {
    type Params = ArrowParams;
    const NAME: &'static str = "arrow";

    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, ArrowParams>,
    ) -> OverlyteResult<()> {
        ctx.draw_arrows(request)
    }
}

pub(crate) struct Circles;

impl PrimitiveKind for Circles {
    type Params = CircleParams;
    const NAME: &'static str = "circle";

    fn draw(
        ctx: &mut dyn DrawingContext,
        request: &DrawRequest<'_, CircleParams>,
    ) -> OverlyteResult<()> {
        ctx.draw_circles(request)
    }
}

/// Fixed-capacity primitive buffer with capacity-triggered dispatch.
///
/// The buffer is preallocated to [`MAX_OSD_ELEMS`] at stage construction and
/// reused for the stage's lifetime; clearing after a dispatch keeps the
/// allocation. Invariant: `len() <= MAX_OSD_ELEMS`, and the buffer is empty
/// immediately after every successful dispatch.
pub(crate) struct Batch<K: PrimitiveKind> {
    items: Vec<K::Params>,
}

impl<K: PrimitiveKind> Batch<K> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_OSD_ELEMS),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.items.len() == MAX_OSD_ELEMS
    }

    /// Buffer one primitive without dispatching. Callers check
    /// [`is_full`](Self::is_full) themselves when dispatch must be deferred
    /// past other per-item work.
    pub(crate) fn append(&mut self, item: K::Params) {
        debug_assert!(self.len() < MAX_OSD_ELEMS);
        self.items.push(item);
    }

    /// Buffer one primitive; dispatches and resets when the buffer reaches
    /// capacity.
    pub(crate) fn push(
        &mut self,
        item: K::Params,
        ctx: &mut dyn DrawingContext,
        target: FrameTarget,
        mode: ProcessMode,
    ) -> OverlyteResult<()> {
        self.append(item);
        if self.is_full() {
            self.dispatch(ctx, target, mode)?;
        }
        Ok(())
    }

    /// Dispatch whatever is buffered, then reset; no-op when empty.
    pub(crate) fn flush(
        &mut self,
        ctx: &mut dyn DrawingContext,
        target: FrameTarget,
        mode: ProcessMode,
    ) -> OverlyteResult<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        self.dispatch(ctx, target, mode)
    }

    /// Dispatch unconditionally, then reset.
    ///
    /// The text tail flush uses this directly: with the clock enabled it must
    /// fire even with zero buffered strings so the clock renders.
    pub(crate) fn dispatch(
        &mut self,
        ctx: &mut dyn DrawingContext,
        target: FrameTarget,
        mode: ProcessMode,
    ) -> OverlyteResult<()> {
        let request = DrawRequest {
            items: &self.items,
            target,
            mode,
        };
        tracing::trace!(kind = K::NAME, count = request.count(), "dispatching batch");
        K::draw(ctx, &request)?;
        self.items.clear();
        Ok(())
    }

    /// Discard buffered primitives without dispatching.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
