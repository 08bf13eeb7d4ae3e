//! Overlyte is an in-pipeline video overlay stage.
//!
//! Given a decoded frame and a batch of per-object detection metadata
//! (bounding boxes, instance masks, text labels, lines, arrows, circles),
//! the stage renders the annotations into the frame buffer in place before
//! the buffer continues downstream. Rasterization is delegated to an
//! external [`DrawingContext`]; the crate owns the batching and dispatch
//! core that turns metadata lists of arbitrary length into bounded draw
//! calls.
//!
//! # Per-frame pipeline
//!
//! 1. **Scan**: walk the object and display annotation lists once, feeding
//!    six primitive accumulators
//! 2. **Dispatch**: whenever an accumulator reaches [`MAX_OSD_ELEMS`],
//!    submit the batch to the backend and reset
//! 3. **Tail flush**: after the scan, flush non-empty accumulators for
//!    enabled kinds in fixed order (rect, mask, text, line, arrow, circle)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Bounded memory**: accumulators are preallocated once per stage and
//!   never grow past [`MAX_OSD_ELEMS`]; frames trigger no allocation.
//! - **Single-threaded per stage**: one instance owns one drawing context
//!   and processes one frame at a time; concurrent pipeline branches use
//!   independent instances.
//! - **Synchronous errors**: device, resource and draw failures surface on
//!   the call that hit them, never deferred.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod backend;
mod batch;
mod color_attrs;
mod foundation;
mod meta;
mod primitives;
mod settings;
mod stage;

#[cfg(test)]
pub(crate) mod testutil;

pub use backend::{DrawRequest, DrawingContext, OverlayBackend};
pub use batch::MAX_OSD_ELEMS;
pub use color_attrs::{
    ClassColorEntry, DEFAULT_COLOR_ATTRS, MAX_BG_CLR, format_color_attrs, parse_color_attrs,
};
pub use foundation::core::{Canvas, ConversionBuffer, FrameTarget, Point, Rgba, SurfaceHandle};
pub use foundation::error::{OverlyteError, OverlyteResult};
pub use meta::{
    BatchMeta, DisplayList, DisplayMeta, MAX_ELEMENTS_IN_DISPLAY_META, ObjectMeta, VideoFrame,
};
pub use primitives::{
    ArrowHead, ArrowParams, CircleParams, ClockParams, DEFAULT_BORDER_WIDTH, DEFAULT_FONT,
    DEFAULT_FONT_SIZE, FontParams, LineParams, MAX_FONT_SIZE, MaskParams, MaskedRect, RectParams,
    TextParams,
};
pub use settings::{OverlaySettings, ProcessMode};
pub use stage::{LatencyProbe, OverlayStage};
