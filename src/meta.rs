use smallvec::SmallVec;

use crate::foundation::core::SurfaceHandle;
use crate::foundation::error::{OverlyteError, OverlyteResult};
use crate::primitives::{
    ArrowParams, CircleParams, LineParams, MaskParams, RectParams, TextParams,
};

/// Maximum number of elements one display-annotation group carries per kind.
pub const MAX_ELEMENTS_IN_DISPLAY_META: usize = 16;

/// Per-kind bounded list inside a [`DisplayMeta`] group.
///
/// Groups stay within [`MAX_ELEMENTS_IN_DISPLAY_META`] elements in practice,
/// so the list lives inline without a heap allocation.
pub type DisplayList<T> = SmallVec<[T; MAX_ELEMENTS_IN_DISPLAY_META]>;

/// One detected object's annotations.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ObjectMeta {
    /// Bounding rectangle.
    pub rect: RectParams,
    /// Detection class id, used to resolve hardware-blend colors.
    pub class_id: u32,
    /// Instance mask, if the detector produced one.
    pub mask: Option<MaskParams>,
    /// Display label, if any.
    pub text: Option<TextParams>,
}

/// Free-form display annotations attached by upstream elements.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DisplayMeta {
    /// Rectangles.
    pub rects: DisplayList<RectParams>,
    /// Text labels.
    pub labels: DisplayList<TextParams>,
    /// Lines.
    pub lines: DisplayList<LineParams>,
    /// Arrows.
    pub arrows: DisplayList<ArrowParams>,
    /// Circles.
    pub circles: DisplayList<CircleParams>,
}

/// Batched annotation container attached to a frame buffer.
///
/// Both lists are walked once per frame, in order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct BatchMeta {
    /// Per-object annotations.
    pub objects: Vec<ObjectMeta>,
    /// Display-annotation groups.
    pub displays: Vec<DisplayMeta>,
}

/// A decoded video frame moving through the pipeline.
///
/// The surface is GPU-resident and mutated in place through the drawing
/// backend; the stage never copies pixels and never allocates a new buffer
/// for output.
#[derive(Clone, Debug)]
pub struct VideoFrame {
    surface: Option<SurfaceHandle>,
    /// Attached annotation metadata, if any upstream element produced it.
    pub meta: Option<BatchMeta>,
}

impl VideoFrame {
    /// Frame with a mapped surface and no annotations.
    pub fn new(surface: SurfaceHandle) -> Self {
        Self {
            surface: Some(surface),
            meta: None,
        }
    }

    /// Frame whose surface mapping failed or was detached.
    pub fn unmapped() -> Self {
        Self {
            surface: None,
            meta: None,
        }
    }

    /// Mapped surface handle, or a resource error when mapping failed.
    pub fn surface(&self) -> OverlyteResult<SurfaceHandle> {
        self.surface
            .ok_or_else(|| OverlyteError::resource("unable to map frame buffer"))
    }
}
