use crate::foundation::core::Rgba;
use crate::foundation::error::{OverlyteError, OverlyteResult};
use crate::primitives::{
    ClockParams, DEFAULT_FONT, DEFAULT_FONT_SIZE, FontParams, MAX_FONT_SIZE,
};

/// Execution back-end for batched draw calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessMode {
    /// Software rasterization on the host CPU.
    Software,
    /// GPU-accelerated rendering.
    #[default]
    Accelerated,
    /// Fixed-function hardware compositing.
    ///
    /// Only meaningful on integrated-GPU platforms, and only for rectangle
    /// backgrounds; silently downgraded to [`ProcessMode::Accelerated`] when
    /// the bound device is discrete.
    Hardware,
}

/// Configuration surface of an [`OverlayStage`](crate::OverlayStage).
///
/// Flags may be flipped between frames through
/// [`settings_mut`](crate::OverlayStage::settings_mut); the execution mode,
/// device and hardware-blend color table are latched at
/// [`start`](crate::OverlayStage::start).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Render the wall-clock overlay.
    pub display_clock: bool,
    /// Render buffered text labels.
    pub display_text: bool,
    /// Render object bounding boxes.
    pub display_bbox: bool,
    /// Render instance masks.
    pub display_mask: bool,
    /// Emit bounding-box corner coordinates on the diagnostic side channel.
    pub display_coord: bool,
    /// Clock font face.
    pub clock_font: String,
    /// Clock font size in points, capped at [`MAX_FONT_SIZE`].
    pub clock_font_size: u32,
    /// Clock x offset in pixels.
    pub clock_x_offset: u32,
    /// Clock y offset in pixels.
    pub clock_y_offset: u32,
    /// Clock text color.
    pub clock_color: Rgba,
    /// Execution back-end for draw calls.
    pub mode: ProcessMode,
    /// Hardware-blend color table as `id,r,g,b,a` quintuples, `:`-separated.
    ///
    /// Setting this enables hardware blending for rectangle backgrounds; when
    /// unset, the compiled-in default table is loaded with blending disabled.
    pub hw_blend_color_attrs: Option<String>,
    /// GPU device ordinal the stage binds before every backend operation.
    pub device: u32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            display_clock: false,
            display_text: true,
            display_bbox: true,
            display_mask: false,
            display_coord: true,
            clock_font: DEFAULT_FONT.to_string(),
            clock_font_size: DEFAULT_FONT_SIZE,
            clock_x_offset: 0,
            clock_y_offset: 0,
            clock_color: Rgba::new(1.0, 0.0, 0.0, 1.0),
            mode: ProcessMode::default(),
            hw_blend_color_attrs: None,
            device: 0,
        }
    }
}

impl OverlaySettings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(json: &str) -> OverlyteResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| OverlyteError::configuration(format!("settings JSON: {e}")))
    }

    /// Clock parameters primed into the drawing context.
    pub(crate) fn clock_params(&self) -> ClockParams {
        let mut size = self.clock_font_size;
        if size > MAX_FONT_SIZE {
            tracing::warn!(
                requested = size,
                max = MAX_FONT_SIZE,
                "clock font size capped"
            );
            size = MAX_FONT_SIZE;
        }
        ClockParams {
            font: FontParams {
                name: self.clock_font.clone(),
                size,
                color: self.clock_color,
            },
            x_offset: self.clock_x_offset,
            y_offset: self.clock_y_offset,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
