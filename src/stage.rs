use crate::backend::{DrawingContext, OverlayBackend};
use crate::batch::{Arrows, Batch, Circles, Lines, Masks, Rects, Texts};
use crate::color_attrs::{ClassColorEntry, DEFAULT_COLOR_ATTRS, parse_color_attrs};
use crate::foundation::core::{Canvas, ConversionBuffer, FrameTarget};
use crate::foundation::error::{OverlyteError, OverlyteResult};
use crate::meta::VideoFrame;
use crate::primitives::MaskedRect;
use crate::settings::{OverlaySettings, ProcessMode};

/// Ingress/egress timestamping hooks, invoked once per frame each.
///
/// Ingress fires after the frame is accepted and before any annotation work;
/// egress fires after the frame completes successfully. A frame that fails
/// mid-processing gets no egress call.
pub trait LatencyProbe {
    /// Frame accepted by the stage.
    fn on_ingress(&mut self, stage: &str, frame: &VideoFrame);

    /// Frame fully annotated.
    fn on_egress(&mut self, stage: &str, frame: &VideoFrame);
}

/// In-pipeline overlay stage: batches annotation metadata into bounded draw
/// calls against a backend drawing context.
///
/// One instance owns one drawing context and processes one frame at a time;
/// concurrent pipeline branches each construct their own instance. Lifecycle:
/// [`start`](Self::start), any number of
/// [`reconfigure`](Self::reconfigure)/[`process_frame`](Self::process_frame)
/// cycles, then [`stop`](Self::stop).
pub struct OverlayStage {
    name: String,
    settings: OverlaySettings,
    backend: Box<dyn OverlayBackend>,
    probe: Option<Box<dyn LatencyProbe>>,

    context: Option<Box<dyn DrawingContext>>,
    conv_buf: Option<ConversionBuffer>,
    width: u32,
    height: u32,
    mode: ProcessMode,
    hw_blend: bool,
    colors: Vec<ClassColorEntry>,
    frame_num: u64,

    rects: Batch<Rects>,
    masks: Batch<Masks>,
    texts: Batch<Texts>,
    lines: Batch<Lines>,
    arrows: Batch<Arrows>,
    circles: Batch<Circles>,
}

impl OverlayStage {
    /// Build a stage with the given settings and backend.
    ///
    /// Accumulators are preallocated here and reused for the stage's
    /// lifetime; no device work happens until [`start`](Self::start).
    pub fn new(
        name: impl Into<String>,
        settings: OverlaySettings,
        backend: Box<dyn OverlayBackend>,
    ) -> Self {
        let mode = settings.mode;
        Self {
            name: name.into(),
            settings,
            backend,
            probe: None,
            context: None,
            conv_buf: None,
            width: 0,
            height: 0,
            mode,
            hw_blend: false,
            colors: Vec::new(),
            frame_num: 0,
            rects: Batch::new(),
            masks: Batch::new(),
            texts: Batch::new(),
            lines: Batch::new(),
            arrows: Batch::new(),
            circles: Batch::new(),
        }
    }

    /// Install ingress/egress timestamping hooks.
    pub fn set_latency_probe(&mut self, probe: Box<dyn LatencyProbe>) {
        self.probe = Some(probe);
    }

    /// Current settings.
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Mutable settings; display flags may be flipped between frames.
    pub fn settings_mut(&mut self) -> &mut OverlaySettings {
        &mut self.settings
    }

    /// Effective execution mode after any start-time downgrade.
    pub fn effective_mode(&self) -> ProcessMode {
        self.mode
    }

    /// Frames processed since start or the last geometry change.
    pub fn frames_processed(&self) -> u64 {
        self.frame_num
    }

    /// Conversion buffer handle the context returned for the current
    /// geometry, if configured.
    pub fn conversion_buffer(&self) -> Option<ConversionBuffer> {
        self.conv_buf
    }

    /// Bind the device and create the drawing context.
    ///
    /// Latches the execution mode (downgrading
    /// [`Hardware`](ProcessMode::Hardware) to
    /// [`Accelerated`](ProcessMode::Accelerated) on discrete devices), parses
    /// the hardware-blend color table (the compiled-in default when none is
    /// configured), pushes it into the context, and primes the clock overlay
    /// if enabled. Device bind or context creation failure is fatal for the
    /// stage.
    pub fn start(&mut self) -> OverlyteResult<()> {
        self.backend.bind_device(self.settings.device)?;

        let mut ctx = self.backend.create_context()?;

        self.mode = self.settings.mode;
        if self.mode == ProcessMode::Hardware
            && !self.backend.is_integrated(self.settings.device)?
        {
            tracing::debug!(
                stage = %self.name,
                "hardware compositing unavailable on discrete device, using accelerated mode"
            );
            self.mode = ProcessMode::Accelerated;
        }

        self.hw_blend = self.settings.hw_blend_color_attrs.is_some();
        let attrs = self
            .settings
            .hw_blend_color_attrs
            .as_deref()
            .unwrap_or(DEFAULT_COLOR_ATTRS);
        self.colors = parse_color_attrs(attrs)?;
        ctx.load_blend_colors(&self.colors)?;

        if self.settings.display_clock {
            ctx.set_clock(&self.settings.clock_params())?;
        }

        self.context = Some(ctx);
        Ok(())
    }

    /// Apply newly negotiated frame geometry.
    ///
    /// Resets the frame counter, then is a no-op when the context is already
    /// configured for these dimensions; otherwise rebinds the device and has
    /// the context resize its conversion buffer. Idempotent per geometry
    /// value.
    pub fn reconfigure(&mut self, width: u32, height: u32) -> OverlyteResult<()> {
        self.frame_num = 0;

        let canvas = Canvas::new(width, height)?;
        if self.context.is_some() && self.width == canvas.width && self.height == canvas.height {
            return Ok(());
        }

        self.backend.bind_device(self.settings.device)?;
        let ctx = self
            .context
            .as_mut()
            .ok_or_else(|| OverlyteError::resource("reconfigure called before start"))?;

        self.width = canvas.width;
        self.height = canvas.height;

        if self.settings.display_clock {
            ctx.set_clock(&self.settings.clock_params())?;
        }
        self.conv_buf = Some(ctx.configure(canvas.width, canvas.height)?);
        Ok(())
    }

    /// Destroy the drawing context and clear geometry.
    pub fn stop(&mut self) -> OverlyteResult<()> {
        self.backend.bind_device(self.settings.device)?;
        self.context = None;
        self.conv_buf = None;
        self.width = 0;
        self.height = 0;
        Ok(())
    }

    /// Render all annotations attached to `frame` into its surface, in place.
    ///
    /// Walks the object and display annotation lists once, feeding the six
    /// primitive accumulators and dispatching each in bounded batches of
    /// [`MAX_OSD_ELEMS`](crate::MAX_OSD_ELEMS); a tail flush covers whatever
    /// remains. An absent metadata container is an empty, successful cycle.
    /// Any backend draw failure aborts the remaining primitive kinds for this
    /// frame; batches already dispatched stay rendered.
    pub fn process_frame(&mut self, frame: &mut VideoFrame) -> OverlyteResult<()> {
        let surface = frame.surface()?;

        if let Some(probe) = self.probe.as_mut() {
            probe.on_ingress(&self.name, frame);
        }

        self.backend.bind_device(self.settings.device)?;

        let ctx = self
            .context
            .as_deref_mut()
            .ok_or_else(|| OverlyteError::resource("process_frame called before start"))?;

        let target = FrameTarget {
            surface,
            width: self.width,
            height: self.height,
        };
        let mode = self.mode;

        let span = tracing::info_span!("annotate", stage = %self.name, frame = self.frame_num);
        {
            let _enter = span.enter();

            // Counts restart every frame; primitives left over from a failed
            // or flag-gated previous frame are discarded, never re-dispatched.
            self.rects.clear();
            self.masks.clear();
            self.texts.clear();
            self.lines.clear();
            self.arrows.clear();
            self.circles.clear();

            if let Some(meta) = frame.meta.as_ref() {
                for object in &meta.objects {
                    if self.settings.display_bbox {
                        let mut rect = object.rect.clone();
                        if mode == ProcessMode::Hardware && self.hw_blend {
                            // First matching table entry wins; no match leaves
                            // the rectangle without a background.
                            if let Some((idx, entry)) = self
                                .colors
                                .iter()
                                .enumerate()
                                .find(|(_, e)| e.class_id == object.class_id)
                            {
                                rect.color_id = Some(idx);
                                rect.bg_color = Some(entry.color);
                            }
                        }
                        self.rects.append(rect);
                    }

                    if self.settings.display_coord {
                        let top_left = object.rect.top_left();
                        let bottom_right = object.rect.bottom_right();
                        let label = object
                            .text
                            .as_ref()
                            .map(|t| t.text.as_str())
                            .unwrap_or_default();
                        tracing::info!(
                            target: "overlyte::coord",
                            frame = self.frame_num,
                            label,
                            top_left = ?top_left,
                            bottom_right = ?bottom_right,
                            "bbox corners"
                        );
                    }

                    if self.rects.is_full() {
                        self.rects.dispatch(ctx, target, mode)?;
                    }

                    if self.settings.display_mask
                        && let Some(mask) = object.mask.as_ref().filter(|m| !m.is_empty())
                    {
                        self.masks.push(
                            MaskedRect {
                                rect: object.rect.clone(),
                                mask: mask.clone(),
                            },
                            ctx,
                            target,
                            mode,
                        )?;
                    }

                    if let Some(text) = object.text.as_ref() {
                        self.texts.push(text.clone(), ctx, target, mode)?;
                    }
                }

                for display in &meta.displays {
                    for rect in &display.rects {
                        self.rects.push(rect.clone(), ctx, target, mode)?;
                    }
                    for label in &display.labels {
                        if !label.text.is_empty() {
                            self.texts.push(label.clone(), ctx, target, mode)?;
                        }
                    }
                    for line in &display.lines {
                        self.lines.push(line.clone(), ctx, target, mode)?;
                    }
                    for arrow in &display.arrows {
                        self.arrows.push(arrow.clone(), ctx, target, mode)?;
                    }
                    for circle in &display.circles {
                        self.circles.push(circle.clone(), ctx, target, mode)?;
                    }
                }
            }

            // Tail flush, fixed order. Disabled kinds keep their buffers;
            // the next frame's entry clear discards them.
            if self.settings.display_bbox {
                self.rects.flush(ctx, target, mode)?;
            }
            if self.settings.display_mask {
                self.masks.flush(ctx, target, mode)?;
            }
            if self.settings.display_text
                && (self.settings.display_clock || !self.texts.is_empty())
            {
                // Unconditional dispatch: the clock renders with the text
                // pass even when no strings are buffered.
                self.texts.dispatch(ctx, target, mode)?;
            }
            self.lines.flush(ctx, target, mode)?;
            self.arrows.flush(ctx, target, mode)?;
            self.circles.flush(ctx, target, mode)?;
        }

        self.frame_num += 1;

        if let Some(probe) = self.probe.as_mut() {
            probe.on_egress(&self.name, frame);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
