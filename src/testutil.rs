//! Recording backend shared by unit tests: every entry point logs its call
//! and batch size, with scriptable failures per draw kind.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{DrawRequest, DrawingContext, OverlayBackend};
use crate::color_attrs::ClassColorEntry;
use crate::foundation::core::ConversionBuffer;
use crate::foundation::error::{OverlyteError, OverlyteResult};
use crate::primitives::{
    ArrowParams, CircleParams, ClockParams, LineParams, MaskedRect, RectParams, TextParams,
};
use crate::settings::ProcessMode;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Configure { width: u32, height: u32 },
    SetClock,
    LoadColors { count: usize },
    Draw { kind: &'static str, count: usize, mode: ProcessMode },
}

#[derive(Debug, Default)]
pub(crate) struct CallLog {
    pub(crate) calls: Vec<Call>,
    /// Rectangle batches captured verbatim for content assertions.
    pub(crate) rect_batches: Vec<Vec<RectParams>>,
}

impl CallLog {
    pub(crate) fn draw_counts(&self, kind: &str) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw { kind: k, count, .. } if *k == kind => Some(*count),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn draw_modes(&self, kind: &str) -> Vec<ProcessMode> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw { kind: k, mode, .. } if *k == kind => Some(*mode),
                _ => None,
            })
            .collect()
    }
}

pub(crate) type SharedLog = Rc<RefCell<CallLog>>;

pub(crate) struct RecordingContext {
    log: SharedLog,
    fail_kind: Option<&'static str>,
}

impl RecordingContext {
    fn record(&mut self, kind: &'static str, count: usize, mode: ProcessMode) -> OverlyteResult<()> {
        self.log.borrow_mut().calls.push(Call::Draw { kind, count, mode });
        if self.fail_kind == Some(kind) {
            return Err(OverlyteError::resource(format!("unable to draw {kind}")));
        }
        Ok(())
    }
}

impl DrawingContext for RecordingContext {
    fn configure(&mut self, width: u32, height: u32) -> OverlyteResult<ConversionBuffer> {
        self.log.borrow_mut().calls.push(Call::Configure { width, height });
        Ok(ConversionBuffer((u64::from(width) << 32) | u64::from(height)))
    }

    fn set_clock(&mut self, _params: &ClockParams) -> OverlyteResult<()> {
        self.log.borrow_mut().calls.push(Call::SetClock);
        Ok(())
    }

    fn load_blend_colors(&mut self, entries: &[ClassColorEntry]) -> OverlyteResult<()> {
        self.log
            .borrow_mut()
            .calls
            .push(Call::LoadColors { count: entries.len() });
        Ok(())
    }

    fn draw_rects(&mut self, request: &DrawRequest<'_, RectParams>) -> OverlyteResult<()> {
        self.log.borrow_mut().rect_batches.push(request.items.to_vec());
        self.record("rect", request.count(), request.mode)
    }

    fn draw_masks(&mut self, request: &DrawRequest<'_, MaskedRect>) -> OverlyteResult<()> {
        self.record("mask", request.count(), request.mode)
    }

    fn draw_texts(&mut self, request: &DrawRequest<'_, TextParams>) -> OverlyteResult<()> {
        self.record("text", request.count(), request.mode)
    }

    fn draw_lines(&mut self, request: &DrawRequest<'_, LineParams>) -> OverlyteResult<()> {
        self.record("line", request.count(), request.mode)
    }

    fn draw_arrows(&mut self, request: &DrawRequest<'_, ArrowParams>) -> OverlyteResult<()> {
        self.record("arrow", request.count(), request.mode)
    }

    fn draw_circles(&mut self, request: &DrawRequest<'_, CircleParams>) -> OverlyteResult<()> {
        self.record("circle", request.count(), request.mode)
    }
}

pub(crate) struct RecordingBackend {
    pub(crate) integrated: bool,
    pub(crate) fail_bind: bool,
    pub(crate) fail_kind: Option<&'static str>,
    log: SharedLog,
}

impl RecordingBackend {
    pub(crate) fn new(integrated: bool) -> (Self, SharedLog) {
        let log: SharedLog = Rc::default();
        (
            Self {
                integrated,
                fail_bind: false,
                fail_kind: None,
                log: Rc::clone(&log),
            },
            log,
        )
    }

    /// Standalone context for accumulator tests that bypass the stage.
    pub(crate) fn context(log: &SharedLog, fail_kind: Option<&'static str>) -> RecordingContext {
        RecordingContext {
            log: Rc::clone(log),
            fail_kind,
        }
    }
}

impl OverlayBackend for RecordingBackend {
    fn bind_device(&self, device: u32) -> OverlyteResult<()> {
        if self.fail_bind {
            return Err(OverlyteError::device(format!("unable to set device {device}")));
        }
        Ok(())
    }

    fn is_integrated(&self, _device: u32) -> OverlyteResult<bool> {
        Ok(self.integrated)
    }

    fn create_context(&self) -> OverlyteResult<Box<dyn DrawingContext>> {
        Ok(Box::new(RecordingContext {
            log: Rc::clone(&self.log),
            fail_kind: self.fail_kind,
        }))
    }
}
