use super::*;
use crate::foundation::core::SurfaceHandle;
use crate::testutil::{RecordingBackend, SharedLog};

fn target() -> FrameTarget {
    FrameTarget {
        surface: SurfaceHandle(7),
        width: 1920,
        height: 1080,
    }
}

fn new_log() -> SharedLog {
    SharedLog::default()
}

#[test]
fn push_dispatches_exactly_at_capacity() {
    let log = new_log();
    let mut ctx = RecordingBackend::context(&log, None);
    let mut batch: Batch<Rects> = Batch::new();

    for i in 0..MAX_OSD_ELEMS {
        assert!(batch.len() < MAX_OSD_ELEMS);
        batch
            .push(
                RectParams::new(i as f32, 0.0, 1.0, 1.0),
                &mut ctx,
                target(),
                ProcessMode::Accelerated,
            )
            .unwrap();
    }

    assert!(batch.is_empty());
    assert_eq!(log.borrow().draw_counts("rect"), vec![MAX_OSD_ELEMS]);
}

#[test]
fn flush_skips_empty_buffer() {
    let log = new_log();
    let mut ctx = RecordingBackend::context(&log, None);
    let mut batch: Batch<Rects> = Batch::new();

    batch
        .flush(&mut ctx, target(), ProcessMode::Software)
        .unwrap();
    assert!(log.borrow().calls.is_empty());
}

#[test]
fn dispatch_fires_even_when_empty() {
    // The text tail flush relies on this to render the clock overlay.
    let log = new_log();
    let mut ctx = RecordingBackend::context(&log, None);
    let mut batch: Batch<Texts> = Batch::new();

    batch
        .dispatch(&mut ctx, target(), ProcessMode::Accelerated)
        .unwrap();
    assert_eq!(log.borrow().draw_counts("text"), vec![0]);
}

#[test]
fn tail_flush_carries_remainder() {
    let log = new_log();
    let mut ctx = RecordingBackend::context(&log, None);
    let mut batch: Batch<Rects> = Batch::new();

    for i in 0..1500 {
        batch
            .push(
                RectParams::new(i as f32, 0.0, 1.0, 1.0),
                &mut ctx,
                target(),
                ProcessMode::Accelerated,
            )
            .unwrap();
    }
    batch
        .flush(&mut ctx, target(), ProcessMode::Accelerated)
        .unwrap();

    assert_eq!(log.borrow().draw_counts("rect"), vec![1024, 476]);
    assert!(batch.is_empty());
}

#[test]
fn failed_dispatch_keeps_buffer_and_surfaces_error() {
    let log = new_log();
    let mut ctx = RecordingBackend::context(&log, Some("line"));
    let mut batch: Batch<Lines> = Batch::new();

    batch.append(LineParams {
        start: crate::foundation::core::Point::new(0.0, 0.0),
        end: crate::foundation::core::Point::new(10.0, 10.0),
        width: 2,
        color: crate::foundation::core::Rgba::new(1.0, 1.0, 1.0, 1.0),
    });
    let err = batch
        .flush(&mut ctx, target(), ProcessMode::Accelerated)
        .unwrap_err();
    assert!(err.to_string().contains("unable to draw line"));
    assert_eq!(batch.len(), 1);
}
