//! Drawing primitives consumed by the scheduler.

use crate::color::Rgba;

/// Immediate-mode 2D drawing surface.
///
/// The scheduler issues only these calls; it never touches pixels directly.
/// `Snapshot` is whatever the surface needs to restore a captured frame.
pub trait RenderSink {
    type Snapshot;

    fn clear(&mut self);

    /// Fill the whole canvas. Translucent colors composite over the current
    /// contents.
    fn fill_background(&mut self, color: Rgba);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn stroke(&mut self, color: Rgba, width: f64);

    fn capture_frame(&mut self) -> Self::Snapshot;

    fn restore_frame(&mut self, snapshot: &Self::Snapshot);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkOp {
    Clear,
    FillBackground(Rgba),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke { color: Rgba, width: f64 },
    Capture(usize),
    Restore(usize),
}

/// Headless sink that logs every call.
///
/// Snapshots are sequence numbers of `capture_frame` calls.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ops: Vec<SinkOp>,
    captures: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SinkOp] {
        &self.ops
    }

    /// Drain the log, keeping the capture counter.
    pub fn take_ops(&mut self) -> Vec<SinkOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SinkOp::Stroke { .. }))
            .count()
    }

    /// `move_to` plus `line_to` calls.
    pub fn vertex_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SinkOp::MoveTo(..) | SinkOp::LineTo(..)))
            .count()
    }
}

impl RenderSink for RecordingSink {
    type Snapshot = usize;

    fn clear(&mut self) {
        self.ops.push(SinkOp::Clear);
    }

    fn fill_background(&mut self, color: Rgba) {
        self.ops.push(SinkOp::FillBackground(color));
    }

    fn begin_path(&mut self) {
        self.ops.push(SinkOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SinkOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SinkOp::LineTo(x, y));
    }

    fn stroke(&mut self, color: Rgba, width: f64) {
        self.ops.push(SinkOp::Stroke { color, width });
    }

    fn capture_frame(&mut self) -> usize {
        self.captures += 1;
        self.ops.push(SinkOp::Capture(self.captures));
        self.captures
    }

    fn restore_frame(&mut self, snapshot: &usize) {
        self.ops.push(SinkOp::Restore(*snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut sink = RecordingSink::new();
        sink.clear();
        sink.fill_background(Rgba::BLACK);
        let snap = sink.capture_frame();
        sink.begin_path();
        sink.move_to(0.0, 0.0);
        sink.line_to(1.0, 1.0);
        sink.stroke(Rgba::rgb(255, 0, 0), 2.0);
        sink.restore_frame(&snap);

        assert_eq!(snap, 1);
        assert_eq!(sink.stroke_count(), 1);
        assert_eq!(sink.vertex_count(), 2);
        assert_eq!(sink.ops()[0], SinkOp::Clear);
        assert_eq!(sink.ops().last(), Some(&SinkOp::Restore(1)));

        let drained = sink.take_ops();
        assert_eq!(drained.len(), 8);
        assert!(sink.ops().is_empty());
        assert_eq!(sink.capture_frame(), 2);
    }
}
