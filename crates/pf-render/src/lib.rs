//! pf-render: turning trajectory stores into draw calls.
//!
//! Provides:
//! - Phase-space to pixel mapping per model display box
//! - Hue assignment per trajectory
//! - Sliding, wrapping sample windows
//! - The `RenderSink` drawing interface and a recording implementation
//! - The frame scheduler that streams windows into draw commands

pub mod color;
pub mod error;
pub mod mapper;
pub mod scheduler;
pub mod sink;
pub mod window;

pub use color::{Hsl, Rgba, trajectory_color};
pub use error::{RenderError, RenderResult};
pub use mapper::{CanvasSize, CoordinateMapper, to_pixel};
pub use scheduler::{
    AnimationOptions, AnimationScheduler, Background, DrawCommand, DrawCommands, Polyline,
    SchedulerState,
};
pub use sink::{RecordingSink, RenderSink, SinkOp};
pub use window::{WindowRanges, window_ranges};
