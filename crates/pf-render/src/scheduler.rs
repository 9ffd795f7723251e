//! Frame scheduler: streams trajectory windows into draw commands.

use std::sync::Arc;

use pf_core::{Generation, Real};
use pf_sim::TrajectoryStore;
use serde::{Deserialize, Serialize};

use crate::color::{Rgba, trajectory_color};
use crate::error::{RenderError, RenderResult};
use crate::mapper::{CanvasSize, CoordinateMapper};
use crate::sink::RenderSink;
use crate::window::window_ranges;

/// Playback parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Samples drawn per trajectory per frame
    pub window_size: usize,
    /// Samples the window advances per frame
    pub stride: usize,
    pub line_width: Real,
    /// Alpha of the black overlay that fades old trails
    pub trail_alpha: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            window_size: 600,
            stride: 2,
            line_width: 2.0,
            trail_alpha: 0.05,
        }
    }
}

impl AnimationOptions {
    pub fn validate(&self) -> RenderResult<()> {
        if self.window_size == 0 {
            return Err(RenderError::InvalidArg {
                what: "window_size must be positive",
            });
        }
        if self.stride == 0 {
            return Err(RenderError::InvalidArg {
                what: "stride must be positive",
            });
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(RenderError::InvalidArg {
                what: "line_width must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.trail_alpha) {
            return Err(RenderError::InvalidArg {
                what: "trail_alpha must lie in [0, 1]",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Captured static background, tagged with the store generation it was
/// captured for.
#[derive(Debug, Clone)]
pub struct Background<S> {
    pub generation: Generation,
    pub snapshot: S,
}

/// One stroked polyline in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Index of the source trajectory in its store.
    pub trajectory: usize,
    pub color: Rgba,
    pub width: Real,
    pub vertices: Vec<(Real, Real)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RestoreBackground,
    Fill(Rgba),
    Stroke(Polyline),
}

/// Everything drawn on one frame, computed against a single store.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommands {
    generation: Generation,
    frame: u64,
    commands: Vec<DrawCommand>,
}

impl DrawCommands {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Frame counter value these commands were computed at.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke(p) => Some(p),
            _ => None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.polylines().map(|p| p.vertices.len()).sum()
    }

    /// Issue the primitive calls for this frame.
    ///
    /// Fails without drawing anything if `background` belongs to another
    /// generation.
    pub fn replay<S: RenderSink>(
        &self,
        sink: &mut S,
        background: &Background<S::Snapshot>,
    ) -> RenderResult<()> {
        if self.commands.is_empty() {
            return Ok(());
        }
        if background.generation != self.generation {
            return Err(RenderError::StaleGeneration {
                frame: self.generation,
                background: background.generation,
            });
        }
        for command in &self.commands {
            match command {
                DrawCommand::RestoreBackground => sink.restore_frame(&background.snapshot),
                DrawCommand::Fill(color) => sink.fill_background(*color),
                DrawCommand::Stroke(line) => {
                    sink.begin_path();
                    let mut vertices = line.vertices.iter();
                    if let Some(&(x, y)) = vertices.next() {
                        sink.move_to(x, y);
                    }
                    for &(x, y) in vertices {
                        sink.line_to(x, y);
                    }
                    sink.stroke(line.color, line.width);
                }
            }
        }
        Ok(())
    }
}

/// Advances a logical frame clock over one immutable trajectory store.
///
/// The mapper is derived from the store's own display box, so a scheduler
/// can only ever pair samples with the model that produced them.
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    store: Arc<TrajectoryStore>,
    mapper: CoordinateMapper,
    opts: AnimationOptions,
    state: SchedulerState,
    frame_count: u64,
    simulation_time: Real,
}

impl AnimationScheduler {
    /// Create an idle scheduler at frame 0.
    pub fn new(
        store: Arc<TrajectoryStore>,
        canvas: CanvasSize,
        opts: AnimationOptions,
    ) -> RenderResult<Self> {
        opts.validate()?;
        let mapper = CoordinateMapper::new(store.display_box(), canvas)?;
        Ok(Self {
            store,
            mapper,
            opts,
            state: SchedulerState::Idle,
            frame_count: 0,
            simulation_time: 0.0,
        })
    }

    pub fn start(&mut self) {
        self.state = SchedulerState::Running;
    }

    pub fn stop(&mut self) {
        self.state = SchedulerState::Idle;
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn simulation_time(&self) -> Real {
        self.simulation_time
    }

    pub fn store(&self) -> &Arc<TrajectoryStore> {
        &self.store
    }

    pub fn generation(&self) -> Generation {
        self.store.generation()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Tick once. Idle schedulers return no commands and keep their clock.
    pub fn advance_frame(&mut self) -> DrawCommands {
        let generation = self.store.generation();
        if !self.is_running() {
            return DrawCommands {
                generation,
                frame: self.frame_count,
                commands: Vec::new(),
            };
        }

        self.frame_count += 1;
        self.simulation_time += self.store.dt();

        let count = self.store.len();
        let mut commands = Vec::with_capacity(2 + count * 2);
        commands.push(DrawCommand::RestoreBackground);
        commands.push(DrawCommand::Fill(
            Rgba::BLACK.with_alpha(self.opts.trail_alpha),
        ));

        for (index, traj) in self.store.trajectories().iter().enumerate() {
            let color = trajectory_color(index, count).to_rgba();
            let ranges = window_ranges(
                self.frame_count,
                traj.len(),
                self.opts.window_size,
                self.opts.stride,
            );
            let points = traj.points();
            for range in std::iter::once(ranges.head).chain(ranges.wrap) {
                let vertices = points[range]
                    .iter()
                    .map(|p| self.mapper.to_pixel(*p))
                    .collect();
                commands.push(DrawCommand::Stroke(Polyline {
                    trajectory: index,
                    color,
                    width: self.opts.line_width,
                    vertices,
                }));
            }
        }

        DrawCommands {
            generation,
            frame: self.frame_count,
            commands,
        }
    }
}
