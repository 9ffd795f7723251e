//! The simulation context: selection state, the active store and playback.

use std::sync::Arc;

use pf_core::{Generation, GenerationCounter};
use pf_models::{ModelRegistry, Tier};
use pf_render::{AnimationScheduler, Background, RenderSink, Rgba};
use pf_sim::{TrajectoryStore, integrate};
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::error::{AppError, AppResult};
use crate::worker::{IntegrationWorker, WorkerMessage};

/// What one call to `advance_frame` drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub generation: Generation,
    pub frame: u64,
    pub polylines: usize,
    pub vertices: usize,
}

/// Scheduler and background for one store generation. Always replaced as a
/// whole.
struct Playback<Snap> {
    scheduler: AnimationScheduler,
    background: Background<Snap>,
}

/// Owns the sink and everything drawn onto it.
///
/// Created once at startup; model changes, tier changes and resets replace
/// the playback wholesale. A failed operation leaves the previous selection,
/// store, frame counter and background untouched.
pub struct SimulationContext<S: RenderSink> {
    registry: Arc<ModelRegistry>,
    config: SimConfig,
    generations: GenerationCounter,
    tier: Tier,
    planar_model: String,
    spatial_model: String,
    playback: Option<Playback<S::Snapshot>>,
    pending: Option<IntegrationWorker>,
    sink: S,
}

impl<S: RenderSink> SimulationContext<S> {
    /// Build a context and run the initial reinitialization.
    pub fn new(config: SimConfig, registry: Arc<ModelRegistry>, sink: S) -> AppResult<Self> {
        config.validate()?;
        registry.lookup(&config.initial_model)?;

        let mut ctx = Self {
            registry,
            tier: config.tier,
            planar_model: config.initial_model.clone(),
            spatial_model: pf_models::SPATIAL_MODELS
                .first()
                .copied()
                .unwrap_or_default()
                .to_string(),
            config,
            generations: GenerationCounter::new(),
            playback: None,
            pending: None,
            sink,
        };
        ctx.reinitialize(ctx.tier, ctx.planar_model.clone())?;
        Ok(ctx)
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn planar_model(&self) -> &str {
        &self.planar_model
    }

    pub fn spatial_model(&self) -> &str {
        &self.spatial_model
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Store being animated, if the planar tier is active.
    pub fn store(&self) -> Option<&Arc<TrajectoryStore>> {
        self.playback.as_ref().map(|p| p.scheduler.store())
    }

    pub fn frame_count(&self) -> u64 {
        self.playback
            .as_ref()
            .map_or(0, |p| p.scheduler.frame_count())
    }

    pub fn simulation_time(&self) -> f64 {
        self.playback
            .as_ref()
            .map_or(0.0, |p| p.scheduler.simulation_time())
    }

    pub fn is_running(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| p.scheduler.is_running())
    }

    /// Generation of the pending background request, if any.
    pub fn pending_ticket(&self) -> Option<Generation> {
        self.pending.as_ref().map(IntegrationWorker::ticket)
    }

    /// Switch the planar model and reinitialize.
    pub fn select_model(&mut self, name: &str) -> AppResult<()> {
        self.registry.lookup(name)?;
        self.cancel_pending();
        self.reinitialize(self.tier, name.to_string())
    }

    /// Switch tiers and reinitialize.
    pub fn select_tier(&mut self, tier: Tier) -> AppResult<()> {
        self.cancel_pending();
        self.reinitialize(tier, self.planar_model.clone())
    }

    /// Record the three-variable selection. Nothing is integrated for it.
    pub fn select_spatial_model(&mut self, name: &str) -> AppResult<()> {
        let name = self.registry.lookup_spatial(name)?;
        info!(model = name, "3D model selected");
        self.spatial_model = name.to_string();
        Ok(())
    }

    /// Reinitialize the current selection.
    pub fn reset(&mut self) -> AppResult<()> {
        self.cancel_pending();
        self.reinitialize(self.tier, self.planar_model.clone())
    }

    /// Start integrating `name` on a worker thread.
    ///
    /// Playback of the current store continues until `poll_pending` installs
    /// the result between frames. A newer request supersedes an older one and
    /// cancels its pass.
    pub fn request_model(&mut self, name: &str) -> AppResult<Generation> {
        let model = Arc::clone(self.registry.lookup(name)?);
        let ticket = self.generations.next();
        if let Some(old) = self.pending.take() {
            old.cancel();
            debug!(superseded = %old.ticket(), by = %ticket, "replacing pending integration");
        }
        self.pending = Some(IntegrationWorker::start(
            model,
            self.config.integration,
            ticket,
        ));
        Ok(ticket)
    }

    /// Install a finished background pass. Returns `true` if a new store
    /// was installed.
    pub fn poll_pending(&mut self) -> AppResult<bool> {
        let message = match self.pending.as_ref().and_then(IntegrationWorker::try_finish) {
            Some(message) => message,
            None => return Ok(false),
        };
        self.pending = None;
        self.accept(message)
    }

    /// Block until the pending pass (if any) finishes and install it.
    pub fn wait_pending(&mut self) -> AppResult<bool> {
        match self.pending.take() {
            Some(worker) => self.accept(worker.wait()),
            None => Ok(false),
        }
    }

    /// Tick the scheduler once and draw the frame onto the sink.
    ///
    /// Returns `None` when nothing is animating (3D tier).
    pub fn advance_frame(&mut self) -> AppResult<Option<FrameReport>> {
        self.poll_pending()?;

        let Some(playback) = self.playback.as_mut() else {
            return Ok(None);
        };
        let commands = playback.scheduler.advance_frame();
        if commands.is_empty() {
            return Ok(None);
        }
        commands.replay(&mut self.sink, &playback.background)?;

        Ok(Some(FrameReport {
            generation: commands.generation(),
            frame: commands.frame(),
            polylines: commands.polylines().count(),
            vertices: commands.vertex_count(),
        }))
    }

    fn accept(&mut self, message: WorkerMessage) -> AppResult<bool> {
        match message {
            WorkerMessage::Complete { store } => {
                if self.tier != Tier::Planar {
                    debug!(generation = %store.generation(), "dropping 2D store while in 3D tier");
                    self.planar_model = store.model().to_string();
                    return Ok(false);
                }
                let model = store.model().to_string();
                self.install(store)?;
                self.planar_model = model;
                Ok(true)
            }
            WorkerMessage::Cancelled { ticket } => {
                debug!(%ticket, "pending integration reported cancellation");
                Ok(false)
            }
            WorkerMessage::Error { ticket, message } => {
                warn!(%ticket, %message, "background integration failed");
                Err(AppError::Worker(message))
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(worker) = self.pending.take() {
            worker.cancel();
            debug!(ticket = %worker.ticket(), "cancelling pending integration");
        }
    }

    /// Stop, recompute (or defer to 3D), reset the clock and recapture the
    /// background. Selection fields are only updated on success.
    fn reinitialize(&mut self, tier: Tier, model_name: String) -> AppResult<()> {
        match tier {
            Tier::Planar => {
                let model = Arc::clone(self.registry.lookup(&model_name)?);
                let store = integrate(&model, &self.config.integration, self.generations.next())?;
                self.install(store)?;
            }
            Tier::Spatial => {
                if let Some(mut old) = self.playback.take() {
                    old.scheduler.stop();
                }
                info!(model = %self.spatial_model, "3D tier active; planar playback stopped");
            }
        }
        self.tier = tier;
        self.planar_model = model_name;
        Ok(())
    }

    fn install(&mut self, store: TrajectoryStore) -> AppResult<()> {
        let generation = store.generation();
        let model = store.model().to_string();
        let mut scheduler = AnimationScheduler::new(
            Arc::new(store),
            self.config.canvas,
            self.config.animation,
        )?;

        self.sink.clear();
        self.sink.fill_background(Rgba::BLACK);
        let snapshot = self.sink.capture_frame();
        scheduler.start();

        self.playback = Some(Playback {
            scheduler,
            background: Background {
                generation,
                snapshot,
            },
        });
        info!(%model, %generation, "trajectory store installed");
        Ok(())
    }
}
