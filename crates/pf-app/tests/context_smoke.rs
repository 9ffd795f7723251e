use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use pf_app::{AppError, SimConfig, SimulationContext};
use pf_core::{BoundingBox, Real};
use pf_models::{Model, ModelRegistry, PhaseState, Tier, VectorField};
use pf_render::{AnimationOptions, RecordingSink, Rgba, SinkOp};
use pf_sim::IntegrationOptions;
use proptest::prelude::*;

fn small_config() -> SimConfig {
    SimConfig {
        integration: IntegrationOptions {
            step_count: 60,
            grid_size: 3,
            ..Default::default()
        },
        animation: AnimationOptions {
            window_size: 10,
            stride: 2,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn context() -> SimulationContext<RecordingSink> {
    let registry = Arc::new(ModelRegistry::builtin().unwrap());
    SimulationContext::new(small_config(), registry, RecordingSink::new()).unwrap()
}

#[test]
fn unknown_model_leaves_state_untouched() {
    let mut ctx = context();
    ctx.advance_frame().unwrap();
    ctx.advance_frame().unwrap();
    let before = Arc::clone(ctx.store().unwrap());

    let err = ctx.select_model("duffing").unwrap_err();
    assert!(err.is_unknown_model());
    assert_eq!(ctx.planar_model(), "lotka");
    assert!(Arc::ptr_eq(ctx.store().unwrap(), &before));
    assert_eq!(ctx.frame_count(), 2);
    assert!(ctx.is_running());
}

#[test]
fn unknown_spatial_model_is_rejected() {
    let mut ctx = context();
    assert!(ctx.select_spatial_model("rossler").unwrap_err().is_unknown_model());
    assert_eq!(ctx.spatial_model(), "lorenz");
    ctx.select_spatial_model("lorenz").unwrap();
}

#[test]
fn reset_recomputes_identical_samples() {
    let mut ctx = context();
    for _ in 0..5 {
        ctx.advance_frame().unwrap();
    }
    let before = Arc::clone(ctx.store().unwrap());

    ctx.reset().unwrap();
    let after = Arc::clone(ctx.store().unwrap());
    assert!(after.same_samples(&before));
    assert!(after.generation() > before.generation());
    assert_eq!(ctx.frame_count(), 0);
    assert_eq!(ctx.simulation_time(), 0.0);

    ctx.reset().unwrap();
    assert!(ctx.store().unwrap().same_samples(&before));
}

#[test]
fn model_switch_installs_new_store_and_background() {
    let mut ctx = context();
    ctx.advance_frame().unwrap();
    ctx.sink_mut().take_ops();

    ctx.select_model("vanDerPol").unwrap();
    assert_eq!(ctx.planar_model(), "vanDerPol");
    assert_eq!(ctx.store().unwrap().model(), "vanDerPol");
    assert_eq!(ctx.frame_count(), 0);

    let ops = ctx.sink().ops();
    assert_eq!(ops[0], SinkOp::Clear);
    assert_eq!(ops[1], SinkOp::FillBackground(Rgba::BLACK));
    assert!(matches!(ops[2], SinkOp::Capture(_)));
}

#[test]
fn frame_replay_matches_report() {
    let mut ctx = context();
    ctx.sink_mut().take_ops();

    let report = ctx.advance_frame().unwrap().unwrap();
    assert_eq!(report.frame, 1);
    assert_eq!(report.generation, ctx.store().unwrap().generation());
    assert_eq!(report.polylines, ctx.store().unwrap().len());
    assert_eq!(ctx.sink().stroke_count(), report.polylines);
    assert_eq!(ctx.sink().vertex_count(), report.vertices);

    let ops = ctx.sink().ops();
    assert!(matches!(ops[0], SinkOp::Restore(_)));
    assert_eq!(ops[1], SinkOp::FillBackground(Rgba::BLACK.with_alpha(0.05)));
}

#[test]
fn spatial_tier_keeps_planar_selection() {
    let mut ctx = context();
    ctx.select_model("relay").unwrap();
    ctx.select_tier(Tier::Spatial).unwrap();
    assert!(!ctx.is_running());
    assert_eq!(ctx.frame_count(), 0);
    assert!(ctx.advance_frame().unwrap().is_none());

    ctx.select_tier(Tier::Planar).unwrap();
    assert_eq!(ctx.store().unwrap().model(), "relay");
    assert!(ctx.is_running());
}

#[test]
fn newer_request_supersedes_older() {
    let mut ctx = context();
    let first = ctx.request_model("brusselator").unwrap();
    let second = ctx.request_model("oregonator").unwrap();
    assert!(second > first);
    assert_eq!(ctx.pending_ticket(), Some(second));

    // Old store keeps playing until the result is installed.
    assert_eq!(ctx.store().unwrap().model(), "lotka");

    assert!(ctx.wait_pending().unwrap());
    assert_eq!(ctx.pending_ticket(), None);
    assert_eq!(ctx.planar_model(), "oregonator");
    assert_eq!(ctx.store().unwrap().generation(), second);

    let report = ctx.advance_frame().unwrap().unwrap();
    assert_eq!(report.generation, second);
}

/// Spiral sink that counts its evaluations.
#[derive(Debug)]
struct Counting(Arc<AtomicUsize>);

impl VectorField for Counting {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        self.0.fetch_add(1, Ordering::Relaxed);
        PhaseState::planar(-s.y() - 0.1 * s.x(), s.x() - 0.1 * s.y())
    }
}

#[test]
fn superseded_request_stops_integrating() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = ModelRegistry::builtin().unwrap();
    let bbox = BoundingBox::new(-1.0, 1.0, -1.0, 1.0).unwrap();
    registry
        .register(Model::new("counting", Counting(Arc::clone(&calls)), bbox))
        .unwrap();

    let config = SimConfig {
        integration: IntegrationOptions {
            step_count: 50_000,
            grid_size: 6,
            ..Default::default()
        },
        ..small_config()
    };
    let full_pass = 36 * (config.integration.step_count - 1);
    let mut ctx = SimulationContext::new(config, Arc::new(registry), RecordingSink::new()).unwrap();

    ctx.request_model("counting").unwrap();
    let latest = ctx.request_model("lotka").unwrap();
    assert!(ctx.wait_pending().unwrap());
    assert_eq!(ctx.store().unwrap().generation(), latest);

    thread::sleep(Duration::from_millis(50));
    let settled = calls.load(Ordering::Relaxed);
    thread::sleep(Duration::from_millis(100));
    assert_eq!(calls.load(Ordering::Relaxed), settled);
    assert!(settled < full_pass);
}

#[test]
fn selection_cancels_pending_request() {
    let mut ctx = context();
    ctx.request_model("brusselator").unwrap();
    ctx.select_model("spiral").unwrap();
    assert_eq!(ctx.pending_ticket(), None);
    assert!(!ctx.wait_pending().unwrap());
    assert_eq!(ctx.store().unwrap().model(), "spiral");
}

#[test]
fn unknown_request_is_rejected_synchronously() {
    let mut ctx = context();
    let err = ctx.request_model("duffing").unwrap_err();
    assert!(matches!(err, AppError::Model(_)));
    assert_eq!(ctx.pending_ticket(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn store_always_matches_selection(picks in proptest::collection::vec(0usize..12, 1..5)) {
        let mut ctx = context();
        let names: Vec<String> = ctx.registry().names().map(str::to_string).collect();
        for pick in picks {
            ctx.select_model(&names[pick]).unwrap();
            ctx.advance_frame().unwrap();
            prop_assert_eq!(ctx.store().unwrap().model(), ctx.planar_model());
            prop_assert_eq!(ctx.frame_count(), 1);
        }
    }
}
