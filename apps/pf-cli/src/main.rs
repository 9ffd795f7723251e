use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pf_app::{AppResult, SimConfig, SimulationContext, load_config};
use pf_core::timing::Timer;
use pf_models::{ModelRegistry, SamplingPolicy, Tier};
use pf_render::RecordingSink;
use pf_sim::{Termination, integrate};
use tracing::info;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PhaseFlow CLI - phase-plane trajectory precomputation and playback", long_about = None)]
struct Cli {
    /// Optional YAML or JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered models
    Models,
    /// Run one integration pass and print store statistics
    Integrate {
        /// Model name (e.g. lotka, vanDerPol)
        model: String,
        /// Override the lattice resolution per axis
        #[arg(long)]
        grid: Option<usize>,
        /// Override the nominal trajectory length
        #[arg(long)]
        steps: Option<usize>,
        /// Override where initial conditions are sampled
        #[arg(long, value_enum)]
        sampling: Option<SamplingArg>,
        /// Print every trajectory, not just the summary
        #[arg(long)]
        verbose: bool,
    },
    /// Drive the frame scheduler headlessly against a recording sink
    Animate {
        /// Model name
        model: String,
        /// Number of frames to advance
        #[arg(long, default_value_t = 10)]
        frames: u64,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum SamplingArg {
    Inherited,
    DisplayBox,
}

impl From<SamplingArg> for SamplingPolicy {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Inherited => SamplingPolicy::Inherited,
            SamplingArg::DisplayBox => SamplingPolicy::DisplayBox,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Integrate {
            model,
            grid,
            steps,
            sampling,
            verbose,
        } => {
            let mut config = config;
            if let Some(grid) = grid {
                config.integration.grid_size = grid;
            }
            if let Some(steps) = steps {
                config.integration.step_count = steps;
            }
            if let Some(sampling) = sampling {
                config.integration.sampling = sampling.into();
            }
            cmd_integrate(&config, &model, verbose)
        }
        Commands::Animate { model, frames } => cmd_animate(config, &model, frames),
        Commands::Config => cmd_config(&config),
    }
}

fn resolve_config(path: Option<&Path>) -> AppResult<SimConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            load_config(path)
        }
        None => Ok(SimConfig::default()),
    }
}

fn cmd_models() -> AppResult<()> {
    let registry = ModelRegistry::builtin()?;
    println!("{} models:", Tier::Planar);
    for model in registry.iter() {
        let b = model.display_box();
        let forced = if model.field().is_forced() {
            " (forced)"
        } else {
            ""
        };
        println!(
            "  {:<18} x [{}, {}]  y [{}, {}]{}",
            model.name(),
            b.x_min(),
            b.x_max(),
            b.y_min(),
            b.y_max(),
            forced
        );
    }
    println!("{} models:", Tier::Spatial);
    for name in pf_models::SPATIAL_MODELS {
        println!("  {} (selection only)", name);
    }
    Ok(())
}

fn cmd_integrate(config: &SimConfig, model_name: &str, verbose: bool) -> AppResult<()> {
    config.validate()?;
    let registry = ModelRegistry::builtin()?;
    let model = registry.lookup(model_name)?;
    let opts = &config.integration;

    println!("Integrating model: {}", model.name());
    println!(
        "  dt = {}, steps = {}, grid = {}x{}",
        opts.dt, opts.step_count, opts.grid_size, opts.grid_size
    );

    let timer = Timer::start("cli-integrate");
    let store = integrate(model, opts, pf_core::Generation::FIRST)?;
    let elapsed = timer.elapsed_s();

    let stats = store.stats();
    println!("✓ Integration completed in {:.3} s", elapsed);
    println!("  Trajectories: {}", stats.trajectories);
    println!("  Truncated: {}", stats.truncated);
    println!(
        "  Samples: {} total, {}..={} per trajectory",
        stats.total_samples, stats.min_len, stats.max_len
    );

    if verbose {
        for (i, traj) in store.trajectories().iter().enumerate() {
            let start = traj.initial();
            let end = match traj.termination() {
                Termination::Completed => "completed".to_string(),
                Termination::Truncated { step } => format!("truncated at step {}", step),
            };
            println!(
                "  [{:>4}] ({:>8.3}, {:>8.3})  {} samples, {}",
                i,
                start.x,
                start.y,
                traj.len(),
                end
            );
        }
    }
    Ok(())
}

fn cmd_animate(config: SimConfig, model_name: &str, frames: u64) -> AppResult<()> {
    let registry = Arc::new(ModelRegistry::builtin()?);
    let mut config = config;
    config.initial_model = model_name.to_string();
    config.tier = Tier::Planar;

    let mut ctx = SimulationContext::new(config, registry, RecordingSink::new())?;
    println!("Animating model: {}", ctx.planar_model());

    for _ in 0..frames {
        let Some(report) = ctx.advance_frame()? else {
            break;
        };
        println!(
            "  frame {:>6}  gen {}  {} polylines, {} vertices",
            report.frame, report.generation, report.polylines, report.vertices
        );
        ctx.sink_mut().take_ops();
    }
    println!(
        "✓ {} frames, simulated t = {:.3}",
        ctx.frame_count(),
        ctx.simulation_time()
    );
    Ok(())
}

fn cmd_config(config: &SimConfig) -> AppResult<()> {
    print!("{}", config.to_yaml_string()?);
    Ok(())
}
