mod config;
mod error;
mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sl_spring::SpringSolver;

use crate::config::{Overrides, SimulationConfig};
use crate::error::CliResult;
use crate::output::{Frame, OutputFormat, write_frames};

#[derive(Parser)]
#[command(name = "sl-cli")]
#[command(about = "springlane CLI - closed-form damped spring stepping", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a spring for a number of frames and print every frame
    Simulate(SimulateArgs),
    /// Print the derived constants and damping regime of a spring
    Constants(SpringArgs),
}

#[derive(Args, Debug)]
struct SpringArgs {
    /// Spring constant k
    #[arg(long)]
    stiffness: Option<f64>,
    /// Damping coefficient c
    #[arg(long)]
    damping: Option<f64>,
    /// Approximate settle time in seconds (use with --damping-ratio)
    #[arg(long)]
    response: Option<f64>,
    /// Damping ratio (use with --response)
    #[arg(long)]
    damping_ratio: Option<f64>,
    /// Only evaluate under-damped springs; other regimes return zero
    #[arg(long)]
    legacy: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// YAML simulation config; flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    spring: SpringArgs,
    /// Time step per frame
    #[arg(long)]
    dt: Option<f64>,
    /// Number of frames after the initial one
    #[arg(long)]
    steps: Option<usize>,
    /// Initial displacement, up to four comma separated lanes
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    x0: Option<Vec<f64>>,
    /// Initial velocity, up to four comma separated lanes
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    v0: Option<Vec<f64>>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => cmd_simulate(args),
        Commands::Constants(args) => cmd_constants(args),
    }
}

impl SpringArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            stiffness: self.stiffness,
            damping: self.damping,
            response: self.response,
            damping_ratio: self.damping_ratio,
            legacy: self.legacy,
            ..Default::default()
        }
    }
}

fn cmd_simulate(args: SimulateArgs) -> CliResult<()> {
    let base = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading simulation config");
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };

    let overrides = Overrides {
        dt: args.dt,
        steps: args.steps,
        x0: args.x0.clone(),
        v0: args.v0.clone(),
        ..args.spring.overrides()
    };
    let cfg = base.apply(&overrides)?;
    cfg.validate()?;

    let solver = SpringSolver::with_options(cfg.params, cfg.options);
    tracing::info!(
        stiffness = cfg.params.stiffness,
        damping = cfg.params.damping,
        regime = ?solver.regime(),
        dt = cfg.dt,
        steps = cfg.steps,
        "simulating spring"
    );

    let frames = solver
        .trajectory(cfg.initial, cfg.dt, cfg.steps)
        .map(Frame::from);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_frames(&mut out, args.format, frames)?;
    out.flush()?;
    Ok(())
}

fn cmd_constants(args: SpringArgs) -> CliResult<()> {
    let cfg = SimulationConfig::default().apply(&args.overrides())?;
    cfg.params.validate()?;

    let solver = SpringSolver::with_options(cfg.params, cfg.options);
    let c = solver.constants();

    println!("stiffness:     {}", cfg.params.stiffness);
    println!("damping:       {}", cfg.params.damping);
    println!("w0:            {}", c.w0);
    println!("damping ratio: {}", c.damping_ratio);
    println!("wD:            {}", c.wd);
    match solver.regime() {
        Some(regime) => println!("regime:        {regime}"),
        None => println!("regime:        skipped (under-damped only)"),
    }
    Ok(())
}
