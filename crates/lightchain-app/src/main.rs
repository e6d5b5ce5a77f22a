use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use glam::Mat4;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lightchain_core::{ChainParams, ChainState, MotionType};
use lightchain_platform::{drive_frame, BallMesh, ChainBackend, Result};

mod headless;
use crate::headless::{FixedStep, JsonLinesBackend};

/// Drive a ball chain headlessly and write its positions as JSON lines.
#[derive(Debug, Parser)]
#[command(name = "lightchain", version)]
struct Cli {
    /// TOML chain config; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 120)]
    frames: u32,
    /// Frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    #[arg(short, long)]
    motion: Option<MotionType>,
    #[arg(long)]
    count: Option<u32>,
    #[arg(long)]
    seed: Option<u32>,
    #[arg(long)]
    speed: Option<f32>,
    #[arg(long)]
    interval: Option<f32>,
    /// Drive time from a timeline starting here instead of the chain clock.
    #[arg(long)]
    scrub: Option<f32>,
    /// Index count reported for the ball mesh in the draw arguments.
    #[arg(long, default_value_t = 240)]
    mesh_indices: u32,
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write the default config to this path and exit.
    #[arg(long)]
    write_default: Option<PathBuf>,
}

fn main() {
    // Init logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter("info")
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("lightchain error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.write_default {
        ChainParams::default().save(path)?;
        info!(path = %path.display(), "wrote default config");
        return Ok(());
    }

    let params = load_params(&cli)?;
    info!(
        motion = %params.motion_type,
        balls = params.ball_count,
        frames = cli.frames,
        "lightchain starting"
    );

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut backend = JsonLinesBackend::new(out);
    let mut time = match cli.scrub {
        Some(start) => FixedStep::timeline(start, cli.dt),
        None => FixedStep::new(cli.dt),
    };
    let mesh = BallMesh {
        index_count: cli.mesh_indices,
    };

    let mut state = ChainState::new(params);
    backend.init()?;
    for _ in 0..cli.frames {
        drive_frame(&mut state, &mut time, &mut backend, mesh, Mat4::IDENTITY)?;
    }
    backend.finish()?;
    info!(frames = backend.frames(), "wrote chain frames");
    Ok(())
}

fn load_params(cli: &Cli) -> Result<ChainParams> {
    let mut params = match &cli.config {
        Some(path) => ChainParams::load(path)?,
        None => ChainParams::default(),
    };
    if let Some(motion) = cli.motion {
        params.motion_type = motion;
    }
    if let Some(count) = cli.count {
        params.ball_count = count;
    }
    if let Some(seed) = cli.seed {
        params.motion.seed = seed;
    }
    if let Some(speed) = cli.speed {
        params.speed = speed;
    }
    if let Some(interval) = cli.interval {
        params.motion.interval = interval;
    }
    Ok(params.sanitized())
}
