//! # Trail Replay
//!
//! Runs a scripted pointer session through the particle trail and logs
//! what happened.
//!
//! ```text
//! trail_replay --frames 900 --seed 42
//! RUST_LOG=debug trail_replay --config trail.toml --resize-at 300
//! ```

use std::path::PathBuf;

use afterglow::{run, ReplayOptions};
use afterglow::fx::{Rect, TrailConfig};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "trail_replay")]
#[command(about = "Replay a scripted pointer session through the particle trail")]
struct Args {
    /// TOML trail config (defaults reproduce the portfolio page)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Frame callbacks to deliver
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Frames during which the pointer keeps moving
    #[arg(long, default_value_t = 300)]
    move_frames: u64,

    /// Surface width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Halve the viewport at this frame
    #[arg(long, value_name = "FRAME")]
    resize_at: Option<u64>,

    /// RNG seed (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tilt a photo frame centered in the viewport
    #[arg(long)]
    tilt: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TrailConfig::from_file(path)
            .with_context(|| format!("loading trail config from {}", path.display()))?,
        None => TrailConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let options = ReplayOptions {
        frames: args.frames,
        move_frames: args.move_frames,
        width: args.width,
        height: args.height,
        resize_at: args
            .resize_at
            .map(|frame| (frame, args.width / 2, args.height / 2)),
        tilt_frame: args.tilt.then(|| {
            let side = args.width.min(args.height) as f32 * 0.5;
            Rect::new(
                (args.width as f32 - side) * 0.5,
                (args.height as f32 - side) * 0.5,
                side,
                side,
            )
        }),
    };

    tracing::info!(
        frames = options.frames,
        move_frames = options.move_frames,
        seed = ?config.seed,
        "starting replay"
    );
    let report = run(config, &options);
    tracing::info!(
        frames = report.frames,
        peak = report.peak_particles,
        alive = report.final_particles,
        spawned = report.stats.spawned,
        culled = report.stats.culled,
        upload_bytes = report.last_frame_bytes,
        "replay finished"
    );
    if let Some(tilt) = report.final_tilt {
        tracing::info!(transform = %tilt, "final photo tilt");
    }

    Ok(())
}
