// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::PathBuf;

use anyhow::Result;
use ccregress::oracle::BallRobot;
use ccregress::{build_default_environment, Environment};
use clap::Parser;
use corpus_gen::recorder::{write_corpus, CorpusRecorder, DEFAULT_BOUNDS, DEFAULT_SEED};

/// Record a paired (configuration, outcome) corpus for ccregress.
#[derive(Parser)]
struct Args {
    /// Number of configurations to draw.
    #[clap(long, default_value_t = 100_000)]
    count: usize,
    #[clap(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Scene file; the default two-ring scene when omitted.
    #[clap(long)]
    scene: Option<PathBuf>,
    #[clap(long, default_value_t = BallRobot::DEFAULT_RADIUS)]
    ball_radius: f64,
    /// Fraction of outcomes to invert on purpose.
    #[clap(long, default_value_t = 0.0)]
    flip_rate: f64,
    #[clap(long, default_value = "cfgs.csv")]
    configs: PathBuf,
    #[clap(long, default_value = "valid.csv")]
    outcomes: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    let args = Args::parse();
    let env = match &args.scene {
        Some(path) => Environment::from_scene_file(path)?,
        None => build_default_environment(),
    };
    let mut recorder = CorpusRecorder::new(DEFAULT_BOUNDS.to_vec(), args.seed)?;
    let mut samples = recorder.record(args.count, &BallRobot::new(args.ball_radius), &env)?;
    recorder.flip(&mut samples, args.flip_rate);
    write_corpus(&samples, &args.configs, &args.outcomes)?;
    println!(
        "Wrote {} and {} ({} samples)",
        args.configs.display(),
        args.outcomes.display(),
        samples.len()
    );
    Ok(())
}
