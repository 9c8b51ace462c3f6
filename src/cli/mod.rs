// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! CLI module for `ccregress`. Exports the argument parser and main entry.

pub mod args;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context};
use log::info;

use crate::cli::args::{build_cli, Invocation};
use crate::config::HarnessConfig;
use crate::dataset::{load_configurations, load_expected_outcomes};
use crate::env::{build_default_environment, Environment};
use crate::oracle::{BallRobot, Deadline, OracleKind, ReplayOracle, ValidityOracle};
use crate::report::{ReportWriter, RunSummary};
use crate::runner;

/// Entry point for the CLI. Parses arguments, loads the corpus and streams the report.
pub fn run() -> anyhow::Result<RunSummary> {
    let matches = build_cli().get_matches();
    let invocation = Invocation::from_matches(&matches);
    init_logging(invocation.verbose);
    execute(&invocation)
}

/// Initialise `env_logger`; `RUST_LOG` still wins over the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.as_str()),
    );
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

/// Run one comparison pass for an already parsed invocation.
pub fn execute(invocation: &Invocation) -> anyhow::Result<RunSummary> {
    let config = resolve_config(invocation)?;

    let configs = load_configurations(&invocation.configs)?;
    let expected = load_expected_outcomes(&invocation.expected)?;
    let environment = match &config.scene {
        Some(path) => Environment::from_scene_file(path)?,
        None => build_default_environment(),
    };
    let oracle = build_oracle(&config)?;
    info!(
        "checking {} records against {} obstacles with {:?} oracle",
        configs.len(),
        environment.len(),
        config.oracle
    );

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create report {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut report = ReportWriter::new(sink, config.format);

    let mut mismatches = runner::run(&configs, &expected, &environment, oracle.as_ref())?;
    for record in mismatches.by_ref() {
        report.emit(&record?).context("write report")?;
    }
    let summary = RunSummary {
        checked: mismatches.checked(),
        mismatches: report.written(),
    };
    report.finish().context("flush report")?;
    info!(
        "checked {} records, {} mismatches",
        summary.checked, summary.mismatches
    );
    eprintln!(
        "ccregress: checked {} records, {} mismatches",
        summary.checked, summary.mismatches
    );
    Ok(summary)
}

fn resolve_config(invocation: &Invocation) -> anyhow::Result<HarnessConfig> {
    let mut config = HarnessConfig::load(invocation.config.as_deref())?;
    if let Some(oracle) = invocation.oracle {
        config.oracle = oracle;
    }
    if let Some(radius) = invocation.ball_radius {
        config.ball_radius = radius;
    }
    if let Some(scene) = &invocation.scene {
        config.scene = Some(scene.clone());
    }
    if let Some(replay) = &invocation.replay {
        config.replay = Some(replay.clone());
    }
    if let Some(ms) = invocation.timeout_ms {
        config.timeout_ms = Some(ms);
    }
    if let Some(format) = invocation.format {
        config.format = format;
    }
    if let Some(output) = &invocation.output {
        config.output = Some(output.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Instantiate the configured oracle, wrapped in a [`Deadline`] when a timeout is set.
pub fn build_oracle(config: &HarnessConfig) -> anyhow::Result<Box<dyn ValidityOracle>> {
    match config.oracle {
        OracleKind::Ball => Ok(with_deadline(BallRobot::new(config.ball_radius), config)),
        OracleKind::Replay => {
            let Some(path) = &config.replay else {
                bail!("replay oracle needs --replay");
            };
            Ok(with_deadline(ReplayOracle::from_path(path)?, config))
        }
        #[cfg(feature = "rapier")]
        OracleKind::Rapier => Ok(with_deadline(
            crate::oracle::RapierBallRobot::new(config.ball_radius),
            config,
        )),
        #[cfg(not(feature = "rapier"))]
        OracleKind::Rapier => bail!("rapier oracle requires building with --features rapier"),
    }
}

fn with_deadline<O>(oracle: O, config: &HarnessConfig) -> Box<dyn ValidityOracle>
where
    O: ValidityOracle + Send + Sync + 'static,
{
    match config.timeout() {
        Some(timeout) => Box::new(Deadline::new(oracle, timeout)),
        None => Box::new(oracle),
    }
}
