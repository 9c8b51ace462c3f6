// CLASSIFICATION: COMMUNITY
// Filename: recorder.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use ccregress::{Configuration, Environment, ValidityOracle};
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Box that encloses both obstacle rings of the default scene.
pub const DEFAULT_BOUNDS: [[f64; 2]; 3] = [[-0.8, 0.8], [-0.8, 0.8], [0.0, 1.1]];

pub const DEFAULT_SEED: u64 = 2707;

/// One recorded (configuration, outcome) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub configuration: Configuration,
    pub valid: bool,
}

pub struct CorpusRecorder {
    bounds: Vec<[f64; 2]>,
    rng: ChaCha20Rng,
}

impl CorpusRecorder {
    pub fn new(bounds: Vec<[f64; 2]>, seed: u64) -> Result<Self> {
        for (axis, [lo, hi]) in bounds.iter().enumerate() {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                bail!("axis {axis}: invalid bounds [{lo}, {hi}]");
            }
        }
        Ok(Self {
            bounds,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    /// Draw `count` configurations and label each with `oracle`.
    pub fn record<O>(&mut self, count: usize, oracle: &O, env: &Environment) -> Result<Vec<Sample>>
    where
        O: ValidityOracle + ?Sized,
    {
        let Self { bounds, rng } = self;
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let values: Vec<f64> = bounds.iter().map(|&[lo, hi]| rng.gen_range(lo..hi)).collect();
            let configuration = Configuration::new(values);
            let valid = oracle
                .validate(&configuration, env)
                .with_context(|| format!("oracle failed on sample {i}"))?;
            out.push(Sample {
                configuration,
                valid,
            });
        }
        Ok(out)
    }

    /// Invert roughly `rate` of the recorded outcomes; returns the flipped indices.
    pub fn flip(&mut self, samples: &mut [Sample], rate: f64) -> Vec<usize> {
        let mut flipped = Vec::new();
        if rate <= 0.0 {
            return flipped;
        }
        let rate = rate.min(1.0);
        for (i, sample) in samples.iter_mut().enumerate() {
            if self.rng.gen_bool(rate) {
                sample.valid = !sample.valid;
                flipped.push(i);
            }
        }
        info!("flipped {} of {} outcomes: {:?}", flipped.len(), samples.len(), flipped);
        flipped
    }
}

/// Write `samples` as a configuration table and a parallel outcome table.
pub fn write_corpus(samples: &[Sample], configs_path: &Path, outcomes_path: &Path) -> Result<()> {
    let mut cfg_file = BufWriter::new(
        File::create(configs_path)
            .with_context(|| format!("create {}", configs_path.display()))?,
    );
    let mut result_file = BufWriter::new(
        File::create(outcomes_path)
            .with_context(|| format!("create {}", outcomes_path.display()))?,
    );
    for sample in samples {
        let line: Vec<String> = sample.configuration.iter().map(|v| v.to_string()).collect();
        writeln!(cfg_file, "{}", line.join(","))?;
        writeln!(result_file, "{}", sample.valid)?;
    }
    cfg_file.flush()?;
    result_file.flush()?;
    Ok(())
}
