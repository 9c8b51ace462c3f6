// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Harness configuration.
//!
//! Layers, lowest first: built-in defaults, an optional TOML file, then
//! `CCREGRESS_*` environment variables. Command-line flags are applied on
//! top by the CLI.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::oracle::{BallRobot, OracleKind};
use crate::report::ReportFormat;
use crate::{HarnessError, Result};

/// Names a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CCREGRESS_CONFIG";
pub const ORACLE_ENV: &str = "CCREGRESS_ORACLE";
pub const TIMEOUT_ENV: &str = "CCREGRESS_TIMEOUT_MS";
pub const FORMAT_ENV: &str = "CCREGRESS_FORMAT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub oracle: OracleKind,
    pub ball_radius: f64,
    /// Alternate scene; the default two-ring catalog when unset.
    pub scene: Option<PathBuf>,
    /// Recorded outcome table answering for the `replay` oracle.
    pub replay: Option<PathBuf>,
    pub timeout_ms: Option<u64>,
    pub format: ReportFormat,
    /// Report destination; stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            oracle: OracleKind::Ball,
            ball_radius: BallRobot::DEFAULT_RADIUS,
            scene: None,
            replay: None,
            timeout_ms: None,
            format: ReportFormat::Text,
            output: None,
        }
    }
}

impl HarnessConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| HarnessError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text)
            .map_err(|e| HarnessError::Config(format!("{}: {e}", path.display())))
    }

    /// Defaults, then `file` (or the file named by `CCREGRESS_CONFIG`), then
    /// environment overrides.
    ///
    /// Not validated: command-line flags may still complete the config, so
    /// callers run [`HarnessConfig::validate`] once every layer is applied.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let from_env = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut cfg = match file.or(from_env.as_deref()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        cfg.apply_env()?;
        Ok(cfg)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(oracle) = env_value::<OracleKind>(ORACLE_ENV)? {
            self.oracle = oracle;
        }
        if let Some(ms) = env_value::<u64>(TIMEOUT_ENV)? {
            self.timeout_ms = Some(ms);
        }
        if let Some(format) = env_value::<ReportFormat>(FORMAT_ENV)? {
            self.format = format;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.ball_radius.is_finite() || self.ball_radius < 0.0 {
            return Err(HarnessError::Config(format!(
                "ball_radius must be a non-negative number, got {}",
                self.ball_radius
            )));
        }
        if self.timeout_ms == Some(0) {
            return Err(HarnessError::Config("timeout_ms must be > 0".into()));
        }
        if self.oracle == OracleKind::Replay && self.replay.is_none() {
            return Err(HarnessError::Config(
                "replay oracle needs a recorded outcome table".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn env_value<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<T>()
                    .map(Some)
                    .map_err(|err| HarnessError::Config(format!("invalid {key} '{trimmed}': {err}")))
            }
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(HarnessError::Config(format!("failed to read {key}: {err}"))),
    }
}
