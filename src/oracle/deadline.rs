// CLASSIFICATION: COMMUNITY
// Filename: deadline.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::warn;

use super::{OracleError, ValidityOracle};
use crate::dataset::Configuration;
use crate::env::Environment;

/// Per-call timeout for slow or remote oracles.
///
/// Each query runs on its own worker thread. When the deadline passes the
/// query is reported as [`OracleError::Timeout`] and the worker is left to
/// finish on its own; its late answer is discarded.
///
/// An abandoned worker keeps running until the inner oracle returns, so a
/// hung backend leaks one thread per timeout. The runner stops at the first
/// failure, which bounds this to one thread per run.
pub struct Deadline<O> {
    inner: Arc<O>,
    timeout: Duration,
}

impl<O> Deadline<O> {
    pub fn new(inner: O, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<O> ValidityOracle for Deadline<O>
where
    O: ValidityOracle + Send + Sync + 'static,
{
    fn validate(
        &self,
        configuration: &Configuration,
        environment: &Environment,
    ) -> Result<bool, OracleError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let configuration = configuration.clone();
        let environment = environment.clone();
        thread::Builder::new()
            .name("oracle-call".into())
            .spawn(move || {
                let _ = tx.send(inner.validate(&configuration, &environment));
            })
            .map_err(|e| OracleError::Backend(format!("spawn oracle worker: {e}")))?;

        match rx.recv_timeout(self.timeout) {
            Ok(answer) => answer,
            Err(RecvTimeoutError::Timeout) => {
                warn!("oracle call exceeded {:?}", self.timeout);
                Err(OracleError::Timeout(self.timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(OracleError::Disconnected),
        }
    }
}
