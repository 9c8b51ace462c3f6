// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Mismatch report sinks.

use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::runner::MismatchRecord;

/// Output encoding for mismatch records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `q=[...], expected=..., actual=...` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format '{other}' (expected text or json)")),
        }
    }
}

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub checked: usize,
    pub mismatches: usize,
}

/// Writes mismatch records as they arrive.
pub struct ReportWriter<W: Write> {
    out: W,
    format: ReportFormat,
    written: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    pub fn emit(&mut self, record: &MismatchRecord) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(
                self.out,
                "[{}] q={}, expected={}, actual={}",
                record.index, record.configuration, record.expected, record.actual
            )?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Records emitted so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
