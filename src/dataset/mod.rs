// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Paired dataset ingestion.
//!
//! A corpus is two flat text tables read in file order: one comma-separated
//! configuration per line, and one boolean per line. Line order is the
//! pairing key, so nothing here reorders or deduplicates records.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Deref;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{HarnessError, Result};

/// One joint-space sample, passed to the oracle exactly as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Vec<f64>);

impl Configuration {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Configuration {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Configuration {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Configuration {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Load the configuration table at `path`.
pub fn load_configurations(path: impl AsRef<Path>) -> Result<Vec<Configuration>> {
    let path = path.as_ref();
    let reader = open(path)?;
    let configs = parse_configurations(reader, &path.display().to_string())?;
    debug!("loaded {} configurations from {}", configs.len(), path.display());
    Ok(configs)
}

/// Load the expected-outcome table at `path`.
pub fn load_expected_outcomes(path: impl AsRef<Path>) -> Result<Vec<bool>> {
    let path = path.as_ref();
    let reader = open(path)?;
    let outcomes = parse_expected_outcomes(reader, &path.display().to_string())?;
    debug!("loaded {} expected outcomes from {}", outcomes.len(), path.display());
    Ok(outcomes)
}

/// Parse a configuration table. `origin` names the source in errors.
///
/// Blank lines are skipped. Fields are trimmed and may use fixed-point or
/// exponent notation; any unparsable or empty field fails the whole table.
pub fn parse_configurations<R: BufRead>(reader: R, origin: &str) -> Result<Vec<Configuration>> {
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| HarnessError::Io {
            path: origin.into(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut values = Vec::new();
        for (col, token) in trimmed.split(',').enumerate() {
            let token = token.trim();
            let value = token.parse::<f64>().map_err(|err| HarnessError::MalformedInput {
                origin: origin.to_owned(),
                line: idx + 1,
                field: Some(col + 1),
                token: token.to_owned(),
                reason: if token.is_empty() {
                    "empty field".to_owned()
                } else {
                    err.to_string()
                },
            })?;
            values.push(value);
        }
        out.push(Configuration(values));
    }
    Ok(out)
}

/// Parse an expected-outcome table. `origin` names the source in errors.
pub fn parse_expected_outcomes<R: BufRead>(reader: R, origin: &str) -> Result<Vec<bool>> {
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| HarnessError::Io {
            path: origin.into(),
            source,
        })?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let value = parse_bool(token).ok_or_else(|| HarnessError::MalformedInput {
            origin: origin.to_owned(),
            line: idx + 1,
            field: None,
            token: token.to_owned(),
            reason: "expected true or false".to_owned(),
        })?;
        out.push(value);
    }
    Ok(out)
}

/// Accepts `true`/`false` in any case, and `1`/`0`.
pub fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") || token == "1" {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") || token == "0" {
        Some(false)
    } else {
        None
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_and_exponent_fields() {
        let text = "0.5,-1e-3, 2.5E2\n\n1,2,3\n";
        let cfgs = parse_configurations(text.as_bytes(), "mem").unwrap();
        assert_eq!(cfgs.len(), 2);
        assert_eq!(cfgs[0].values(), &[0.5, -0.001, 250.0]);
        assert_eq!(cfgs[1].values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn preserves_text_values_exactly() {
        let text = "0.1234567,-2.9671,1.8326\n";
        let cfgs = parse_configurations(text.as_bytes(), "mem").unwrap();
        assert_eq!(cfgs[0][0], "0.1234567".parse::<f64>().unwrap());
        assert_eq!(cfgs[0][1], -2.9671);
    }

    #[test]
    fn bad_field_reports_line_and_column() {
        let text = "0,0,0\n0.1,abc,0.2\n";
        match parse_configurations(text.as_bytes(), "cfgs.csv") {
            Err(HarnessError::MalformedInput {
                origin,
                line,
                field,
                token,
                ..
            }) => {
                assert_eq!(origin, "cfgs.csv");
                assert_eq!(line, 2);
                assert_eq!(field, Some(2));
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn trailing_comma_is_an_empty_field() {
        let err = parse_configurations("1,2,\n".as_bytes(), "mem").unwrap_err();
        assert!(err.to_string().contains("empty field"), "{err}");
    }

    #[test]
    fn boolean_tokens() {
        let text = "true\nFalse\n\nTRUE\n1\n0\n";
        let out = parse_expected_outcomes(text.as_bytes(), "mem").unwrap();
        assert_eq!(out, vec![true, false, true, true, false]);
    }

    #[test]
    fn bad_boolean_reports_line() {
        let err = parse_expected_outcomes("true\nmaybe\n".as_bytes(), "valid.csv").unwrap_err();
        match err {
            HarnessError::MalformedInput { line, field, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn display_lists_values() {
        let cfg = Configuration::from([0.5, -1.0]);
        assert_eq!(cfg.to_string(), "[0.5, -1]");
    }
}
