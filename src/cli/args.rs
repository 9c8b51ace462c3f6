// CLASSIFICATION: COMMUNITY
// Filename: args.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::oracle::OracleKind;
use crate::report::ReportFormat;

/// Builds and returns the CLI argument parser for `ccregress`.
pub fn build_cli() -> Command {
    Command::new("ccregress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay recorded collision checks and report outcome drift")
        .arg(
            Arg::new("configs")
                .value_name("CONFIGS")
                .help("Comma-separated configuration table, one per line")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("expected")
                .value_name("EXPECTED")
                .help("Expected outcome table, one true/false per line")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("scene")
                .long("scene")
                .value_name("FILE")
                .help("Scene file (TOML or JSON) replacing the default obstacle rings")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("oracle")
                .long("oracle")
                .value_name("KIND")
                .help("Validity oracle: ball, replay or rapier")
                .value_parser(|s: &str| s.parse::<OracleKind>()),
        )
        .arg(
            Arg::new("ball-radius")
                .long("ball-radius")
                .value_name("R")
                .help("Radius of the ball robot")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("replay")
                .long("replay")
                .value_name("FILE")
                .help("Recorded outcome table answering for the replay oracle")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("timeout-ms")
                .long("timeout-ms")
                .value_name("MS")
                .help("Per-call oracle timeout in milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Report format: text or json")
                .value_parser(|s: &str| s.parse::<ReportFormat>()),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the report here instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Harness configuration file (TOML)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

/// Parsed invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub configs: PathBuf,
    pub expected: PathBuf,
    pub scene: Option<PathBuf>,
    pub oracle: Option<OracleKind>,
    pub ball_radius: Option<f64>,
    pub replay: Option<PathBuf>,
    pub timeout_ms: Option<u64>,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl Invocation {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            configs: m.get_one::<PathBuf>("configs").cloned().unwrap_or_default(),
            expected: m.get_one::<PathBuf>("expected").cloned().unwrap_or_default(),
            scene: m.get_one::<PathBuf>("scene").cloned(),
            oracle: m.get_one::<OracleKind>("oracle").copied(),
            ball_radius: m.get_one::<f64>("ball-radius").copied(),
            replay: m.get_one::<PathBuf>("replay").cloned(),
            timeout_ms: m.get_one::<u64>("timeout-ms").copied(),
            format: m.get_one::<ReportFormat>("format").copied(),
            output: m.get_one::<PathBuf>("output").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            verbose: m.get_flag("verbose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_tables_and_flags() {
        let m = build_cli()
            .try_get_matches_from([
                "ccregress",
                "cfgs.csv",
                "valid.csv",
                "--oracle",
                "replay",
                "--replay",
                "run2.csv",
                "--format",
                "json",
                "-v",
            ])
            .unwrap();
        let inv = Invocation::from_matches(&m);
        assert_eq!(inv.configs, PathBuf::from("cfgs.csv"));
        assert_eq!(inv.oracle, Some(OracleKind::Replay));
        assert_eq!(inv.format, Some(ReportFormat::Json));
        assert!(inv.verbose);
        assert_eq!(inv.scene, None);
    }

    #[test]
    fn missing_expected_table_is_an_error() {
        assert!(build_cli()
            .try_get_matches_from(["ccregress", "cfgs.csv"])
            .is_err());
    }

    #[test]
    fn bad_oracle_name_is_an_error() {
        assert!(build_cli()
            .try_get_matches_from(["ccregress", "a", "b", "--oracle", "vamp"])
            .is_err());
    }
}
