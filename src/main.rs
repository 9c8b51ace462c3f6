// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Entry point for the `ccregress` binary.

use ccregress::cli;

fn main() {
    // Mismatches are findings, not failures: only fatal errors exit non-zero.
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
