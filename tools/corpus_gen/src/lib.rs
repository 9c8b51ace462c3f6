// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Records paired corpora for `ccregress`.

pub mod recorder;
