//! Driver tooling for trapkit fixtures.
//!
//! This crate provides:
//! - Fixture specs: which executable to run and which trap it should hit
//! - Runner: spawn fixtures one at a time and decode their exit status
//! - Verification summary + conformance report (markdown and JSON)
//! - Structured JSONL logging for each fixture run

#![forbid(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{Expectation, FixtureManifest, FixtureSpec};
pub use report::ConformanceReport;
pub use runner::FixtureRunner;
pub use verify::{VerificationResult, VerificationSummary};
