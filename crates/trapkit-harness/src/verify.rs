//! Per-fixture results and their aggregate.

use serde::{Deserialize, Serialize};

use crate::fixtures::Expectation;

/// Result of running a single fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Fixture name.
    pub fixture: String,
    /// Executable that was run.
    pub path: String,
    /// Expected outcome.
    pub expected: Expectation,
    /// Decoded verdict (`good_trap`, `bad_trap`, `aborted`, ...).
    pub verdict: String,
    /// Human-readable verdict line.
    pub detail: String,
    /// Raw exit code, if the process exited.
    pub exit_code: Option<i32>,
    /// Terminating signal, if the process was killed.
    pub signal: Option<i32>,
    /// Whether the verdict matched the expectation.
    pub passed: bool,
    /// Wall-clock run time.
    pub duration_ms: u64,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total fixtures run.
    pub total: usize,
    /// Fixtures whose verdict matched.
    pub passed: usize,
    /// Fixtures whose verdict did not match.
    pub failed: usize,
    /// Individual results, in run order.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all fixtures matched their expectation.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
