//! Decoding a finished fixture process into a pass/fail verdict.
//!
//! Exit status 0 is the only passing outcome. Status 1 and `SIGABRT` are the
//! two channels a failed check uses. Anything else means the fixture did not
//! complete normally.

use std::fmt;
use std::process::ExitStatus;

use crate::check::TrapCode;

/// Outcome of one fixture process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Exit status 0.
    GoodTrap,
    /// Exit status 1.
    BadTrap,
    /// Killed by `SIGABRT`.
    Aborted,
    /// Killed by some other signal.
    Signaled(i32),
    /// Exited with a status outside the contract.
    UnexpectedStatus(i32),
    /// Neither an exit code nor a signal was reported.
    Unknown,
}

impl Verdict {
    /// Decode a finished process.
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        Self::from_parts(status.code(), termination_signal(status))
    }

    /// Decode from a raw exit code and terminating signal.
    ///
    /// A signal wins over a code. With neither present the outcome is
    /// `Unknown`, which is neither a pass nor a trap.
    #[must_use]
    pub fn from_parts(code: Option<i32>, signal: Option<i32>) -> Self {
        match (code, signal) {
            (_, Some(signo)) if signo == sigabrt() => Self::Aborted,
            (_, Some(signo)) => Self::Signaled(signo),
            (Some(c), None) if c == TrapCode::Good.code() => Self::GoodTrap,
            (Some(c), None) if c == TrapCode::Bad.code() => Self::BadTrap,
            (Some(c), None) => Self::UnexpectedStatus(c),
            (None, None) => Self::Unknown,
        }
    }

    /// True only for a clean exit.
    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::GoodTrap)
    }

    /// True when the outcome is one a failed check produces.
    #[must_use]
    pub const fn trapped(self) -> bool {
        matches!(self, Self::BadTrap | Self::Aborted)
    }

    /// Stable lowercase name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoodTrap => "good_trap",
            Self::BadTrap => "bad_trap",
            Self::Aborted => "aborted",
            Self::Signaled(_) => "signaled",
            Self::UnexpectedStatus(_) => "unexpected_status",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodTrap => f.write_str("HIT GOOD TRAP"),
            Self::BadTrap => f.write_str("HIT BAD TRAP"),
            Self::Aborted => f.write_str("HIT BAD TRAP (aborted)"),
            Self::Signaled(signo) => write!(f, "killed by signal {signo}"),
            Self::UnexpectedStatus(code) => write!(f, "unexpected exit status {code}"),
            Self::Unknown => f.write_str("no exit status reported"),
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: ExitStatus) -> Option<i32> {
    None
}

#[cfg(unix)]
const fn sigabrt() -> i32 {
    libc::SIGABRT
}

// Only consulted when a signal is present, which never happens off unix.
#[cfg(not(unix))]
const fn sigabrt() -> i32 {
    6
}
