//! The fatal `check` primitive and process halting.

use std::io::Write;
use std::panic::Location;
use std::process::ExitCode;

use crate::config::{TrapChannel, trap_channel};

/// Exit status a fixture halts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrapCode {
    /// Every check passed and execution reached the end.
    Good,
    /// A check failed.
    Bad,
}

impl TrapCode {
    /// Numeric process exit status for this trap.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Good => 0,
            Self::Bad => 1,
        }
    }
}

impl From<TrapCode> for ExitCode {
    fn from(trap: TrapCode) -> Self {
        match trap {
            TrapCode::Good => ExitCode::SUCCESS,
            TrapCode::Bad => ExitCode::from(1),
        }
    }
}

/// Assert `condition`, trapping the whole process when it is false.
///
/// On `true` this returns immediately with no side effect. On `false` it
/// writes one `HIT BAD TRAP` line to stderr and terminates through the
/// configured [`TrapChannel`]: exit status 1 by default, `SIGABRT` when
/// `TRAPKIT_TRAP=abort`. It never panics, so the failure cannot be caught
/// or unwound past.
///
/// ```no_run
/// use trapkit_core::check;
///
/// let result = 2 + 2;
/// check(result == 4);
/// ```
#[inline]
#[track_caller]
pub fn check(condition: bool) {
    if !condition {
        trap(Location::caller());
    }
}

/// Terminate the process with `code` after flushing stdio.
///
/// `halt(0)` is a good trap; any other code is a bad trap.
pub fn halt(code: i32) -> ! {
    flush_stdio();
    std::process::exit(code)
}

#[cold]
#[inline(never)]
fn trap(location: &Location<'_>) -> ! {
    let _ = writeln!(
        std::io::stderr(),
        "HIT BAD TRAP at {}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    match trap_channel() {
        TrapChannel::Exit => halt(TrapCode::Bad.code()),
        TrapChannel::Abort => {
            flush_stdio();
            std::process::abort()
        }
    }
}

// Output written before the failing check must reach the driver.
fn flush_stdio() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}
