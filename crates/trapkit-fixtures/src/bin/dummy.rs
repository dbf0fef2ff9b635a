//! Fixture with no checks at all.

use std::process::ExitCode;

use trapkit_core::TrapCode;

fn main() -> ExitCode {
    TrapCode::Good.into()
}
