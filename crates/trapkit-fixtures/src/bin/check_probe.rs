//! Probe: `check-probe pass|fail`.
//!
//! Prints `before`, checks the argument, then prints `after`.

use trapkit_core::{TrapCode, check, halt};

fn main() {
    let condition = match std::env::args().nth(1).as_deref() {
        Some("pass") => true,
        Some("fail") => false,
        other => {
            eprintln!("usage: check-probe pass|fail (got {other:?})");
            halt(2);
        }
    };

    println!("before");
    check(condition);
    println!("after");
    halt(TrapCode::Good.code());
}
