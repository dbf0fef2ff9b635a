//! Probe: many passing checks in a row leave the outcome unchanged.

use trapkit_core::check;

const REPEATS: u32 = 100_000;

fn main() {
    let mut passed = 0u32;
    for _ in 0..REPEATS {
        check(true);
        passed += 1;
    }
    check(passed == REPEATS);
}
