//! Fixture: the shift pass against an answer table corrupted at index 3.
//!
//! Prints each index before checking it, so a driver can see that nothing
//! past the first mismatch runs.

use trapkit_core::{check, length};
use trapkit_fixtures::{MEM, SH_ANS, shift_pattern};

const CORRUPT_INDEX: usize = 3;

fn main() {
    let mut answers = SH_ANS;
    answers[CORRUPT_INDEX] ^= 0x1;

    let mut mem = MEM;
    for i in 0..length!(mem) {
        mem[i] = shift_pattern(i);
        println!("index {i}");
        check(u32::from(mem[i]) == answers[i]);
    }
}
