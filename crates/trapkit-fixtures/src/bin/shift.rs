//! Fixture: complement/shift pass over the 16-bit table.

use trapkit_core::{check, length};
use trapkit_fixtures::{MEM, SH_ANS, shift_pattern};

fn main() {
    let mut mem = MEM;
    for i in 0..length!(mem) {
        mem[i] = shift_pattern(i);
        check(u32::from(mem[i]) == SH_ANS[i]);
    }
    check(length!(mem) == length!(SH_ANS));
}
