//! Fixture with a broken base case (`A(0, n) = n`); must hit a bad trap.

use trapkit_core::check;
use trapkit_fixtures::ackermann_with_base;

fn main() {
    let result = ackermann_with_base(1, 2, |n| n);
    check(result == 4);
}
