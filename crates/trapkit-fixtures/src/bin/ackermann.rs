//! Fixture: `ackermann(1, 2) == 4`.

use trapkit_core::check;
use trapkit_fixtures::ackermann;

fn main() {
    let (m, n) = (1, 2);
    let result = ackermann(m, n);
    check(result == 4);
}
