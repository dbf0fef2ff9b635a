//! Fixture: quicksort a permutation of `0..20`, twice.

use trapkit_core::{check, length};
use trapkit_fixtures::{QUICKSORT_INPUT, quick_sort};

fn main() {
    let mut a = QUICKSORT_INPUT;

    quick_sort(&mut a);
    for i in 0..length!(a) {
        check(usize::try_from(a[i]) == Ok(i));
    }
    check(length!(a) == 20);

    quick_sort(&mut a);
    for i in 0..length!(a) {
        check(usize::try_from(a[i]) == Ok(i));
    }
}
