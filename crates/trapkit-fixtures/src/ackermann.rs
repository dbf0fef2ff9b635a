//! Ackermann recursion.

/// Ackermann function with the usual `n + 1` base case.
#[must_use]
pub fn ackermann(m: i32, n: i32) -> i32 {
    ackermann_with_base(m, n, |n| n + 1)
}

/// Ackermann recursion with a caller-supplied base case for `m == 0`.
///
/// Lets a fixture inject a broken base case and observe the trap.
pub fn ackermann_with_base<F>(m: i32, n: i32, base: F) -> i32
where
    F: Fn(i32) -> i32 + Copy,
{
    if m == 0 {
        base(n)
    } else if n == 0 {
        ackermann_with_base(m - 1, 1, base)
    } else {
        let inner = ackermann_with_base(m, n - 1, base);
        ackermann_with_base(m - 1, inner, base)
    }
}
