//! Compile-time element count of fixed-size arrays.
//!
//! Only `[T; N]` is accepted. Passing a slice or a `Vec` does not type-check,
//! so the count can never be computed from a decayed reference.

/// Number of elements in a fixed-size array.
///
/// Usable in `const` items:
///
/// ```
/// use trapkit_core::length;
///
/// const TABLE: [u16; 4] = [1, 2, 3, 4];
/// const N: usize = length(&TABLE);
/// assert_eq!(N, 4);
/// ```
///
/// ```compile_fail
/// use trapkit_core::length;
///
/// let v = vec![1u8, 2, 3];
/// let _ = length(&v[..]);
/// ```
#[must_use]
#[inline(always)]
pub const fn length<T, const N: usize>(_seq: &[T; N]) -> usize {
    N
}

/// Element count of a fixed-size array expression.
///
/// ```
/// use trapkit_core::length;
///
/// let mem: [u32; 3] = [7, 8, 9];
/// for i in 0..length!(mem) {
///     assert!(mem[i] >= 7);
/// }
/// ```
#[macro_export]
macro_rules! length {
    ($seq:expr) => {
        $crate::length::length(&$seq)
    };
}
