//! Computations exercised by the fixture binaries.
//!
//! These are test content. Each binary under `src/bin/` runs one of them and
//! reports through `trapkit_core::check`; the harness only looks at the exit
//! status.

#![forbid(unsafe_code)]

pub mod ackermann;
pub mod quicksort;
pub mod shift;

pub use ackermann::{ackermann, ackermann_with_base};
pub use quicksort::{QUICKSORT_INPUT, quick_sort};
pub use shift::{MEM, SH_ANS, shift_pattern};
