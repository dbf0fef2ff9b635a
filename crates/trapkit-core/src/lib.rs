//! # trapkit-core
//!
//! Assertion runtime for conformance fixtures.
//!
//! A fixture program computes something, calls [`check`] on the result and
//! returns. A failed check is a *trap*: the process terminates at once with an
//! outcome a driver can tell apart from a clean exit. Nothing after the failing
//! call runs.
//!
//! - [`check`] / [`halt`]: the fatal assertion and the raw termination primitive.
//! - [`length`] / [`length!`]: element count of a fixed-size array, known at
//!   compile time.
//! - [`config`]: selects the trap channel (`TRAPKIT_TRAP`).
//! - [`verdict`]: decodes a finished process back into good/bad trap.

#![forbid(unsafe_code)]

pub mod check;
pub mod config;
pub mod length;
pub mod verdict;

pub use check::{TrapCode, check, halt};
pub use config::{TrapChannel, trap_channel};
pub use length::length;
pub use verdict::Verdict;
