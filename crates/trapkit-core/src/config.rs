//! Trap channel configuration.
//!
//! The channel is set via the `TRAPKIT_TRAP` environment variable:
//! - `exit` (default): a failed check halts with the reserved bad-trap status 1.
//! - `abort`: a failed check raises `SIGABRT` through `std::process::abort`.
//!
//! The value is resolved once per process and cached.

use std::sync::OnceLock;

/// Environment variable selecting the trap channel.
pub const TRAP_CHANNEL_ENV: &str = "TRAPKIT_TRAP";

/// How a failed check terminates the process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrapChannel {
    /// Exit with status 1.
    #[default]
    Exit,
    /// Abort the process (`SIGABRT` on unix).
    Abort,
}

impl TrapChannel {
    /// Parse from string (case-insensitive). Unknown values fall back to `Exit`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" | "signal" | "sigabrt" => Self::Abort,
            _ => Self::Exit,
        }
    }

    /// Value to put in `TRAPKIT_TRAP` to select this channel.
    #[must_use]
    pub const fn as_env_value(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Abort => "abort",
        }
    }
}

static CHANNEL: OnceLock<TrapChannel> = OnceLock::new();

/// Get the configured trap channel (reads env var on first call, caches thereafter).
#[must_use]
pub fn trap_channel() -> TrapChannel {
    *CHANNEL.get_or_init(|| {
        std::env::var(TRAP_CHANNEL_ENV)
            .map(|v| TrapChannel::from_str_loose(&v))
            .unwrap_or_default()
    })
}
