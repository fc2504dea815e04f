//! Logger setup for the binary
//!
//! The library only emits through the `log` macros; the binary picks the sink.

use log::SetLoggerError;

/// Default filter for a `-v` count, used when `RUST_LOG` is unset
#[must_use]
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install `env_logger`, honouring `RUST_LOG` over the verbosity flag
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbosity)),
    )
    .format_timestamp(None)
    .try_init()
}
