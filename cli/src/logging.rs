//! Diagnostic logging to stderr.
//!
//! Debug output is on when the `DEBUG` environment variable is non-empty or
//! when `--debug` is given. Otherwise `RUST_LOG` applies, defaulting to
//! `warn`. The filter can be raised after option parsing through
//! [`LogHandle::enable_debug`].

use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

const DEBUG_ENV: &str = "DEBUG";

/// Handle to the installed log filter.
pub struct LogHandle {
    filter: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LogHandle {
    /// Switches the filter to `debug`. No-op if no subscriber was installed.
    pub fn enable_debug(&self) {
        if let Some(filter) = &self.filter {
            if let Err(err) = filter.modify(|f| *f = EnvFilter::new("debug")) {
                warn!(error = %err, "Failed to enable debug logging");
            }
        }
    }
}

/// Installs the global subscriber.
pub fn init() -> LogHandle {
    let (filter, handle) = reload::Layer::new(initial_filter());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok();

    LogHandle {
        filter: installed.then_some(handle),
    }
}

fn initial_filter() -> EnvFilter {
    if debug_env_set() {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn debug_env_set() -> bool {
    std::env::var(DEBUG_ENV).is_ok_and(|v| !v.trim().is_empty())
}
