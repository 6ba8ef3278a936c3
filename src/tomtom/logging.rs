//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout only ever carries action output. The
//! level comes from `TOMTOM_LOG` using `EnvFilter` directives
//! (`TOMTOM_LOG=debug`, `TOMTOM_LOG=tomtom::service=debug`), defaulting to
//! `warn`.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "TOMTOM_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        tracing::warn!("logging initialised");
    }
}
