//! Structured logging setup for the binaries. The library itself only emits `tracing` events.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable consulted after `RUST_LOG` to override the level picked from flags.
pub const LOG_ENV: &str = "TREEPATH_LOG";

/// Installs a compact stderr subscriber. `log_level` wins over `verbose`; either can be a bare
/// level (`debug`) or a full filter directive (`treepath=trace`).
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Scopes a bare level to this crate, leaving full directives alone.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("treepath={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped_to_the_crate() {
        assert_eq!(directive("debug"), "treepath=debug");
        assert_eq!(directive("treepath::bfs=trace"), "treepath::bfs=trace");
    }
}
