//! Tracing subscriber setup

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Default filter directive for a given `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "test_harness=warn",
        1 => "test_harness=info",
        _ => "test_harness=debug",
    }
}

/// Initialise the tracing subscriber once per process.
///
/// `RUST_LOG` takes precedence over the verbosity-derived default. Logs go
/// to stderr so they never mix with the report on stdout.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    });
}
