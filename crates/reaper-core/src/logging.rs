use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global JSON log subscriber on stderr.
///
/// `RUST_LOG` takes precedence. Otherwise quiet mode only lets warnings and
/// errors through, and verbose mode logs at info.
///
/// Stdout is left to the command output (audit trace, JSON report).
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_target(false),
        )
        .try_init();
}
