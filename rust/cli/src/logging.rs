use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. The session talks to the user on
/// stdout, so engine events stay quiet unless asked for.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Events go to stderr, filtered by `RUST_LOG` (for example
/// `RUST_LOG=classwar_engine=debug` to trace every round). Calling this more
/// than once is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
