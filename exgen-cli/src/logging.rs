use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive for `exgen` logs.
pub const LOG_ENV: &str = "EXGEN_LOG";

/// Initialise the global `tracing` subscriber.
///
/// Respects `EXGEN_LOG` when set. Otherwise logs warnings only, or
/// everything down to `debug` when `verbose` is true. Logs go to stderr so
/// they never mix with command output.
///
/// Call this once, at the very start of `main`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
