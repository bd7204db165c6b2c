use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` overrides the default filter, which is `warn`, or `debug` when
/// `verbose` is set. Rendered output goes to stdout, so logs never mix with it.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
