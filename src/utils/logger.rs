use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// Verbose mode surfaces the per-call age computation and config loading
/// events, which are all emitted at debug level.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,small_calc::core=debug,small_calc::config=debug,small_calc::app=debug"
    } else {
        "warn"
    }
}

/// Logs go to stderr so stdout carries only the computed value.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}
