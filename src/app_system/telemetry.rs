/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (usually the
/// configured `log_filter`) decides verbosity.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=storefront_policy::clients=debug,info cargo run
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // A second call (e.g. from tests) keeps the subscriber already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
