/// Configure tracing once at startup for the whole process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=menu_service=debug,tower_http=warn cargo run
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
