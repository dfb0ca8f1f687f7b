/// Installs the global tracing subscriber. Call once from the embedding
/// shell before touching any other module.
///
/// Honors `RUST_LOG` when set, otherwise logs at `info`.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
