use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Filter built from a `RUST_LOG`-style string; anything it leaves
/// unspecified logs at INFO. Invalid directives are skipped.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Installs the global fmt subscriber, honouring `RUST_LOG`.
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .init();
}
