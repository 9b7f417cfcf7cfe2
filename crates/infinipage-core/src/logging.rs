//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,infinipage=debug";

/// Install a global fmt subscriber.
///
/// Honours `RUST_LOG` when present and falls back to [`DEFAULT_FILTER`].
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => install(filter),
        Err(_) => install(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install a global fmt subscriber with an explicit filter directive,
/// e.g. `"trace"` or `"infinipage::engine=trace"`.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    let installed = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    if installed.is_err() {
        tracing::trace!("global subscriber already installed");
    }
}
