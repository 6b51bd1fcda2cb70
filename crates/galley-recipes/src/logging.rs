//! Console logging for hosts that want galley's diagnostics printed.
//!
//! This module is only available with the `logging` feature.
//!
//! galley itself never installs a subscriber: the recipes emit `tracing`
//! events and leave the choice of sink to the embedding application. These
//! helpers cover the common case of a compact stderr subscriber.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Installs a compact subscriber filtered by `RUST_LOG`.
///
/// Falls back to `warn` when the variable is unset or unparsable. Only the
/// first call per process takes effect; later calls are no-ops.
pub fn init() {
    init_with("warn");
}

/// Installs a compact subscriber with `directives` as the fallback filter.
///
/// `RUST_LOG` still wins when it is set. Safe to call from multiple threads;
/// only the first call per process takes effect.
///
/// # Example
///
/// ```rust,no_run
/// galley_recipes::logging::init_with("galley_config=debug,warn");
/// ```
pub fn init_with(directives: &str) {
    let directives = directives.to_string();
    INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer().compact().with_target(false).without_time(), // Let hosts control timestamp format
            )
            .init();
    });
}
