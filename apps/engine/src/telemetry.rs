use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs the global structured-logging subscriber.
/// `RUST_LOG` wins when set; otherwise the crate logs at `config.rust_log`.
/// Safe to call more than once: later calls are ignored.
pub fn init_tracing(config: &Config) {
    let result = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("prep_engine={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_ok() {
        tracing::info!("Prep engine v{} logging initialized", env!("CARGO_PKG_VERSION"));
    }
}
