//! Tracing setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Events go to stderr so the summary on
/// stdout stays clean. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recipe_vocab={level}")));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
