//! Logger initialization for the kairos binary.
//!
//! Thin wrapper over `env_logger`. `RUST_LOG` wins when set; otherwise the
//! binary runs at info level with debug detail from its own modules.

use std::sync::Once;

static INIT: Once = Once::new();

/// Filter applied when `RUST_LOG` is absent.
const DEFAULT_FILTER: &str = "info,kairos_app=debug";

/// Initializes the global logger. Later calls are ignored, so tests and
/// `main` can both call this safely.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(DEFAULT_FILTER);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
