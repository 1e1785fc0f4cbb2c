//! Log output for the signguard binary
//!
//! Everything goes to stderr; stdout is reserved for the usage text printed
//! when a flag is missing. Debug builds print human-readable lines, release
//! builds print one JSON object per event so a scheduler can ship them as-is.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Per-image outcomes and the final counts are logged at `info`; dependencies
/// only surface warnings.
const DEFAULT_FILTER: &str = "warn,signguard_engine=info,signguard=info";

/// Install the global subscriber. `RUST_LOG` replaces the default filter.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_telemetry() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    #[cfg(debug_assertions)]
    let layer = layer.pretty();

    #[cfg(not(debug_assertions))]
    let layer = layer.json().with_current_span(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .ok();
}
