//! Browser-console logging.
//!
//! `tracing` events go to the devtools console through `tracing-wasm`.
//! Debug builds log at DEBUG, release builds at INFO.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. Call once, before mounting.
pub fn init() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level())
        .set_report_logs_in_timings(false)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
