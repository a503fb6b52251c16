use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once per process. `RUST_LOG` overrides
/// the default `warn` level.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("course_table::collections", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests and embedders may have installed a logger already.
        let _ = builder.try_init();
    });
}
