use log::LevelFilter;

/// Initialize the logger with the specified level
///
/// `level` replaces the default filter from `RUST_LOG`; per-module
/// directives in `RUST_LOG` (e.g. `phongtracer=trace`) still apply.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
