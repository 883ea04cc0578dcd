//! Logging setup for the command line.

#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for the `alphaforest` binary.
///
/// Logs go to standard error so the report on standard output is left untouched.
/// The level is `Warn`, or `Debug` when `debug_enabled`; `RUST_LOG` overrides both when set.
/// Does nothing on `wasm32`.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::env;

        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(filters) = env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        // a logger may already be installed, e.g. by a test harness
        if builder.try_init().is_ok() {
            log::debug!("logger initialized at {level:?} level");
        }
    }

    #[cfg(target_arch = "wasm32")]
    let _ = debug_enabled;
}
