// src/lib.rs - Library interface shared by the plotting binaries

pub mod axis_names;
pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;

pub use error::{Result, TelemetryError};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Installs the `env_logger` backend. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
