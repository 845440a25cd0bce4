// src/logging.rs

//! Logging initialisation.
//!
//! Wires the `log` facade to `env_logger` with the configured level as the
//! default filter. `RUST_LOG` still wins when set.

/// Initialize the logging system with the configured level.
pub fn init(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .init();
}
