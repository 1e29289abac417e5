//! gamemath - scalar/SIMD parity check
//!
//! Loads `config/`, then checks that both numeric paths agree. Exits with
//! status 1 if parity fails.

use gamemath::config::AppConfig;

fn init_logging(filter: &str) {
    // RUST_LOG, when set, overrides the configured level
    env_logger::Builder::new()
        .parse_filters(filter)
        .parse_default_env()
        .init();
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&config.debug.log_level);
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting gamemath");

    if let Err(e) = gamemath::run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
