//! Server process settings (logging), loaded with the `config` crate.

use anyhow::Result;
use serde::Deserialize;

/// Default tracing filter when neither RUST_LOG nor a config value is set
pub const DEFAULT_LOG_FILTER: &str = "portfolio_site=debug,dioxus=info";

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Get config directory (PORTFOLIO_CONFIG_DIR or current directory)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<ServerConfig> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .set_default("log_filter", DEFAULT_LOG_FILTER)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (PORTFOLIO__LOG_FILTER)
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Filter for the tracing subscriber: RUST_LOG wins over the config value.
pub fn log_filter(config: &ServerConfig) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone())
}
