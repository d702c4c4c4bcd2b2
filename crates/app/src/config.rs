use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Parse the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::config(format!("{CONFIG_PATH}: {e}")))
}

/// Load `config.toml` once and cache it. Safe to call repeatedly; only the
/// first call reads the file.
///
/// A missing or unparseable file yields defaults. In the browser there is
/// no file system, so defaults are always used.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(read_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!(?config, "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid configuration, using defaults");
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "{CONFIG_PATH} not readable, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    AppConfig::default()
}
