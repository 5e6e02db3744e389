use std::fs;
use tracing::{debug, error, info};

use crate::types::app_config::{AppConfig, ConfigError};

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    info!("Loading configuration from: {}", path);

    let contents = fs::read_to_string(path)?;
    debug!("Processing file: {}", path);

    if contents.trim().is_empty() {
        error!("Configuration file is empty");
        return Err(ConfigError::InvalidConfig("empty file".into()));
    }

    let config: AppConfig = toml::from_str(&contents)?;

    info!("Configuration loaded successfully");
    debug!("Config: {:?}", config);

    validate_config(&config)?;

    info!("Config validated");

    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::InvalidConfig(
            "api.base_url cannot be empty".into(),
        ));
    }

    // The credential cookie is written Secure; plain http is allowed only
    // so local development against a loopback backend keeps working.
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::InvalidConfig(
            "api.base_url must be an http(s) URL".into(),
        ));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::InvalidConfig(
            "api.timeout_secs must be greater than 0".into(),
        ));
    }

    if config.auth.cookie_name.trim().is_empty() {
        return Err(ConfigError::InvalidConfig(
            "auth.cookie_name cannot be empty".into(),
        ));
    }

    if config.auth.state_file.trim().is_empty() {
        return Err(ConfigError::InvalidConfig(
            "auth.state_file cannot be empty".into(),
        ));
    }

    Ok(())
}
