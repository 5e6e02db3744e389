use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend API root, e.g. `"https://tracker.example.com/api"`.
    pub base_url: String,
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Name of the persisted credential cookie record.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// File the cookie record is persisted to between runs.
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelegramConfig {
    /// Public Mini App link, `https://t.me/{bot}/{short_name}`.
    pub mini_app_link: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default = "default_auth_config")]
    pub auth: AuthConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

impl ApiConfig {
    /// Request timeout as a `Duration` — convenience for the HTTP client
    /// builder.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// Production Mini App entry, `https://t.me/{bot}/{webapp_short_name}`.
/// The short name is registered with BotFather.
pub const DEFAULT_MINI_APP_LINK: &str = "https://t.me/aemix_ship_bot/aemix";

impl TelegramConfig {
    /// Resolve the Mini App link: `TELEGRAM_MINI_APP_LINK` env var, then
    /// the config file field, then the production default.
    pub fn resolved_mini_app_link(&self) -> String {
        std::env::var("TELEGRAM_MINI_APP_LINK")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.mini_app_link.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MINI_APP_LINK.to_string())
    }
}

// ---------------------------------------------------------------------------
// Serde defaults
// ---------------------------------------------------------------------------

pub fn default_accept() -> String {
    "application/json".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_cookie_name() -> String {
    "authData".to_string()
}

pub fn default_state_file() -> String {
    "auth.cookie".to_string()
}

fn default_auth_config() -> AuthConfig {
    AuthConfig {
        cookie_name: default_cookie_name(),
        state_file: default_state_file(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://tracker.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.accept, "application/json");
        assert_eq!(cfg.api.timeout_secs, 30);
        assert_eq!(cfg.auth.cookie_name, "authData");
        assert_eq!(cfg.auth.state_file, "auth.cookie");
        assert!(cfg.telegram.mini_app_link.is_none());
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:8080/api"
            timeout_secs = 5

            [auth]
            cookie_name = "session"
            state_file = "/tmp/session.cookie"

            [telegram]
            mini_app_link = "https://t.me/aemix_ship_bot/aemix"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.timeout_secs, 5);
        assert_eq!(cfg.auth.cookie_name, "session");
        assert_eq!(
            cfg.telegram.mini_app_link.as_deref(),
            Some("https://t.me/aemix_ship_bot/aemix")
        );
    }
}
