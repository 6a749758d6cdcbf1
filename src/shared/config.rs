//! Application configuration. Backend URL, timeout, mock mode.

use serde::Deserialize;
use std::time::Duration;

/// Flask's default bind address; the backend is usually run with `flask run`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Prefix of the env vars read into `AppConfig` (`CHATBOX_BASE_URL`, ...).
pub const ENV_PREFIX: &str = "CHATBOX";

/// Env var naming an optional config file (TOML/JSON/YAML by extension).
pub const CONFIG_FILE_ENV: &str = "CHATBOX_CONFIG";

/// Env vars as a plain map. `None` means the process environment.
pub type EnvVars = config::Map<String, String>;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Backend base URL. Read from CHATBOX_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds; unset or 0 waits indefinitely.
    /// Read from CHATBOX_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Use the offline mock backend instead of HTTP. Read from CHATBOX_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,
}

impl AppConfig {
    /// Load `.env`, then the file named by `CHATBOX_CONFIG`, then `CHATBOX_*` env vars.
    ///
    /// A malformed value is an error; nothing falls back to defaults silently.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var(CONFIG_FILE_ENV).ok();
        Self::load_from(file.as_deref(), None)
    }

    /// Build from an optional file and an env source. Env values override the file.
    pub fn load_from(
        file: Option<&str>,
        env: Option<EnvVars>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).source(env));
        c.build()?.try_deserialize()
    }

    /// Returns the backend base URL. Defaults to DEFAULT_BASE_URL.
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Returns the request timeout, or `None` for no timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }

    /// Returns true if the offline mock backend is selected.
    pub fn is_mock(&self) -> bool {
        self.mock.unwrap_or(false)
    }
}
