use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::env;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://v6tbbzg231.execute-api.us-east-1.amazonaws.com/prod";
pub const DEFAULT_APP_ID: &str = "com.anthonydito.leaderboarddemo";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the leaderboard service.
///
/// The API token is supplied by the caller (file, environment or code)
/// and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub app_id: String,
    pub api_token: String,
    pub timeout: Duration,
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    app_id: Option<String>,
    api_token: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            api_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_id: app_id.into(),
            api_token: api_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load settings from a TOML file, filling absent keys with defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;

        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(app_id) = file.app_id {
            config.app_id = app_id;
        }
        if let Some(api_token) = file.api_token {
            config.api_token = api_token;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Override settings from `LEADERBOARD_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(v) = lookup(env::BASE_URL) {
            self.base_url = v;
        }
        if let Some(v) = lookup(env::APP_ID) {
            self.app_id = v;
        }
        if let Some(v) = lookup(env::API_TOKEN) {
            self.api_token = v;
        }
    }

    /// Reject settings that cannot produce a working client.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::ConfigParseError("base_url is empty".to_string()));
        }
        if self.app_id.trim().is_empty() {
            return Err(Error::ConfigParseError("app_id is empty".to_string()));
        }
        if self.api_token.trim().is_empty() {
            return Err(Error::ConfigParseError(format!(
                "api_token is empty (set it in the config file or {})",
                env::API_TOKEN
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::ConfigParseError(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
