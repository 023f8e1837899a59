//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) with sensible defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use tracing::info;

/// Environment variable holding the OAuth client identifier.
pub const CLIENT_ID_VAR: &str = "GOOGLE_TASKS_CLIENT_ID";

/// Environment variable holding the OAuth client secret.
pub const CLIENT_SECRET_VAR: &str = "GOOGLE_TASKS_CLIENT_SECRET";

/// Base URL of the Google Tasks REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://tasks.googleapis.com/tasks/v1";

/// Request timeout applied to every outbound API call.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Google Tasks API endpoint settings.
    pub api: ApiConfig,

    /// OAuth client credentials.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Outbound API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every tool path is appended to.
    pub base_url: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// OAuth client credentials.
///
/// Both values must be present at startup. Requests authenticate with the
/// caller's own bearer token, so these are not sent anywhere.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OAuth client identifier.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// `MCP_LOG_LEVEL`. Readable before the rest of the configuration so
    /// logging can start first.
    pub fn from_env() -> Self {
        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl CredentialsConfig {
    /// Load both credentials, failing if either is missing or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: required_var(CLIENT_ID_VAR)?,
            client_secret: required_var(CLIENT_SECRET_VAR)?,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(Error::config(format!("{name} is set but empty"))),
        Err(VarError::NotPresent) => Err(Error::config(format!("{name} is not set"))),
        Err(VarError::NotUnicode(_)) => {
            Err(Error::config(format!("{name} is not a valid string")))
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "google-tasks-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables, after reading an
    /// optional `.env` file.
    ///
    /// Server settings are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`). The OAuth client credentials are required; a missing
    /// or empty value is a configuration error and the server must not start.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_process_env()
    }

    /// Same as [`Config::from_env`] without consulting `.env`.
    pub fn from_process_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();
        config.transport = TransportConfig::from_env();

        config.credentials = CredentialsConfig::from_env()?;
        info!("Google Tasks client credentials loaded from environment");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn set_credentials(id: Option<&str>, secret: Option<&str>) {
        unsafe {
            match id {
                Some(v) => std::env::set_var(CLIENT_ID_VAR, v),
                None => std::env::remove_var(CLIENT_ID_VAR),
            }
            match secret {
                Some(v) => std::env::set_var(CLIENT_SECRET_VAR, v),
                None => std::env::remove_var(CLIENT_SECRET_VAR),
            }
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(Some("client-123"), Some("secret-456"));

        let config = Config::from_process_env().unwrap();
        assert_eq!(config.credentials.client_id, "client-123");
        assert_eq!(config.credentials.client_secret, "secret-456");

        set_credentials(None, None);
    }

    #[test]
    fn test_missing_client_id_fails() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(None, Some("secret-456"));

        let err = Config::from_process_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(CLIENT_ID_VAR));

        set_credentials(None, None);
    }

    #[test]
    fn test_missing_client_secret_fails() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(Some("client-123"), None);

        let err = Config::from_process_env().unwrap_err();
        assert!(err.to_string().contains(CLIENT_SECRET_VAR));

        set_credentials(None, None);
    }

    #[test]
    fn test_empty_credential_fails() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(Some(""), Some("secret-456"));

        let err = Config::from_process_env().unwrap_err();
        assert!(err.to_string().contains("empty"));

        set_credentials(None, None);
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            client_id: "client-123".to_string(),
            client_secret: "super_secret_value".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_value"));
    }

    #[test]
    fn test_default_api_settings() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://tasks.googleapis.com/tasks/v1");
        assert_eq!(config.api.timeout_ms, 30_000);
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe { std::env::set_var("MCP_LOG_LEVEL", "debug") };
        set_credentials(Some("client-123"), Some("secret-456"));

        assert_eq!(LoggingConfig::from_env().level, "debug");
        assert_eq!(Config::from_process_env().unwrap().logging.level, "debug");

        unsafe { std::env::remove_var("MCP_LOG_LEVEL") };
        set_credentials(None, None);
    }

    #[test]
    fn test_logging_defaults_without_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe { std::env::remove_var("MCP_LOG_LEVEL") };

        let logging = LoggingConfig::from_env();
        assert_eq!(logging.level, "info");
        assert!(logging.with_timestamps);
    }
}
