//! Server configuration
//!
//! Loaded once at startup from defaults plus environment overrides, so
//! `PORT=4000` picks the listening port without a config file.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Default listening port, matching the protocol's conventional port.
const DEFAULT_PORT: u16 = 9678;

/// Server configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind; all interfaces.
    pub host: String,

    /// TCP port to bind. Environment: PORT
    pub port: u16,

    /// Optional deadline in seconds for reading the registration line.
    /// Unset by default: a client that never sends its line holds its
    /// handler task open indefinitely. Environment: READ_TIMEOUT_SECS
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            read_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration: built-in defaults overlaid with environment
    /// variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(Environment::default())
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The socket address string handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("Port cannot be 0".into()));
        }
        Ok(())
    }
}
