//! Gate configuration
//!
//! Loads the accepted credential pair and the protected destination once at
//! startup. Nothing here is written back; the pair is fixed for the life of
//! the process.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use gate_core::{
    AcceptedCredential, Route, DEFAULT_DESTINATION, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};
use serde::Deserialize;
use zeroize::Zeroizing;

use super::router::LOGIN_PATH;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "credential-gate";

/// Startup configuration for the gate
#[derive(Clone, Deserialize)]
pub struct GateConfig {
    /// Accepted username
    #[serde(default = "default_username")]
    pub username: String,

    /// Accepted password
    #[serde(default = "default_password")]
    pub password: Zeroizing<String>,

    /// Path of the protected view
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password() -> Zeroizing<String> {
    Zeroizing::new(DEFAULT_PASSWORD.to_string())
}

fn default_destination() -> String {
    DEFAULT_DESTINATION.to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            destination: default_destination(),
            high_contrast: false,
        }
    }
}

impl fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("destination", &self.destination)
            .field("high_contrast", &self.high_contrast)
            .finish()
    }
}

impl GateConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // XDG_CONFIG_HOME counts only when set to an absolute path
        let xdg_config = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute());
        if let Some(xdg_config) = xdg_config {
            return Some(xdg_config.join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// used.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        // The raw text holds the password too
        let contents = Zeroizing::new(
            fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?,
        );
        let config: GateConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::Invalid("username cannot be empty".into()));
        }

        if self.password.is_empty() {
            return Err(ConfigError::Invalid("password cannot be empty".into()));
        }

        if !self.destination.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "destination must be an absolute path, got {:?}",
                self.destination
            )));
        }

        if self.destination == LOGIN_PATH {
            return Err(ConfigError::Invalid(
                "destination cannot be the login path".into(),
            ));
        }

        Ok(())
    }

    /// The accepted pair this configuration describes
    pub fn accepted(&self) -> AcceptedCredential {
        AcceptedCredential::new(self.username.as_str(), self.password.as_str())
    }

    /// The protected destination
    pub fn destination(&self) -> Route {
        Route::new(self.destination.as_str())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
