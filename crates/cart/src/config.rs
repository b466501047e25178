//! Cart storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_NAMESPACE` - Prefix for the durable record key
//!   (default: `pocket-market`)

use thiserror::Error;

/// Default storage key namespace.
pub const DEFAULT_NAMESPACE: &str = "pocket-market";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart store configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    namespace: String,
}

impl CartConfig {
    /// Create a configuration with an explicit namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the namespace is empty or whitespace-only.
    pub fn new(namespace: impl Into<String>) -> Result<Self, ConfigError> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_NAMESPACE".to_string(),
                "must not be empty".to_string(),
            ));
        }
        Ok(Self { namespace })
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `CART_NAMESPACE` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CART_NAMESPACE") {
            Ok(namespace) => Self::new(namespace),
            Err(_) => Ok(Self::default()),
        }
    }

    /// The configured namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The storage key for the durable cart record.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}:cart", self.namespace)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}
