//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (AI features only)
//! - `GEMINI_API_KEY` - Google Generative Language API key
//!
//! ## Optional
//! - `GEMINI_CHAT_MODEL` - Concierge chat model (default: gemini-3-pro-preview)
//! - `GEMINI_REWRITE_MODEL` - Product rewrite model (default: gemini-3-flash-preview)
//! - `LUMIERE_STORAGE_PATH` - Persisted state file (default: lumiere-storage.json)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Default model for the concierge chat.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";
/// Default model for the structured product rewrite.
pub const DEFAULT_REWRITE_MODEL: &str = "gemini-3-flash-preview";
/// Default persisted state file, the durable `lumiere-storage` namespace.
pub const DEFAULT_STORAGE_PATH: &str = "lumiere-storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path of the persisted state file.
    pub storage_path: PathBuf,
    /// Gemini API configuration.
    pub gemini: GeminiConfig,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API.
    pub api_key: SecretString,
    /// Model used for conversational concierge replies.
    pub chat_model: String,
    /// Model used for structured product rewrites.
    pub rewrite_model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("chat_model", &self.chat_model)
            .field("rewrite_model", &self.rewrite_model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `GEMINI_API_KEY` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            storage_path: storage_path_from_env(),
            gemini: GeminiConfig::from_env()?,
        })
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: get_required_secret("GEMINI_API_KEY")?,
            chat_model: get_env_or_default("GEMINI_CHAT_MODEL", DEFAULT_CHAT_MODEL),
            rewrite_model: get_env_or_default("GEMINI_REWRITE_MODEL", DEFAULT_REWRITE_MODEL),
        })
    }
}

/// Resolve the persisted state path without requiring the AI configuration.
///
/// Store-only consumers (seeding, cart operations) use this so a missing
/// API key does not block them.
#[must_use]
pub fn storage_path_from_env() -> PathBuf {
    let _ = dotenvy::dotenv();
    PathBuf::from(get_env_or_default("LUMIERE_STORAGE_PATH", DEFAULT_STORAGE_PATH))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    std::env::var(key)
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_config_debug_redacts_key() {
        let config = GeminiConfig {
            api_key: SecretString::from("super_secret_api_key"),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            rewrite_model: DEFAULT_REWRITE_MODEL.to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("gemini-3-pro-preview"));
        assert!(!debug_output.contains("super_secret_api_key"));
    }

    #[test]
    fn test_missing_env_var_display() {
        let err = ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: GEMINI_API_KEY"
        );
    }
}
