//! Configuration for the name generator.
//!
//! Settings come from built-in defaults, an optional JSON file, and command
//! line overrides applied by the binary. The upstream credential is the one
//! value read from the process environment, once, at startup; everything
//! downstream receives it through [`AppConfig`].

#![warn(missing_docs, clippy::pedantic)]

use std::fmt;
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`AppConfig`].
    #[error("failed to parse config: {source}")]
    Parse {
        /// Decoder error with line/column.
        #[from]
        source: serde_json::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Upstream credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key; blank input yields `None`.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    /// Returns the secret for use in an `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings for the upstream text-generation model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Model identifier sent with every request.
    pub model: String,
    /// API root; the chat completions path is appended to it.
    pub base_url: String,
    /// Deadline for a single upstream call, in seconds.
    pub timeout_secs: u64,
    /// Output token ceiling per request.
    pub max_output_tokens: u32,
    /// Sampling temperature; provider default when absent.
    pub temperature: Option<f32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_owned(),
            base_url: "https://api.openai.com/".to_owned(),
            timeout_secs: 60,
            max_output_tokens: 200,
            temperature: None,
        }
    }
}

impl ModelConfig {
    /// Returns the upstream deadline as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for the HTTP front end.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the form page is served on.
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8501)),
        }
    }
}

/// Complete runtime configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP front end settings.
    pub server: ServerConfig,
    /// Upstream model settings.
    pub model: ModelConfig,
    #[serde(skip)]
    api_key: Option<ApiKey>,
}

impl AppConfig {
    /// Parses configuration from a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_json_str(&raw)
    }

    /// Reads the credential from [`API_KEY_ENV`].
    #[must_use]
    pub fn with_api_key_from_env(self) -> Self {
        self.with_api_key_from(|name| std::env::var(name).ok())
    }

    /// Reads the credential through `lookup`, which receives [`API_KEY_ENV`].
    /// An absent or blank value leaves the key unset.
    #[must_use]
    pub fn with_api_key_from(mut self, lookup: impl FnOnce(&str) -> Option<String>) -> Self {
        self.api_key = lookup(API_KEY_ENV).and_then(ApiKey::new);
        self
    }

    /// Returns the credential, if one was found.
    #[must_use]
    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Checks ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        let model = &self.model;
        if model.model.trim().is_empty() {
            return Err(ConfigError::invalid("model.model", "must not be empty"));
        }
        if !(model.base_url.starts_with("http://") || model.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "model.base_url",
                "must start with http:// or https://",
            ));
        }
        if model.timeout_secs == 0 {
            return Err(ConfigError::invalid("model.timeout_secs", "must be positive"));
        }
        if model.max_output_tokens == 0 {
            return Err(ConfigError::invalid(
                "model.max_output_tokens",
                "must be positive",
            ));
        }
        if let Some(t) = model.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::invalid(
                    "model.temperature",
                    format!("{t} is outside 0.0..=2.0"),
                ));
            }
        }
        Ok(())
    }
}
