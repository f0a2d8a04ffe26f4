//! Application configuration module
//!
//! Configuration is read from environment variables (optionally seeded from a
//! `.env` file by the server binary). Tests build it directly through
//! [`AppConfigBuilder`].
//!
//! # Environment Variables
//!
//! - `SERVER_PORT` - Listen port (default `3000`)
//! - `DATABASE_URL` - PostgreSQL URL; chat history is disabled without it
//! - `OPENROUTER_API_KEY` - Enables live generation; demo mode without it
//! - `OPENROUTER_BASE_URL` - Provider base URL (default `https://openrouter.io/api/v1`)
//! - `OPENROUTER_MODEL` - Model identifier sent to the provider
//! - `JWT_SECRET` - Secret used to verify bearer tokens
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origin list (any origin when unset)
//!
//! Blank values are treated as unset.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.io/api/v1";
pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-3.5-turbo";
pub const DEV_JWT_SECRET: &str = "blogverse-dev-secret-change-in-production";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection URL
    pub database_url: Option<String>,
    /// OpenRouter API key; `None` means demo mode
    pub openrouter_api_key: Option<String>,
    /// OpenRouter API base URL, without trailing slash
    pub openrouter_base_url: String,
    /// Model identifier sent with each completion request
    pub openrouter_model: String,
    /// HMAC secret for bearer tokens
    pub jwt_secret: String,
    /// Allowed CORS origins, comma separated
    pub cors_allowed_origins: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            openrouter_api_key: None,
            openrouter_base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
            openrouter_model: DEFAULT_OPENROUTER_MODEL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            cors_allowed_origins: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut builder = AppConfig::builder();

        if let Some(port) = var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }
        if let Some(url) = var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(key) = var("OPENROUTER_API_KEY") {
            builder = builder.openrouter_api_key(key);
        }
        if let Some(url) = var("OPENROUTER_BASE_URL") {
            builder = builder.openrouter_base_url(url);
        }
        if let Some(model) = var("OPENROUTER_MODEL") {
            builder = builder.openrouter_model(model);
        }
        if let Some(secret) = var("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(origins) = var("CORS_ALLOWED_ORIGINS") {
            builder = builder.cors_allowed_origins(origins);
        }

        builder.build()
    }

    /// Whether a provider key is configured
    pub fn live_generation_enabled(&self) -> bool {
        self.openrouter_api_key.is_some()
    }

    /// Whether the development JWT secret is in use
    pub fn uses_dev_jwt_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.openrouter_base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(base.clone()));
        }
        if self.openrouter_model.trim().is_empty() {
            return Err(ConfigError::MissingValue("OPENROUTER_MODEL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    openrouter_api_key: Option<String>,
    openrouter_base_url: Option<String>,
    openrouter_model: Option<String>,
    jwt_secret: Option<String>,
    cors_allowed_origins: Option<String>,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn openrouter_api_key(mut self, key: impl Into<String>) -> Self {
        self.openrouter_api_key = Some(key.into());
        self
    }

    pub fn openrouter_base_url(mut self, url: impl Into<String>) -> Self {
        self.openrouter_base_url = Some(url.into());
        self
    }

    pub fn openrouter_model(mut self, model: impl Into<String>) -> Self {
        self.openrouter_model = Some(model.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn cors_allowed_origins(mut self, origins: impl Into<String>) -> Self {
        self.cors_allowed_origins = Some(origins.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url,
            openrouter_api_key: self.openrouter_api_key,
            openrouter_base_url: self
                .openrouter_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openrouter_base_url),
            openrouter_model: self.openrouter_model.unwrap_or(defaults.openrouter_model),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            cors_allowed_origins: self.cors_allowed_origins,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
