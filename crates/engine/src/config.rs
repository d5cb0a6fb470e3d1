//! Engine configuration loaded from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use crate::infrastructure::openai::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, DEFAULT_TIMEOUT_SECS,
};
use crate::infrastructure::resilient_llm::RetryConfig;

/// Port the engine listens on unless `SERVER_PORT`/`PORT` says otherwise.
pub const DEFAULT_SERVER_PORT: u16 = 5001;

/// Completion length cap sent with every turn.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Top-level engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `*` or a comma-separated list of origins; `None` disables CORS headers
    pub cors_allowed_origins: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            var: "SERVER_HOST",
            value: raw,
            reason: e.to_string(),
        })
    }
}

/// Completion service settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl LlmConfig {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            ..RetryConfig::default()
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => parse_value("SERVER_PORT", raw)?,
            None => DEFAULT_SERVER_PORT,
        };

        let server = ServerConfig {
            host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            cors_allowed_origins: match lookup("CORS_ALLOWED_ORIGINS") {
                Some(raw) if raw.trim().is_empty() => None,
                Some(raw) => Some(raw.trim().to_string()),
                None => Some("*".to_string()),
            },
        };

        let llm = LlmConfig {
            api_key: var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.into()),
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
            max_tokens: optional("LLM_MAX_TOKENS", var("LLM_MAX_TOKENS"))?
                .unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: optional("LLM_TEMPERATURE", var("LLM_TEMPERATURE"))?,
            timeout_secs: optional("LLM_TIMEOUT_SECS", var("LLM_TIMEOUT_SECS"))?
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            max_retries: optional("LLM_MAX_RETRIES", var("LLM_MAX_RETRIES"))?.unwrap_or(0),
        };

        Ok(Self { server, llm })
    }
}

fn parse_value<T>(var: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        reason: e.to_string(),
        value: raw,
    })
}

fn optional<T>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|raw| parse_value(var, raw)).transpose()
}
