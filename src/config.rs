use std::env;

use crate::error::{OllamaError, Result};

pub const DEFAULT_HOST: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "x/flux2-klein:4b";

/// Client-level connection defaults.
///
/// Anything left unset here falls back to [`DEFAULT_HOST`] / [`DEFAULT_MODEL`].
/// A request that names its own host or model always wins over this config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OllamaConfig {
    pub host: Option<String>,
    pub model: Option<String>,
}

impl OllamaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("OLLAMA_HOST").ok().filter(|s| !s.trim().is_empty());
        let model = env::var("OLLAMA_MODEL").ok().filter(|s| !s.trim().is_empty());

        OllamaConfig { host, model }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn resolved_host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn resolved_model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn validate(&self) -> Result<()> {
        let host = self.resolved_host();
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(OllamaError::ConfigError(format!(
                "host must start with http:// or https://, got {:?}",
                host
            )));
        }
        if self.resolved_model().trim().is_empty() {
            return Err(OllamaError::ConfigError("model must not be empty".into()));
        }
        Ok(())
    }

    /// Fill the gaps in `self` from `other`.
    pub fn or(self, other: &OllamaConfig) -> Self {
        OllamaConfig {
            host: self.host.or_else(|| other.host.clone()),
            model: self.model.or_else(|| other.model.clone()),
        }
    }
}

/// `{host}/api/generate`, with the host used exactly as given.
pub fn generate_url(host: &str) -> String {
    format!("{}/api/generate", host)
}
