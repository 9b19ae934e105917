use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::CompletionRequest;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const EMPTY_CONFIG: &str = "Config not found or empty.";

/// Process-wide settings, loaded once from `config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub company: CompanyConfig,
    pub author: AuthorConfig,
    pub style: StyleConfig,
    pub content: ContentConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub tone_rules: String,
    pub banned_phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub pillars: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Config(format!("Config file missing: {}", path.display())));
        }
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&raw)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::Config(EMPTY_CONFIG.to_string()));
        }
        let document: serde_yaml::Value = serde_yaml::from_str(raw)?;
        if document.is_null() {
            return Err(Error::Config(EMPTY_CONFIG.to_string()));
        }
        let config: AppConfig = serde_yaml::from_value(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.generation.validate()
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Config("generation.model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "generation.temperature must be within [0, 2], got {}",
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(Error::Config(
                "generation.max_output_tokens must be positive".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "generation.request_timeout_secs must be positive".to_string(),
            ));
        }
        self.endpoint("responses")?;
        Ok(())
    }

    /// Resolve `path` against `base_url`, which is treated as a directory.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .and_then(|url| url.join(path))
            .map_err(|e| Error::Config(format!("Invalid generation.base_url {:?}: {}", self.base_url, e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            prompt: prompt.into(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}
