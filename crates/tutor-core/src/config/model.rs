//! Configuration model

use super::logging_config::LoggingConfig;
use crate::credential::mask_credential;
use crate::error::TutorResult;
use crate::llm::fallback::{DEFAULT_MODELS, ModelChain};
use crate::llm::gemini::{
    DEFAULT_BASE_URL, DEFAULT_SAFETY_THRESHOLD, GenerationConfig, RequestOptions,
};
use crate::prompt::{DEFAULT_ASSISTANT_NAME, DEFAULT_PLATFORM_NAME, PromptBuilder};
use crate::recovery::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tutor_config.json";

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let defaults = GenerationConfig::default();
        Self {
            max_output_tokens: defaults.max_output_tokens,
            temperature: defaults.temperature,
            top_p: defaults.top_p,
            top_k: defaults.top_k,
        }
    }
}

impl From<&GenerationSettings> for GenerationConfig {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            max_output_tokens: settings.max_output_tokens,
            temperature: settings.temperature,
            top_p: settings.top_p,
            top_k: settings.top_k,
        }
    }
}

/// Complete tutor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Root of the model endpoints, `{base_url}/{model}:generateContent`
    pub base_url: String,
    /// Models in fallback order
    pub models: Vec<String>,
    pub generation: GenerationSettings,
    /// Request Google Search grounding
    pub grounding: bool,
    pub safety_threshold: String,
    pub retry: RetryPolicy,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Built-in fallback credential, lowest precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_api_key: Option<String>,
    /// Where the user's own key is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_path: Option<PathBuf>,
    pub assistant_name: String,
    pub platform_name: String,
    pub logging: LoggingConfig,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            generation: GenerationSettings::default(),
            grounding: true,
            safety_threshold: DEFAULT_SAFETY_THRESHOLD.to_string(),
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(30),
            default_api_key: None,
            credentials_path: None,
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            platform_name: DEFAULT_PLATFORM_NAME.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TutorConfig {
    pub fn model_chain(&self) -> TutorResult<ModelChain> {
        ModelChain::new(self.models.iter().cloned())
    }

    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            generation: GenerationConfig::from(&self.generation),
            grounding: self.grounding,
            safety_threshold: self.safety_threshold.clone(),
        }
    }

    pub fn prompt_builder(&self) -> PromptBuilder {
        PromptBuilder::with_names(&self.assistant_name, &self.platform_name)
    }

    /// Configured path, or `~/.tutor/credentials.json`
    pub fn credentials_path(&self) -> PathBuf {
        self.credentials_path.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tutor")
                .join("credentials.json")
        })
    }

    /// Copy safe for printing: the built-in key is masked
    pub fn redacted(&self) -> Self {
        Self {
            default_api_key: self.default_api_key.as_deref().map(mask_credential),
            ..self.clone()
        }
    }
}
