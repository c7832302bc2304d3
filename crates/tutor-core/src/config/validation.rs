//! Configuration validation

use super::logging_config::LoggingConfig;
use super::model::TutorConfig;
use crate::error::{TutorError, TutorResult};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &TutorConfig) -> TutorResult<()> {
        Self::validate_endpoint(config)?;
        Self::validate_models(config)?;
        Self::validate_generation(config)?;
        Self::validate_retry(config)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    fn validate_endpoint(config: &TutorConfig) -> TutorResult<()> {
        let url = config.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(TutorError::config_with_context(
                format!("Invalid base URL '{}'", config.base_url),
                "base_url must start with http:// or https://",
            ));
        }
        if config.request_timeout.is_zero() {
            return Err(TutorError::config("request_timeout must be greater than zero"));
        }
        Ok(())
    }

    fn validate_models(config: &TutorConfig) -> TutorResult<()> {
        config.model_chain().map(|_| ())
    }

    fn validate_generation(config: &TutorConfig) -> TutorResult<()> {
        let generation = &config.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(TutorError::config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                generation.temperature
            )));
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(TutorError::config(format!(
                "top_p must be between 0.0 and 1.0, got {}",
                generation.top_p
            )));
        }
        if generation.max_output_tokens == 0 {
            return Err(TutorError::config("max_output_tokens must be greater than zero"));
        }
        Ok(())
    }

    fn validate_retry(config: &TutorConfig) -> TutorResult<()> {
        if config.retry.max_sweeps == 0 {
            return Err(TutorError::config("retry.max_sweeps must be at least 1"));
        }
        if config.retry.backoff_step.is_zero() {
            return Err(TutorError::config("retry.backoff_step must be greater than zero"));
        }
        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> TutorResult<()> {
        if !LoggingConfig::LEVELS.contains(&logging.level.as_str()) {
            return Err(TutorError::config(format!(
                "Invalid log level '{}'. Valid levels are: {:?}",
                logging.level,
                LoggingConfig::LEVELS
            )));
        }
        if !LoggingConfig::FORMATS.contains(&logging.format.as_str()) {
            return Err(TutorError::config(format!(
                "Invalid log format '{}'. Valid formats are: {:?}",
                logging.format,
                LoggingConfig::FORMATS
            )));
        }
        Ok(())
    }
}
