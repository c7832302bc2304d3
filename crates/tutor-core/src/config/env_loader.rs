//! Environment variable overrides
//!
//! Variables are read through a lookup function so the rules can be tested
//! without touching the process environment.

use super::model::TutorConfig;
use crate::error::{TutorError, TutorResult};

/// Apply `TUTOR_*` overrides taken from `lookup`
pub fn apply_env_overrides<F>(config: &mut TutorConfig, lookup: F) -> TutorResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = read("TUTOR_BASE_URL") {
        config.base_url = base_url.trim().to_string();
    }

    if let Some(models) = read("TUTOR_MODELS") {
        config.models = models
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(max_sweeps) = read("TUTOR_MAX_SWEEPS") {
        config.retry.max_sweeps = max_sweeps
            .trim()
            .parse()
            .map_err(|_| TutorError::config("Invalid TUTOR_MAX_SWEEPS value"))?;
    }

    if let Some(key) = read("TUTOR_DEFAULT_API_KEY").or_else(|| read("GEMINI_API_KEY")) {
        config.default_api_key = Some(key.trim().to_string());
    }

    if let Some(level) = read("TUTOR_LOG_LEVEL") {
        config.logging.level = level.trim().to_lowercase();
    }

    Ok(())
}

/// Apply overrides from the process environment
pub fn apply_process_env(config: &mut TutorConfig) -> TutorResult<()> {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}
