//! Configuration
//!
//! Loaded from a file (format picked by extension, JSON by default), then
//! overridden from `TUTOR_*` environment variables, then validated.

mod env_loader;
mod file_loader;
mod logging_config;
mod model;
mod validation;

pub use env_loader::{apply_env_overrides, apply_process_env};
pub use file_loader::{load_from_file, save_to_file};
pub use logging_config::LoggingConfig;
pub use model::{DEFAULT_CONFIG_FILE, GenerationSettings, TutorConfig};
pub use validation::ConfigValidator;

use crate::error::TutorResult;
use std::path::Path;

/// File, then process environment, then validation
pub fn load_config(path: &Path) -> TutorResult<TutorConfig> {
    let mut config = load_from_file(path)?;
    apply_process_env(&mut config)?;
    ConfigValidator::validate(&config)?;
    Ok(config)
}
