//! File-based configuration loading

use super::model::TutorConfig;
use crate::error::{TutorError, TutorResult};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
    Yaml,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

/// Load configuration from a file
///
/// JSON, TOML and YAML are supported, based on the file extension.
/// Returns the default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> TutorResult<TutorConfig> {
    if !path.exists() {
        return Ok(TutorConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TutorError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let format = FileFormat::of(path);
    let parsed = match format {
        FileFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| {
        TutorError::config_with_context(
            format!("Failed to parse {} config: {}", format.name(), e),
            format!(
                "Deserializing {} configuration from '{}'",
                format.name(),
                path.display()
            ),
        )
    })
}

/// Write configuration in the format implied by the extension
pub fn save_to_file(config: &TutorConfig, path: &Path) -> TutorResult<()> {
    let format = FileFormat::of(path);
    let content = match format {
        FileFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
    }
    .map_err(|e| TutorError::config(format!("Failed to serialize {} config: {}", format.name(), e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| TutorError::io_at(e.to_string(), parent.display().to_string()))?;
    }
    fs::write(path, content).map_err(|e| TutorError::io_at(e.to_string(), path.display().to_string()))
}
