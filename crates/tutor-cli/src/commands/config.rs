//! Configuration management commands

use crate::console::CliConsole;
use std::path::Path;
use tutor_core::TutorConfig;
use tutor_core::config::save_to_file;
use tutor_core::error::{TutorError, TutorResult};

/// Create a configuration file with defaults
pub fn init(config_file: &Path, force: bool) -> TutorResult<()> {
    let console = CliConsole::new(true);
    console.print_header("Configuration Initialization");

    if config_file.exists() && !force {
        console.error(&format!(
            "Configuration file already exists: {}",
            config_file.display()
        ));
        console.info("Use --force to overwrite");
        return Err(TutorError::config("Configuration file already exists"));
    }

    save_to_file(&TutorConfig::default(), config_file)?;
    console.success(&format!(
        "Created configuration file: {}",
        config_file.display()
    ));
    console.info("Run `tutor key set` to store your Gemini API key");
    Ok(())
}

/// Print the effective configuration with keys redacted
pub fn show(config_file: &Path, config: &TutorConfig) -> TutorResult<()> {
    let console = CliConsole::new(true);
    console.print_header("Configuration");

    if config_file.exists() {
        console.success(&format!("Loaded configuration from: {}", config_file.display()));
    } else {
        console.warn(&format!(
            "Configuration file not found: {}",
            config_file.display()
        ));
        console.info("Using default configuration");
    }

    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    console.info(&format!(
        "Stored key file: {}",
        config.credentials_path().display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tutor_core::config::load_from_file;

    #[test]
    fn test_init_writes_defaults_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tutor_config.toml");

        init(&path, false).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), TutorConfig::default());

        assert!(init(&path, false).is_err());
        assert!(init(&path, true).is_ok());
    }
}
