//! Stored API key management

use crate::args::{Cli, KeyAction};
use crate::console::CliConsole;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;
use tutor_core::TutorConfig;
use tutor_core::credential::{
    CredentialResolver, CredentialStore, FileCredentialStore, ResolvedCredential,
};
use tutor_core::error::{TutorError, TutorResult};

pub fn run(cli: &Cli, config: &TutorConfig, action: &KeyAction) -> TutorResult<()> {
    let console = CliConsole::new(true);
    let store = FileCredentialStore::new(config.credentials_path());

    match action {
        KeyAction::Set { value } => {
            let value = match value {
                Some(value) => value.clone(),
                None => prompt_for_key()?,
            };
            store.set_stored_credential(&value)?;
            if value.trim().is_empty() {
                console.success("Stored API key cleared");
            } else {
                console.success(&format!("API key saved to {}", store.path().display()));
            }
        }
        KeyAction::Clear => {
            store.set_stored_credential("")?;
            console.success("Stored API key cleared");
        }
        KeyAction::Status => {
            let stored = store.stored_credential();
            let resolved = CredentialResolver::resolve(
                cli.api_key.as_deref(),
                stored.as_deref(),
                config.default_api_key.as_deref(),
            );
            match resolved {
                Some(credential) => {
                    console.success(&status_line(&credential));
                    if !credential.source().is_user_configured() {
                        console.info("Run `tutor key set` to use your own Gemini API key.");
                    }
                }
                None => console.warn(
                    "No API key configured. Run `tutor key set` to add your Gemini API key.",
                ),
            }
        }
    }
    Ok(())
}

fn status_line(credential: &ResolvedCredential) -> String {
    let owner = if credential.source().is_user_configured() {
        "your key"
    } else {
        "shared default"
    };
    format!(
        "Using {} from {} ({})",
        credential.masked_value(),
        credential.source(),
        owner
    )
}

fn prompt_for_key() -> TutorResult<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Gemini API key (leave empty to clear)")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| TutorError::Io {
            message: e.to_string(),
            path: None,
        })
}
