//! Persistence of the user-supplied key

use crate::error::{TutorError, TutorResult};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Entry name of the Gemini key inside the credentials file
pub const CREDENTIAL_PROVIDER: &str = "gemini";

/// Durable slot for the user's own key
pub trait CredentialStore: Send + Sync {
    /// The stored key, if any
    fn stored_credential(&self) -> Option<String>;

    /// Store a key. The value is trimmed; a blank value clears the slot.
    fn set_stored_credential(&self, value: &str) -> TutorResult<()>;
}

/// On-disk JSON layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialsFile {
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
}

impl CredentialsFile {
    /// Read the file; `None` when it is missing or unreadable
    pub fn load(path: &Path) -> Option<Self> {
        match Self::read(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to load credentials file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Read the file; `Ok(None)` only when it does not exist
    pub fn read(path: &Path) -> TutorResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| TutorError::io_at(e.to_string(), path.display().to_string()))?;
        serde_json::from_str(&content).map(Some).map_err(|e| {
            TutorError::config_with_context(
                format!("Credentials file {} is not valid JSON: {}", path.display(), e),
                "Fix or remove the file before storing a key",
            )
        })
    }

    pub fn save(&self, path: &Path) -> TutorResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TutorError::io_at(e.to_string(), parent.display().to_string()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| TutorError::io_at(e.to_string(), path.display().to_string()))?;
        restrict_permissions(path);
        Ok(())
    }

    pub fn get_api_key(&self, provider: &str) -> Option<&str> {
        self.api_keys.get(provider).map(String::as_str)
    }

    pub fn set_api_key(&mut self, provider: impl Into<String>, key: impl Into<String>) {
        self.api_keys.insert(provider.into(), key.into());
    }

    pub fn remove_api_key(&mut self, provider: &str) -> Option<String> {
        self.api_keys.remove(provider)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)) {
        warn!("Failed to restrict permissions of {}: {}", path.display(), e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}

/// Key kept in a JSON credentials file, e.g. `~/.tutor/credentials.json`
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn stored_credential(&self) -> Option<String> {
        CredentialsFile::load(&self.path)?
            .get_api_key(CREDENTIAL_PROVIDER)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }

    fn set_stored_credential(&self, value: &str) -> TutorResult<()> {
        let _guard = self.write_lock.lock();
        // Never overwrite a file that holds entries we cannot parse
        let mut file = CredentialsFile::read(&self.path)?.unwrap_or_default();
        let value = value.trim();
        if value.is_empty() {
            if file.remove_api_key(CREDENTIAL_PROVIDER).is_none() {
                return Ok(());
            }
            debug!(path = %self.path.display(), "clearing stored key");
        } else {
            debug!(path = %self.path.display(), "storing key");
            file.set_api_key(CREDENTIAL_PROVIDER, value);
        }
        file.save(&self.path)
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    value: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let store = Self::new();
        // Cannot fail for the in-memory store
        let _ = store.set_stored_credential(&value.into());
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn stored_credential(&self) -> Option<String> {
        self.value.read().clone()
    }

    fn set_stored_credential(&self, value: &str) -> TutorResult<()> {
        let value = value.trim();
        *self.value.write() = (!value.is_empty()).then(|| value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested/credentials.json"));
        assert_eq!(store.stored_credential(), None);

        store.set_stored_credential("  my-key \n").unwrap();
        assert_eq!(store.stored_credential().as_deref(), Some("my-key"));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"gemini\": \"my-key\""));
    }

    #[test]
    fn test_blank_value_clears_file_store() {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));
        store.set_stored_credential("my-key").unwrap();
        store.set_stored_credential("   ").unwrap();
        assert_eq!(store.stored_credential(), None);
    }

    #[test]
    fn test_other_entries_are_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, r#"{"api_keys":{"other":"x"}}"#).unwrap();

        let store = FileCredentialStore::new(&path);
        store.set_stored_credential("k").unwrap();

        let file = CredentialsFile::load(&path).unwrap();
        assert_eq!(file.get_api_key("other"), Some("x"));
        assert_eq!(file.get_api_key(CREDENTIAL_PROVIDER), Some("k"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(FileCredentialStore::new(&path).stored_credential(), None);
    }

    #[test]
    fn test_corrupt_file_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        let corrupt = r#"{"api_keys":{"other":"x"},"#;
        std::fs::write(&path, corrupt).unwrap();

        let result = FileCredentialStore::new(&path).set_stored_credential("k");

        assert!(matches!(result, Err(TutorError::Config { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), corrupt);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryCredentialStore::with_value(" abc ");
        assert_eq!(store.stored_credential().as_deref(), Some("abc"));
        store.set_stored_credential("").unwrap();
        assert_eq!(store.stored_credential(), None);
    }
}
