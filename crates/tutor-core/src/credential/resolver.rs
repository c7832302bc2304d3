//! Pure precedence resolution

use super::source::CredentialSource;
use std::fmt;

/// A non-blank credential together with its source.
///
/// `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    value: String,
    source: CredentialSource,
}

impl ResolvedCredential {
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn masked_value(&self) -> String {
        mask_credential(&self.value)
    }
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("value", &self.masked_value())
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.masked_value(), self.source)
    }
}

/// Picks the effective credential
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialResolver;

impl CredentialResolver {
    /// First non-blank of override, stored, built-in.
    ///
    /// Values are trimmed. Deterministic with no side effects.
    pub fn resolve(
        override_value: Option<&str>,
        stored: Option<&str>,
        built_in: Option<&str>,
    ) -> Option<ResolvedCredential> {
        [
            (override_value, CredentialSource::Override),
            (stored, CredentialSource::Stored),
            (built_in, CredentialSource::BuiltIn),
        ]
        .into_iter()
        .find_map(|(value, source)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| ResolvedCredential::new(v, source))
        })
    }
}

/// Mask a key for display, keeping a short prefix and suffix
pub fn mask_credential(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
