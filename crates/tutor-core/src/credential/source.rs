//! Origin of the effective credential

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a credential came from, ordered by precedence (highest first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CredentialSource {
    /// Supplied by the embedder, e.g. a command-line flag
    Override = 1,
    /// Persisted by the user through the key prompt
    Stored = 2,
    /// Shipped default from configuration
    BuiltIn = 3,
}

impl CredentialSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Stored => "stored key",
            Self::BuiltIn => "built-in default",
        }
    }

    /// Whether the user supplied this credential themselves
    pub fn is_user_configured(&self) -> bool {
        matches!(self, Self::Override | Self::Stored)
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
