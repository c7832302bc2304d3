//! From trait implementations for TutorError conversions

use super::types::TutorError;

impl From<std::io::Error> for TutorError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for TutorError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: error.to_string(),
        }
    }
}
