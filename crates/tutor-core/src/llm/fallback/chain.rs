//! Ordered, non-empty list of model identifiers

use crate::error::{TutorError, TutorResult};

/// Models tried by default, most preferred first
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
    "gemini-2.5-flash-lite",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChain {
    models: Vec<String>,
}

impl ModelChain {
    /// Build a chain; rejects an empty list and blank identifiers
    pub fn new<I, S>(models: I) -> TutorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models: Vec<String> = models.into_iter().map(Into::into).collect();
        if models.is_empty() {
            return Err(TutorError::config("model chain must contain at least one model"));
        }
        if let Some(position) = models.iter().position(|m| m.trim().is_empty()) {
            return Err(TutorError::config_with_context(
                "model identifiers must not be blank",
                format!("models[{position}]"),
            ));
        }
        Ok(Self { models })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for ModelChain {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let chain = ModelChain::default();
        assert_eq!(
            chain.iter().collect::<Vec<_>>(),
            vec![
                "gemini-2.0-flash",
                "gemini-2.0-flash-lite",
                "gemini-2.5-flash-lite"
            ]
        );
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(ModelChain::new(Vec::<String>::new()).is_err());
        assert!(ModelChain::new(["gemini-2.0-flash", " "]).is_err());
        assert_eq!(ModelChain::new(["a", "b"]).unwrap().len(), 2);
    }
}
