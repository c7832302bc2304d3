//! Learner context used to tailor prompts

use crate::error::TutorResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Level assumed when nothing is known about the learner
pub const DEFAULT_LEVEL: &str = "Beginner";

/// Proficiency level and recent quiz score of the learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub level: String,
    #[serde(default)]
    pub recent_score: Option<f64>,
}

impl UserContext {
    pub fn new(level: impl Into<String>, recent_score: Option<f64>) -> Self {
        let level = level.into();
        let level = if level.trim().is_empty() {
            DEFAULT_LEVEL.to_string()
        } else {
            level
        };
        Self {
            level,
            recent_score,
        }
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            recent_score: None,
        }
    }
}

/// Supplies the learner context when a conversation is opened
#[async_trait]
pub trait UserContextProvider: Send + Sync {
    /// Current context, or `None` when the learner has no profile yet
    async fn user_context(&self) -> TutorResult<Option<UserContext>>;
}

/// Provider returning a fixed context
#[derive(Debug, Clone, Default)]
pub struct StaticContextProvider {
    context: Option<UserContext>,
}

impl StaticContextProvider {
    pub fn new(context: Option<UserContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl UserContextProvider for StaticContextProvider {
    async fn user_context(&self) -> TutorResult<Option<UserContext>> {
        Ok(self.context.clone())
    }
}

/// Load the context, falling back to the default on absence or failure
pub async fn load_or_default(provider: &dyn UserContextProvider) -> UserContext {
    match provider.user_context().await {
        Ok(Some(context)) => UserContext::new(context.level, context.recent_score),
        Ok(None) => UserContext::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load user context, using defaults");
            UserContext::default()
        }
    }
}
