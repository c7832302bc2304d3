//! The chat session

use super::guards::InputGate;
use super::outcome::{MessageOutcome, Reply, ReplySource};
use crate::context::{UserContext, UserContextProvider, load_or_default};
use crate::credential::{CredentialResolver, CredentialStore, ResolvedCredential};
use crate::display::{DisplaySink, IndicatorStatus, TurnRole, WorkingIndicator};
use crate::error::{TutorError, TutorResult};
use crate::llm::fallback::{ModelFallbackClient, SweepResult, TerminalReason};
use crate::prompt::PromptBuilder;
use crate::quick_response::QuickResponseMatcher;
use crate::recovery::{RetryController, RetryDecision, RetryPolicy};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// First assistant turn of an empty conversation
pub const WELCOME_MESSAGE: &str = "Hi! I'm your AI Learning Assistant.\n\
     Ask me anything about AI, Machine Learning, NLP, or Generative AI.\n\
     I search the web to give you the latest and most accurate answers!";

/// One conversation with the tutor
pub struct ChatSession {
    pub(super) matcher: QuickResponseMatcher,
    pub(super) prompt_builder: PromptBuilder,
    pub(super) client: ModelFallbackClient,
    pub(super) retry_policy: RetryPolicy,
    pub(super) credential_store: Arc<dyn CredentialStore>,
    pub(super) credential_override: RwLock<Option<String>>,
    pub(super) built_in_credential: Option<String>,
    pub(super) context_provider: Arc<dyn UserContextProvider>,
    pub(super) context: RwLock<Option<UserContext>>,
    pub(super) sink: Arc<dyn DisplaySink>,
    pub(super) in_flight: AtomicBool,
    pub(super) has_turns: AtomicBool,
}

impl ChatSession {
    /// Reload the learner context and greet an empty conversation
    pub async fn open(&self) {
        self.reload_user_context().await;
        if !self.has_turns.load(Ordering::Acquire) {
            self.append(WELCOME_MESSAGE, TurnRole::Assistant);
        }
    }

    /// Learner context as of the last open, loaded on first use
    pub async fn user_context(&self) -> UserContext {
        let cached = self.context.read().clone();
        match cached {
            Some(context) => context,
            None => self.reload_user_context().await,
        }
    }

    async fn reload_user_context(&self) -> UserContext {
        let context = load_or_default(self.context_provider.as_ref()).await;
        *self.context.write() = Some(context.clone());
        context
    }

    /// Replace the override credential; `None` or blank removes it
    pub fn set_credential_override(&self, value: Option<String>) {
        *self.credential_override.write() = value;
    }

    /// Persist the user's own key. Trimmed; blank clears it.
    pub fn store_credential(&self, value: &str) -> TutorResult<()> {
        self.credential_store.set_stored_credential(value)
    }

    /// Effective credential right now
    pub fn resolve_credential(&self) -> Option<ResolvedCredential> {
        let override_value = self.credential_override.read().clone();
        let stored = self.credential_store.stored_credential();
        CredentialResolver::resolve(
            override_value.as_deref(),
            stored.as_deref(),
            self.built_in_credential.as_deref(),
        )
    }

    /// Process one user message to completion.
    ///
    /// Blank input is ignored. Otherwise the message is echoed, input is
    /// disabled, and exactly one assistant turn is appended before input is
    /// enabled again.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn handle_message(&self, message: &str) -> MessageOutcome {
        let message = message.trim();
        if message.is_empty() {
            return MessageOutcome::Ignored;
        }

        let Some(_gate) = InputGate::acquire(&self.in_flight, self.sink.as_ref()) else {
            debug!("message rejected, another one is in flight");
            return MessageOutcome::Rejected(TutorError::Busy);
        };

        self.append(message, TurnRole::User);
        match self.process(message).await {
            Ok(reply) => {
                self.append(&reply.text, TurnRole::Assistant);
                MessageOutcome::Answered(reply)
            }
            Err(e) => {
                warn!(error = %e, category = e.category().display_name(), "message failed");
                self.append(&e.user_message(), TurnRole::Assistant);
                MessageOutcome::Failed(e)
            }
        }
    }

    /// Like [`handle_message`](Self::handle_message), abandoned when `token`
    /// is cancelled. Indicator and input state are restored either way.
    pub async fn handle_message_until(
        &self,
        message: &str,
        token: &CancellationToken,
    ) -> MessageOutcome {
        tokio::select! {
            outcome = self.handle_message(message) => outcome,
            _ = token.cancelled() => {
                info!("message processing cancelled");
                MessageOutcome::Cancelled
            }
        }
    }

    async fn process(&self, message: &str) -> TutorResult<Reply> {
        if let Some(quick) = self.matcher.find(message) {
            debug!(category = %quick.category, "answered locally");
            return Ok(Reply {
                text: quick.reply.to_string(),
                source: ReplySource::Quick(quick.category),
            });
        }

        let credential = self
            .resolve_credential()
            .ok_or(TutorError::MissingCredential)?;
        debug!(source = %credential.source(), "credential resolved");

        let context = self.user_context().await;
        let prompt = self.prompt_builder.build(message, &context);

        let indicator = WorkingIndicator::show(self.sink.as_ref());
        let mut controller = RetryController::new(&self.retry_policy);
        loop {
            let sweep = controller.state().sweeps_run();
            let report = self.client.sweep(&prompt, credential.value()).await;
            debug!(sweep, models = ?report.models_tried(), "sweep finished");

            match controller.on_sweep(report.result) {
                RetryDecision::Retry { delay, .. } => {
                    indicator.update(IndicatorStatus::RetryingIn(delay));
                    tokio::time::sleep(delay).await;
                    indicator.update(IndicatorStatus::Thinking);
                }
                RetryDecision::Finish(result) => {
                    indicator.remove();
                    return reply_from_sweep(result, sweep);
                }
            }
        }
    }

    fn append(&self, text: &str, role: TurnRole) {
        self.has_turns.store(true, Ordering::Release);
        self.sink.append_turn(text, role);
    }
}

fn reply_from_sweep(result: SweepResult, sweeps: u32) -> TutorResult<Reply> {
    match result {
        SweepResult::Success { model, text } => Ok(Reply {
            text,
            source: ReplySource::Model { model, sweeps },
        }),
        SweepResult::Terminal { reason, status, .. } => Err(match reason {
            TerminalReason::BadRequest => TutorError::InvalidRequest { status },
            TerminalReason::Forbidden => TutorError::PermissionDenied { status },
            TerminalReason::EmptyResponse => TutorError::EmptyReply { status },
            TerminalReason::Other => TutorError::Unknown { status },
        }),
        SweepResult::AllRateLimited => Err(TutorError::QuotaExhausted { sweeps }),
        SweepResult::AllUnavailable { last } => Err(TutorError::ServiceUnavailable { reason: last }),
    }
}
