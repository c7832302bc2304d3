//! Sweep over the model chain

use super::chain::ModelChain;
use super::types::{
    ModelAttempt, ModelOutcome, SweepReport, SweepResult, TerminalReason, TransientReason,
};
use crate::llm::gemini::{
    GenerateContentRequest, GenerateContentResponse, ModelTransport, RequestOptions,
    TransportReply,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Calls the models of a chain in order until one answers
pub struct ModelFallbackClient {
    chain: ModelChain,
    transport: Arc<dyn ModelTransport>,
    options: RequestOptions,
}

impl ModelFallbackClient {
    pub fn new(chain: ModelChain, transport: Arc<dyn ModelTransport>) -> Self {
        Self {
            chain,
            transport,
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn chain(&self) -> &ModelChain {
        &self.chain
    }

    /// Run one sweep for the prompt.
    ///
    /// Every model is called at most once, in chain order. The credential is
    /// passed through to the transport and never logged.
    #[instrument(skip_all, fields(models = self.chain.len()))]
    pub async fn sweep(&self, prompt: &str, credential: &str) -> SweepReport {
        let request = GenerateContentRequest::new(prompt, &self.options);
        let mut attempts = Vec::with_capacity(self.chain.len());
        let mut rate_limited = false;
        let mut last_transient = TransientReason::Unavailable;

        for model in self.chain.iter() {
            let outcome = match self.transport.send(model, credential, &request).await {
                Ok(reply) => classify_reply(&reply),
                Err(e) => {
                    warn!(model, error = %e, timed_out = e.timed_out, "model call failed");
                    ModelOutcome::Transient(TransientReason::NetworkError)
                }
            };
            attempts.push(ModelAttempt {
                model: model.to_string(),
                outcome: outcome.clone(),
            });

            match outcome {
                ModelOutcome::Success { text } => {
                    info!(model, "model answered");
                    let result = SweepResult::Success {
                        model: model.to_string(),
                        text,
                    };
                    return SweepReport { result, attempts };
                }
                ModelOutcome::Terminal { reason, status } => {
                    warn!(model, status, %reason, "model call failed terminally");
                    let result = SweepResult::Terminal {
                        model: model.to_string(),
                        reason,
                        status,
                    };
                    return SweepReport { result, attempts };
                }
                ModelOutcome::Transient(reason) => {
                    debug!(model, %reason, "trying next model");
                    rate_limited |= reason == TransientReason::RateLimited;
                    last_transient = reason;
                }
            }
        }

        let result = if rate_limited {
            SweepResult::AllRateLimited
        } else {
            SweepResult::AllUnavailable {
                last: last_transient,
            }
        };
        SweepReport { result, attempts }
    }
}

/// Classify a completed HTTP exchange with one model
pub fn classify_reply(reply: &TransportReply) -> ModelOutcome {
    match reply.status {
        200..=299 => match serde_json::from_str::<GenerateContentResponse>(&reply.body) {
            Ok(response) => match response.text() {
                Some(text) => ModelOutcome::Success { text },
                None => ModelOutcome::Terminal {
                    reason: TerminalReason::EmptyResponse,
                    status: reply.status,
                },
            },
            Err(e) => {
                warn!(error = %e, "unreadable model response body");
                ModelOutcome::Terminal {
                    reason: TerminalReason::Other,
                    status: reply.status,
                }
            }
        },
        429 => ModelOutcome::Transient(TransientReason::RateLimited),
        404 => ModelOutcome::Transient(TransientReason::Unavailable),
        400 => ModelOutcome::Terminal {
            reason: TerminalReason::BadRequest,
            status: 400,
        },
        403 => ModelOutcome::Terminal {
            reason: TerminalReason::Forbidden,
            status: 403,
        },
        status => ModelOutcome::Terminal {
            reason: TerminalReason::Other,
            status,
        },
    }
}
