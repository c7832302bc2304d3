//! Builder for chat sessions

use super::chat::ChatSession;
use crate::config::TutorConfig;
use crate::context::{StaticContextProvider, UserContextProvider};
use crate::credential::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use crate::display::DisplaySink;
use crate::error::TutorResult;
use crate::llm::fallback::{ModelChain, ModelFallbackClient};
use crate::llm::gemini::{GeminiTransport, ModelTransport};
use crate::prompt::PromptBuilder;
use crate::quick_response::QuickResponseMatcher;
use crate::recovery::RetryPolicy;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Assembles a [`ChatSession`] from its collaborators
pub struct ChatSessionBuilder {
    client: ModelFallbackClient,
    sink: Arc<dyn DisplaySink>,
    prompt_builder: PromptBuilder,
    retry_policy: RetryPolicy,
    credential_store: Arc<dyn CredentialStore>,
    credential_override: Option<String>,
    built_in_credential: Option<String>,
    context_provider: Arc<dyn UserContextProvider>,
}

impl ChatSessionBuilder {
    pub fn new(client: ModelFallbackClient, sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            client,
            sink,
            prompt_builder: PromptBuilder::new(),
            retry_policy: RetryPolicy::default(),
            credential_store: Arc::new(MemoryCredentialStore::new()),
            credential_override: None,
            built_in_credential: None,
            context_provider: Arc::new(StaticContextProvider::default()),
        }
    }

    /// Builder wired from configuration: HTTP transport, model chain,
    /// request options, retry policy, prompt names, file credential store
    /// and built-in key.
    pub fn from_config(config: &TutorConfig, sink: Arc<dyn DisplaySink>) -> TutorResult<Self> {
        let transport = GeminiTransport::new(&config.base_url, config.request_timeout)?;
        Self::from_config_with_transport(config, Arc::new(transport), sink)
    }

    /// Same as [`from_config`](Self::from_config) over a caller-supplied transport
    pub fn from_config_with_transport(
        config: &TutorConfig,
        transport: Arc<dyn ModelTransport>,
        sink: Arc<dyn DisplaySink>,
    ) -> TutorResult<Self> {
        let chain: ModelChain = config.model_chain()?;
        let client =
            ModelFallbackClient::new(chain, transport).with_options(config.request_options());

        Ok(Self::new(client, sink)
            .prompt_builder(config.prompt_builder())
            .retry_policy(config.retry.clone())
            .credential_store(Arc::new(FileCredentialStore::new(config.credentials_path())))
            .built_in_credential(config.default_api_key.clone()))
    }

    pub fn prompt_builder(mut self, prompt_builder: PromptBuilder) -> Self {
        self.prompt_builder = prompt_builder;
        self
    }

    pub fn retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credential_store = store;
        self
    }

    pub fn credential_override(mut self, value: Option<String>) -> Self {
        self.credential_override = value;
        self
    }

    pub fn built_in_credential(mut self, value: Option<String>) -> Self {
        self.built_in_credential = value;
        self
    }

    pub fn context_provider(mut self, provider: Arc<dyn UserContextProvider>) -> Self {
        self.context_provider = provider;
        self
    }

    pub fn build(self) -> ChatSession {
        ChatSession {
            matcher: QuickResponseMatcher::new(),
            prompt_builder: self.prompt_builder,
            client: self.client,
            retry_policy: self.retry_policy,
            credential_store: self.credential_store,
            credential_override: RwLock::new(self.credential_override),
            built_in_credential: self.built_in_credential,
            context_provider: self.context_provider,
            context: RwLock::new(None),
            sink: self.sink,
            in_flight: AtomicBool::new(false),
            has_turns: AtomicBool::new(false),
        }
    }
}
