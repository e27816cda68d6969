//! Llama models served through Together's OpenAI-compatible API.

use async_trait::async_trait;
use bakeoff_config::{AgentType, ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError};

use crate::compat::CompatClient;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.2-90b-text-preview";

/// Together API base; `/chat/completions` is appended.
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";

const TYPE: AgentType = AgentType::Llama;

/// Agent for Llama models hosted by Together (or any compatible base URL).
pub struct LlamaAgent {
    inner: CompatClient,
}

impl LlamaAgent {
    /// Creates an agent, resolving the key from `api_key` or `TOGETHER_API_KEY`.
    pub fn new(
        model: Option<&str>,
        api_key: Option<&str>,
        base_url: Option<&str>,
        credentials: &Credentials,
    ) -> Result<Self, ConfigError> {
        let api_key = credentials.resolve(TYPE, api_key)?;
        let model = model.unwrap_or(DEFAULT_MODEL).to_string();
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);

        Ok(Self {
            inner: CompatClient::new(TYPE, model, api_key, base_url),
        })
    }

    /// Overrides the API base.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.inner.set_base_url(base_url);
        self
    }

    /// The model this agent requests.
    pub fn model(&self) -> &str {
        &self.inner.model
    }
}

#[async_trait]
impl Agent for LlamaAgent {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn provider(&self) -> &str {
        TYPE.provider()
    }

    async fn call(&self, prompt: &str) -> Result<String, AgentError> {
        self.inner.complete(prompt).await
    }
}
