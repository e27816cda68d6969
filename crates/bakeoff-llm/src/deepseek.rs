//! Deepseek chat-completion agent.

use async_trait::async_trait;
use bakeoff_config::{AgentType, ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError};

use crate::compat::CompatClient;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";

const TYPE: AgentType = AgentType::Deepseek;

/// Agent for Deepseek models.
pub struct DeepseekAgent {
    inner: CompatClient,
}

impl DeepseekAgent {
    /// Creates an agent, resolving the key from `api_key` or `DEEPSEEK_API_KEY`.
    pub fn new(model: Option<&str>, api_key: Option<&str>, credentials: &Credentials) -> Result<Self, ConfigError> {
        let api_key = credentials.resolve(TYPE, api_key)?;
        let model = model.unwrap_or(DEFAULT_MODEL).to_string();

        Ok(Self {
            inner: CompatClient::new(TYPE, model, api_key, DEEPSEEK_API_BASE),
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
impl Agent for DeepseekAgent {
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
