//! OpenAI chat-completion agent built on `async-openai`.

use std::time::{Duration, Instant};

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use bakeoff_config::{AgentType, ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError};
use tracing::info;

use crate::{MAX_TOKENS, TEMPERATURE};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const TYPE: AgentType = AgentType::OpenAi;

fn openai_err(e: impl ToString) -> AgentError {
    AgentError::provider(TYPE.family(), e)
}

/// SDK client with its 429 backoff disabled; a rate-limited call fails once.
fn client(config: OpenAIConfig) -> Client<OpenAIConfig> {
    let no_retry = ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build();
    Client::with_config(config).with_backoff(no_retry)
}

/// Agent for OpenAI chat models.
pub struct OpenAiAgent {
    client: Client<OpenAIConfig>,
    name: String,
    model: String,
    api_key: String,
}

impl OpenAiAgent {
    /// Creates an agent, resolving the key from `api_key` or `OPENAI_API_KEY`.
    pub fn new(model: Option<&str>, api_key: Option<&str>, credentials: &Credentials) -> Result<Self, ConfigError> {
        let api_key = credentials.resolve(TYPE, api_key)?;
        let model = model.unwrap_or(DEFAULT_MODEL).to_string();

        Ok(Self {
            client: client(OpenAIConfig::new().with_api_key(&api_key)),
            name: format!("{} {}", TYPE.family(), model),
            model,
            api_key,
        })
    }

    /// Points the agent at another OpenAI-compatible API base (e.g. a proxy).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(&self.api_key)
            .with_api_base(base_url.trim_end_matches('/'));
        self.client = client(config);
        self
    }

    /// The model this agent requests.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Agent for OpenAiAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> &str {
        TYPE.provider()
    }

    async fn call(&self, prompt: &str) -> Result<String, AgentError> {
        let start = Instant::now();

        let message = ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(openai_err)?,
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE)
            .build()
            .map_err(openai_err)?;

        let response = self.client.chat().create(request).await.map_err(openai_err)?;

        let (input_tokens, output_tokens) = response
            .usage
            .as_ref()
            .map(|u| (u.prompt_tokens, u.completion_tokens))
            .unwrap_or((0, 0));

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        info!(
            "{}: {}ms, tokens: {}/{} (in/out)",
            self.name,
            start.elapsed().as_millis(),
            input_tokens,
            output_tokens
        );

        Ok(content)
    }
}
