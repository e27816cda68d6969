//! Anthropic Claude agent over the messages API.

use std::time::Instant;

use async_trait::async_trait;
use bakeoff_config::{AgentType, ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::MAX_TOKENS;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const TYPE: AgentType = AgentType::Claude;

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Default)]
struct Usage {
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Usage,
}

/// Agent for Anthropic's Claude models.
pub struct AnthropicAgent {
    client: Client,
    name: String,
    model: String,
    api_key: String,
    base_url: String,
}

impl AnthropicAgent {
    /// Creates an agent, resolving the key from `api_key` or `ANTHROPIC_API_KEY`.
    pub fn new(model: Option<&str>, api_key: Option<&str>, credentials: &Credentials) -> Result<Self, ConfigError> {
        let api_key = credentials.resolve(TYPE, api_key)?;
        let model = model.unwrap_or(DEFAULT_MODEL).to_string();

        Ok(Self {
            client: Client::new(),
            name: format!("{} {}", TYPE.family(), model),
            model,
            api_key,
            base_url: ANTHROPIC_API_BASE.to_string(),
        })
    }

    /// Overrides the API base (the `/messages` path is appended).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The model this agent requests.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Agent for AnthropicAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> &str {
        TYPE.provider()
    }

    async fn call(&self, prompt: &str) -> Result<String, AgentError> {
        let start = Instant::now();

        let request = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::provider(TYPE.family(), e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::provider(
                TYPE.family(),
                format!("HTTP status {}: {}", status, body),
            ));
        }

        let resp: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AgentError::provider(TYPE.family(), e))?;

        let content = resp
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .unwrap_or_default();

        info!(
            "{}: {}ms, tokens: {}/{} (in/out)",
            self.name,
            start.elapsed().as_millis(),
            resp.usage.input_tokens.unwrap_or(0),
            resp.usage.output_tokens.unwrap_or(0)
        );

        Ok(content)
    }
}
