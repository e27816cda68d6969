//! Plain-reqwest client for OpenAI-compatible `/chat/completions` endpoints.
//!
//! Together and Deepseek both speak this dialect with bearer auth, so their
//! agents share one request/response shape and differ only in defaults.

use std::time::Instant;

use bakeoff_config::AgentType;
use bakeoff_core::AgentError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{MAX_TOKENS, TEMPERATURE};

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Default)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

/// Connection details for one OpenAI-compatible provider.
pub(crate) struct CompatClient {
    client: Client,
    agent_type: AgentType,
    pub(crate) name: String,
    pub(crate) model: String,
    api_key: String,
    base_url: String,
}

impl CompatClient {
    pub(crate) fn new(agent_type: AgentType, model: String, api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            agent_type,
            name: format!("{} {}", agent_type.family(), model),
            model,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.trim_end_matches('/').to_string();
    }

    fn err(&self, cause: impl ToString) -> AgentError {
        AgentError::provider(self.agent_type.family(), cause)
    }

    /// Sends a single user message and returns the first choice's text.
    pub(crate) async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        let start = Instant::now();

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.err(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.err(format!("HTTP status {}: {}", status, body)));
        }

        let resp: ChatResponse = response.json().await.map_err(|e| self.err(e))?;

        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        info!(
            "{}: {}ms, tokens: {}/{} (in/out)",
            self.name,
            start.elapsed().as_millis(),
            resp.usage.prompt_tokens.unwrap_or(0),
            resp.usage.completion_tokens.unwrap_or(0)
        );

        Ok(content)
    }
}
