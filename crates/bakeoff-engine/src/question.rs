use std::sync::Arc;

use bakeoff_config::{ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError};
use bakeoff_llm::OpenAiAgent;
use tracing::info;

use crate::prompts::QUESTION_PROMPT;

/// Model that writes the benchmark question and judges the answers.
pub const HOST_MODEL: &str = "gpt-4o-mini";

/// Asks one model to invent the benchmark question.
pub struct QuestionGenerator {
    agent: Arc<dyn Agent>,
}

impl QuestionGenerator {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }

    /// Binds the generator to OpenAI `gpt-4o-mini`, using `api_key` or the
    /// ambient `OPENAI_API_KEY`.
    pub fn openai(api_key: Option<&str>, credentials: &Credentials) -> Result<Self, ConfigError> {
        let agent = OpenAiAgent::new(Some(HOST_MODEL), api_key, credentials)?;
        Ok(Self::new(Arc::new(agent)))
    }

    /// Returns the model's reply as-is, even when empty.
    pub async fn generate_benchmark_question(&self) -> Result<String, AgentError> {
        info!("QUESTION: Asking {} for a benchmark question", self.agent.name());
        self.agent.call(QUESTION_PROMPT).await
    }
}
