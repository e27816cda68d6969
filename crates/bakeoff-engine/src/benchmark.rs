use std::sync::Arc;

use bakeoff_config::{ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError, AgentResponse, BenchmarkResult};
use thiserror::Error;

use crate::observer::{BenchmarkObserver, TracingObserver};
use crate::prompts::analysis_prompt;
use crate::{QuestionGenerator, ResponseJudge};

/// Errors from [`run_benchmark`]: setup or a fatal step.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Question generation → sequential fan-out → judging.
pub struct BenchmarkRunner {
    question_generator: QuestionGenerator,
    judge: ResponseJudge,
    observer: Arc<dyn BenchmarkObserver>,
}

impl BenchmarkRunner {
    pub fn new(question_generator: QuestionGenerator, judge: ResponseJudge) -> Self {
        Self {
            question_generator,
            judge,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Generator and judge both on OpenAI, sharing the same credential override.
    pub fn openai(api_key: Option<&str>, credentials: &Credentials) -> Result<Self, ConfigError> {
        Ok(Self::new(
            QuestionGenerator::openai(api_key, credentials)?,
            ResponseJudge::openai(api_key, credentials)?,
        ))
    }

    /// Replaces the default tracing narration.
    pub fn with_observer(mut self, observer: impl BenchmarkObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Runs one benchmark over `agents`.
    ///
    /// Question generation and judging failures are fatal. A failing agent is
    /// left out of `responses` and the loop moves on; `total_agents` still
    /// counts it.
    pub async fn run(&self, agents: &[Arc<dyn Agent>]) -> Result<BenchmarkResult, AgentError> {
        let question = self.question_generator.generate_benchmark_question().await?;
        self.observer.question_generated(&question);

        let prompt = analysis_prompt(&question);
        let mut responses = Vec::with_capacity(agents.len());

        for (index, agent) in agents.iter().enumerate() {
            self.observer.agent_started(index, agents.len(), agent.as_ref());

            match agent.call(&prompt).await {
                Ok(response) => {
                    self.observer.agent_responded(agent.as_ref(), &response);
                    responses.push(AgentResponse::from_agent(agent.as_ref(), response));
                }
                Err(e) => self.observer.agent_failed(agent.as_ref(), &e),
            }
        }

        self.observer.judging_started(responses.len());
        let leaderboard = self.judge.judge_responses(&question, &responses).await?;

        let result = BenchmarkResult {
            question,
            responses,
            leaderboard,
            total_agents: agents.len(),
        };

        self.observer.benchmark_completed(&result);
        Ok(result)
    }
}

/// Runs a benchmark with the OpenAI-hosted generator and judge.
///
/// `api_key` overrides the ambient `OPENAI_API_KEY` for both roles.
pub async fn run_benchmark(
    agents: &[Arc<dyn Agent>],
    api_key: Option<&str>,
    credentials: &Credentials,
) -> Result<BenchmarkResult, BenchmarkError> {
    let runner = BenchmarkRunner::openai(api_key, credentials)?;
    Ok(runner.run(agents).await?)
}
