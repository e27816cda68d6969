use std::sync::Arc;

use bakeoff_config::{ConfigError, Credentials};
use bakeoff_core::{Agent, AgentError, AgentResponse, JudgmentResult, Leaderboard};
use bakeoff_llm::OpenAiAgent;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::prompts::judge_prompt;
use crate::question::HOST_MODEL;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Judgment {
    rankings: Vec<JudgmentResult>,
    overall_analysis: String,
}

/// Scores and ranks collected responses through a judge model.
pub struct ResponseJudge {
    agent: Arc<dyn Agent>,
}

impl ResponseJudge {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }

    /// Binds the judge to OpenAI `gpt-4o-mini`, using `api_key` or the
    /// ambient `OPENAI_API_KEY`.
    pub fn openai(api_key: Option<&str>, credentials: &Credentials) -> Result<Self, ConfigError> {
        let agent = OpenAiAgent::new(Some(HOST_MODEL), api_key, credentials)?;
        Ok(Self::new(Arc::new(agent)))
    }

    /// One judge call; an unparseable reply fails the whole judgment.
    pub async fn judge_responses(
        &self,
        question: &str,
        responses: &[AgentResponse],
    ) -> Result<Leaderboard, AgentError> {
        info!("JUDGE: Evaluating {} responses with {}", responses.len(), self.agent.name());

        let prompt = judge_prompt(question, responses);
        let raw = self.agent.call(&prompt).await?;
        debug!("Judge response: {}", raw);

        let leaderboard = parse_judgment(question, &raw)?;
        info!("JUDGE: Ranked {} agents", leaderboard.rankings.len());
        Ok(leaderboard)
    }
}

/// Parses the judge's JSON reply. Rankings are kept in the judge's order and
/// scores are not clamped.
fn parse_judgment(question: &str, raw: &str) -> Result<Leaderboard, AgentError> {
    let judgment: Judgment =
        serde_json::from_str(raw).map_err(|e| AgentError::JudgmentParse(e.to_string()))?;

    for ranking in judgment.rankings.iter().filter(|r| !(0.0..=100.0).contains(&r.score)) {
        warn!("JUDGE: Score {} for {} is outside 0-100", ranking.score, ranking.agent_name);
    }

    Ok(Leaderboard::new(question, judgment.rankings, judgment.overall_analysis))
}
