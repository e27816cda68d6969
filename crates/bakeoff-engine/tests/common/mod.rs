//! Scripted agents shared by the engine integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bakeoff_core::{Agent, AgentError};
use bakeoff_engine::{QuestionGenerator, ResponseJudge};

/// Replays canned replies in order and records every prompt it receives.
pub struct ScriptedAgent {
    name: String,
    provider: String,
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn new(name: &str, provider: &str) -> Self {
        Self {
            name: name.to_string(),
            provider: provider.to_string(),
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> &str {
        &self.provider
    }

    async fn call(&self, prompt: &str) -> Result<String, AgentError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AgentError::provider(&self.provider, message)),
            None => Err(AgentError::provider(&self.provider, "no scripted reply left")),
        }
    }
}

/// Judge JSON ranking the given `(agent, provider, score)` triples in order.
pub fn judgment_json(rankings: &[(&str, &str, f64)]) -> String {
    let rankings: Vec<serde_json::Value> = rankings
        .iter()
        .map(|(name, provider, score)| {
            serde_json::json!({
                "agentName": name,
                "provider": provider,
                "score": score,
                "strengths": ["clear structure"],
                "weaknesses": ["thin on evidence"],
                "rationale": format!("{name} was evaluated")
            })
        })
        .collect();

    serde_json::json!({ "rankings": rankings, "overallAnalysis": "Compared all answers." }).to_string()
}

pub fn generator(agent: &Arc<ScriptedAgent>) -> QuestionGenerator {
    QuestionGenerator::new(agent.clone())
}

pub fn judge(agent: &Arc<ScriptedAgent>) -> ResponseJudge {
    ResponseJudge::new(agent.clone())
}
