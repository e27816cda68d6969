//! Core domain types and error definitions for bakeoff.
//!
//! This crate provides the fundamental types shared across the workspace:
//!
//! - [`Agent`] — A named binding to one hosted model that answers a prompt
//! - [`AgentError`] — Error type for provider calls and judging
//! - [`AgentResponse`] — One agent's answer to the benchmark question
//! - [`JudgmentResult`] and [`Leaderboard`] — The judge's ranked verdict
//! - [`BenchmarkResult`] — Everything a benchmark run produced
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use bakeoff_core::{Agent, AgentError};
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl Agent for Echo {
//!     fn name(&self) -> &str {
//!         "Echo"
//!     }
//!
//!     fn provider(&self) -> &str {
//!         "Local"
//!     }
//!
//!     async fn call(&self, prompt: &str) -> Result<String, AgentError> {
//!         Ok(prompt.to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while calling a provider or judging responses.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A provider call failed: transport, HTTP status, or body decoding.
    #[error("{provider} API error: {message}")]
    Provider { provider: String, message: String },

    /// The judge replied with something that is not a valid judgment payload.
    #[error("Failed to parse judgment response: {0}")]
    JudgmentParse(String),
}

impl AgentError {
    /// Wraps any error as a provider failure labeled with the provider family.
    pub fn provider(provider: impl Into<String>, cause: impl ToString) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: cause.to_string(),
        }
    }
}

/// A named capability bound to one hosted LLM provider and model.
///
/// Implementations perform a single round trip per [`Agent::call`] and hold
/// only immutable configuration resolved at construction time.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Display name, unique per run by convention (e.g. `"Claude claude-3-5-sonnet-20241022"`).
    fn name(&self) -> &str;

    /// Provider label (e.g. `"Anthropic"`).
    fn provider(&self) -> &str;

    /// Sends `prompt` and returns the text completion, or `""` if the
    /// provider returned none.
    async fn call(&self, prompt: &str) -> Result<String, AgentError>;
}

/// An answer collected from one agent that completed without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub agent_name: String,
    pub provider: String,
    pub response: String,
}

impl AgentResponse {
    /// Records `response` as produced by `agent`.
    pub fn from_agent(agent: &dyn Agent, response: String) -> Self {
        Self {
            agent_name: agent.name().to_string(),
            provider: agent.provider().to_string(),
            response,
        }
    }
}

/// The judge's assessment of a single agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgmentResult {
    pub agent_name: String,
    pub provider: String,
    /// Expected in `0..=100`; taken as the judge supplied it.
    pub score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub rationale: String,
}

/// Ranked verdict over every collected response.
///
/// `rankings` keeps the order the judge returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub question: String,
    pub rankings: Vec<JudgmentResult>,
    pub overall_analysis: String,
    pub timestamp: DateTime<Utc>,
}

impl Leaderboard {
    /// Builds a leaderboard stamped with the current instant.
    pub fn new(question: impl Into<String>, rankings: Vec<JudgmentResult>, overall_analysis: String) -> Self {
        Self {
            question: question.into(),
            rankings,
            overall_analysis,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub question: String,
    pub responses: Vec<AgentResponse>,
    pub leaderboard: Leaderboard,
    /// Number of agents attempted, including those that failed.
    pub total_agents: usize,
}

impl BenchmarkResult {
    /// Number of agents that failed to answer.
    pub fn failed_agents(&self) -> usize {
        self.total_agents.saturating_sub(self.responses.len())
    }
}
