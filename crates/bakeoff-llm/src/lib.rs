//! Provider agents for the hosted LLM APIs bakeoff compares.
//!
//! Each agent performs one chat-completion round trip per call and reduces
//! the provider's envelope to plain text:
//!
//! - [`OpenAiAgent`] — OpenAI chat completions via `async-openai`
//! - [`AnthropicAgent`] — Claude models via the Anthropic messages API
//! - [`LlamaAgent`] — Llama models served by Together (OpenAI-compatible)
//! - [`DeepseekAgent`] — Deepseek chat completions (OpenAI-compatible)
//! - [`AgentFactory`] — Builds any of the above from an [`AgentConfig`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bakeoff_config::{AgentConfig, AgentType, Credentials};
//! use bakeoff_llm::AgentFactory;
//!
//! let factory = AgentFactory::new(Credentials::from_env());
//! let agent = factory.create_agent(&AgentConfig::new(AgentType::Claude))?;
//! let reply = agent.call("What is the capital of France?").await?;
//! ```
//!
//! [`AgentConfig`]: bakeoff_config::AgentConfig

mod anthropic;
mod compat;
mod deepseek;
mod factory;
mod openai;
mod together;

pub use anthropic::AnthropicAgent;
pub use deepseek::DeepseekAgent;
pub use factory::AgentFactory;
pub use openai::OpenAiAgent;
pub use together::LlamaAgent;

/// Completion budget sent with every provider request.
pub const MAX_TOKENS: u32 = 1000;

/// Sampling temperature for providers that accept one per request.
pub const TEMPERATURE: f32 = 0.7;
