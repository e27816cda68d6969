//! Benchmark orchestration and prompt chaining.
//!
//! - [`BenchmarkRunner`] — generates a question, asks every agent, has a judge rank them
//! - [`QuestionGenerator`] and [`ResponseJudge`] — the two host-model roles
//! - [`BenchmarkObserver`] — progress hook, [`TracingObserver`] by default
//! - [`run_prompt_chain`] — two dependent calls, idea then central feature
//! - [`probe`] — smoke-test agents with one simple prompt
//!
//! # Example
//!
//! ```rust,ignore
//! use bakeoff_config::Credentials;
//! use bakeoff_engine::BenchmarkRunner;
//! use bakeoff_llm::AgentFactory;
//!
//! let credentials = Credentials::from_env();
//! let agents = AgentFactory::new(credentials.clone()).standard_benchmark_agents()?;
//!
//! let runner = BenchmarkRunner::openai(None, &credentials)?;
//! let result = runner.run(&agents).await?;
//! println!("{}/{} agents answered", result.responses.len(), result.total_agents);
//! ```

mod benchmark;
mod chain;
mod judge;
mod observer;
mod probe;
pub mod prompts;
mod question;

pub use benchmark::{run_benchmark, BenchmarkError, BenchmarkRunner};
pub use chain::{run_chain_steps, run_prompt_chain, ChainOutcome};
pub use judge::ResponseJudge;
pub use observer::{BenchmarkObserver, TracingObserver};
pub use probe::{probe, ProbeOutcome, DEFAULT_PROBE_PROMPT};
pub use question::{QuestionGenerator, HOST_MODEL};
