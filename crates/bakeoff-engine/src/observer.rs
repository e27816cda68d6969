use bakeoff_core::{Agent, AgentError, BenchmarkResult};
use tracing::{info, warn};

/// Progress callbacks for a benchmark run. All methods default to no-ops.
pub trait BenchmarkObserver: Send + Sync {
    fn question_generated(&self, _question: &str) {}

    /// `index` is zero-based.
    fn agent_started(&self, _index: usize, _total: usize, _agent: &dyn Agent) {}

    fn agent_responded(&self, _agent: &dyn Agent, _response: &str) {}

    fn agent_failed(&self, _agent: &dyn Agent, _error: &AgentError) {}

    fn judging_started(&self, _responses: usize) {}

    fn benchmark_completed(&self, _result: &BenchmarkResult) {}
}

/// Narrates progress through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl BenchmarkObserver for TracingObserver {
    fn question_generated(&self, question: &str) {
        info!("BENCHMARK: Question generated ({} chars)", question.len());
    }

    fn agent_started(&self, index: usize, total: usize, agent: &dyn Agent) {
        info!("BENCHMARK: [{}/{}] Calling {} ({})", index + 1, total, agent.name(), agent.provider());
    }

    fn agent_responded(&self, agent: &dyn Agent, response: &str) {
        info!("BENCHMARK: {} answered ({} chars)", agent.name(), response.len());
    }

    fn agent_failed(&self, agent: &dyn Agent, error: &AgentError) {
        warn!("BENCHMARK: {} failed, skipping: {}", agent.name(), error);
    }

    fn judging_started(&self, responses: usize) {
        if responses == 0 {
            warn!("BENCHMARK: No agent answered, judging an empty response list");
        }
    }

    fn benchmark_completed(&self, result: &BenchmarkResult) {
        info!(
            "BENCHMARK: Complete, {}/{} agents answered, {} ranked",
            result.responses.len(),
            result.total_agents,
            result.leaderboard.rankings.len()
        );
    }
}
