use std::sync::Arc;

use bakeoff_core::Agent;
use tracing::{info, warn};

pub const DEFAULT_PROBE_PROMPT: &str = "What is the capital of France?";

/// One agent's answer to a probe, or the error it raised.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub agent_name: String,
    pub provider: String,
    pub result: Result<String, String>,
}

/// Sends `prompt` to each agent in turn; failures are recorded, not raised.
pub async fn probe(agents: &[Arc<dyn Agent>], prompt: &str) -> Vec<ProbeOutcome> {
    let mut outcomes = Vec::with_capacity(agents.len());

    for agent in agents {
        info!("PROBE: Testing {}", agent.name());

        let result = agent.call(prompt).await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            warn!("PROBE: {} failed: {}", agent.name(), e);
        }

        outcomes.push(ProbeOutcome {
            agent_name: agent.name().to_string(),
            provider: agent.provider().to_string(),
            result,
        });
    }

    outcomes
}
