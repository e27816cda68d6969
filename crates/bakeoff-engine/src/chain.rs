use bakeoff_core::{Agent, AgentError};
use tracing::info;

use crate::prompts::{elaboration_prompt, IDEA_PROMPT};

/// Both replies of a prompt chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub idea: String,
    pub feature: String,
}

/// Asks for a business idea, then for the central feature of that idea.
///
/// Exactly two calls; the first reply is embedded unchecked in the second
/// prompt. Returns the second reply.
pub async fn run_prompt_chain(caller: &dyn Agent) -> Result<String, AgentError> {
    Ok(run_chain_steps(caller).await?.feature)
}

/// Same two calls as [`run_prompt_chain`], keeping the idea as well.
pub async fn run_chain_steps(caller: &dyn Agent) -> Result<ChainOutcome, AgentError> {
    info!("CHAIN: First call, asking for a business idea");
    let idea = caller.call(IDEA_PROMPT).await?;

    info!("CHAIN: Second call, asking for the central feature");
    let feature = caller.call(&elaboration_prompt(&idea)).await?;

    info!("CHAIN: Idea of edtech b2c application in 2025: {}", idea.trim());
    info!("CHAIN: Central feature to focus on: {}", feature.trim());

    Ok(ChainOutcome { idea, feature })
}
