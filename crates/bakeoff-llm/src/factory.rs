//! Builds provider agents from declarative configs.

use std::collections::HashMap;
use std::sync::Arc;

use bakeoff_config::{AgentConfig, AgentType, ConfigError, Credentials};
use bakeoff_core::Agent;
use tracing::{debug, info};

use crate::{anthropic, deepseek, openai, together};
use crate::{AnthropicAgent, DeepseekAgent, LlamaAgent, OpenAiAgent};

/// Creates agents, resolving credentials against one ambient snapshot.
#[derive(Debug, Clone, Default)]
pub struct AgentFactory {
    credentials: Credentials,
}

impl AgentFactory {
    /// Creates a factory over the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Creates a factory over the current process environment.
    pub fn from_env() -> Self {
        Self::new(Credentials::from_env())
    }

    /// The ambient credentials agents fall back to.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds one agent. Fails when its credential cannot be resolved.
    pub fn create_agent(&self, config: &AgentConfig) -> Result<Arc<dyn Agent>, ConfigError> {
        let model = config.model.as_deref();
        let api_key = config.api_key.as_deref();

        if config.base_url.is_some() && config.agent_type != AgentType::Llama {
            debug!("baseUrl is only honored for llama agents, ignoring it for {}", config.agent_type);
        }

        let agent: Arc<dyn Agent> = match config.agent_type {
            AgentType::OpenAi => Arc::new(OpenAiAgent::new(model, api_key, &self.credentials)?),
            AgentType::Claude => Arc::new(AnthropicAgent::new(model, api_key, &self.credentials)?),
            AgentType::Llama => Arc::new(LlamaAgent::new(
                model,
                api_key,
                config.base_url.as_deref(),
                &self.credentials,
            )?),
            AgentType::Deepseek => Arc::new(DeepseekAgent::new(model, api_key, &self.credentials)?),
        };

        debug!("Created agent {} ({})", agent.name(), agent.provider());
        Ok(agent)
    }

    /// Builds every agent in order, stopping at the first failure.
    pub fn create_agents(&self, configs: &[AgentConfig]) -> Result<Vec<Arc<dyn Agent>>, ConfigError> {
        let agents = configs
            .iter()
            .map(|config| self.create_agent(config))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Created {} agents", agents.len());
        Ok(agents)
    }

    /// The default four-provider roster.
    pub fn standard_benchmark_agents(&self) -> Result<Vec<Arc<dyn Agent>>, ConfigError> {
        self.create_agents(&Self::standard_configs())
    }

    /// One agent per provider that has a model in `models`, in
    /// [`AgentType::ALL`] order.
    pub fn custom_benchmark_agents(
        &self,
        models: &HashMap<AgentType, String>,
    ) -> Result<Vec<Arc<dyn Agent>>, ConfigError> {
        let configs: Vec<AgentConfig> = AgentType::ALL
            .iter()
            .filter_map(|ty| models.get(ty).map(|model| AgentConfig::new(*ty).model(model)))
            .collect();

        self.create_agents(&configs)
    }

    /// Configs for [`AgentFactory::standard_benchmark_agents`].
    pub fn standard_configs() -> Vec<AgentConfig> {
        vec![
            AgentConfig::new(AgentType::OpenAi).model(openai::DEFAULT_MODEL),
            AgentConfig::new(AgentType::Claude).model(anthropic::DEFAULT_MODEL),
            AgentConfig::new(AgentType::Llama).model(together::DEFAULT_MODEL),
            AgentConfig::new(AgentType::Deepseek).model(deepseek::DEFAULT_MODEL),
        ]
    }
}
