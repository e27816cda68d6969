//! Agent configuration schema and credential resolution.
//!
//! This crate defines the declarative side of a benchmark:
//!
//! - [`AgentType`] — The closed set of supported provider tags
//! - [`AgentConfig`] — One `{type, model?, apiKey?, baseUrl?}` record
//! - [`BenchmarkConfig`] — A roster of agents loaded from JSON
//! - [`Credentials`] — Ambient provider secrets, snapshotted once
//!
//! # Loading a roster
//!
//! ```rust
//! use bakeoff_config::{AgentType, BenchmarkConfig};
//!
//! let roster = BenchmarkConfig::from_json(r#"{
//!     "agents": [
//!         { "type": "openai", "model": "gpt-4o-mini" },
//!         { "type": "llama", "baseUrl": "http://localhost:8080/v1" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(roster.agents.len(), 2);
//! assert_eq!(roster.agents[1].agent_type, AgentType::Llama);
//! ```
//!
//! # Resolving credentials
//!
//! ```rust
//! use bakeoff_config::{AgentType, Credentials};
//!
//! let creds = Credentials::default().with(AgentType::Deepseek, "sk-ambient");
//!
//! // Explicit keys win over the ambient ones.
//! assert_eq!(creds.resolve(AgentType::Deepseek, Some("sk-explicit")).unwrap(), "sk-explicit");
//! assert_eq!(creds.resolve(AgentType::Deepseek, None).unwrap(), "sk-ambient");
//! assert!(creds.resolve(AgentType::OpenAi, None).is_err());
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur when building agents from configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON configuration.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Agent type tag outside the supported set.
    #[error("Unsupported agent type: {0}")]
    UnsupportedAgentType(String),

    /// No explicit credential and none in the environment.
    #[error("{provider} API key is required. Set {env_var} environment variable.")]
    MissingCredential {
        provider: &'static str,
        env_var: &'static str,
    },
}

impl ConfigError {
    /// Creates an IO error with path context.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Supported provider families.
///
/// | Tag | Provider | Credential |
/// |-----|----------|------------|
/// | `openai` | OpenAI | `OPENAI_API_KEY` |
/// | `claude` | Anthropic | `ANTHROPIC_API_KEY` |
/// | `llama` | Meta, served by Together | `TOGETHER_API_KEY` |
/// | `deepseek` | Deepseek | `DEEPSEEK_API_KEY` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AgentType {
    OpenAi,
    Claude,
    Llama,
    Deepseek,
}

impl AgentType {
    /// Every supported type, in the order standard rosters are built.
    pub const ALL: [AgentType; 4] = [Self::OpenAi, Self::Claude, Self::Llama, Self::Deepseek];

    /// Provider label reported on agents and responses.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Claude => "Anthropic",
            Self::Llama => "Meta",
            Self::Deepseek => "Deepseek",
        }
    }

    /// Short family name used in agent names and error prefixes.
    pub fn family(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Claude => "Claude",
            Self::Llama => "Llama",
            Self::Deepseek => "Deepseek",
        }
    }

    /// Environment variable holding the ambient credential.
    pub fn credential_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Claude => "ANTHROPIC_API_KEY",
            Self::Llama => "TOGETHER_API_KEY",
            Self::Deepseek => "DEEPSEEK_API_KEY",
        }
    }

    /// Who issues the credential; Llama keys come from Together.
    fn credential_issuer(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Claude => "Anthropic",
            Self::Llama => "Together",
            Self::Deepseek => "Deepseek",
        }
    }
}

impl FromStr for AgentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Self::OpenAi),
            "claude" | "anthropic" => Ok(Self::Claude),
            "llama" | "together" => Ok(Self::Llama),
            "deepseek" => Ok(Self::Deepseek),
            other => Err(ConfigError::UnsupportedAgentType(other.to_string())),
        }
    }
}

impl TryFrom<String> for AgentType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OpenAi => "openai",
            Self::Claude => "claude",
            Self::Llama => "llama",
            Self::Deepseek => "deepseek",
        };
        write!(f, "{}", s)
    }
}

/// Declarative description of one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Model name; the provider default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Explicit credential; the ambient one is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint override, honored for the Together-served `llama` type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl AgentConfig {
    /// Creates a config that uses every default for `agent_type`.
    pub fn new(agent_type: AgentType) -> Self {
        Self {
            agent_type,
            model: None,
            api_key: None,
            base_url: None,
        }
    }

    /// Sets the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets an explicit credential.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the endpoint base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Parses the command-line shorthand `TYPE[:MODEL]`, e.g. `claude:claude-3-5-haiku-20241022`.
impl FromStr for AgentConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, model) = match s.split_once(':') {
            Some((tag, model)) => (tag, Some(model)),
            None => (s, None),
        };

        let config = AgentConfig::new(tag.trim().parse()?);
        Ok(match model.map(str::trim).filter(|m| !m.is_empty()) {
            Some(model) => config.model(model),
            None => config,
        })
    }
}

/// A roster of agents to benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub agents: Vec<AgentConfig>,
}

impl BenchmarkConfig {
    /// Parses a roster from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a roster from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.display().to_string(), e))?;
        let config = Self::from_json(&content)?;
        debug!("Loaded {} agent configs from {}", config.agents.len(), path.display());
        Ok(config)
    }
}

/// Ambient provider credentials.
///
/// Captured once (usually with [`Credentials::from_env`]) and handed to the
/// agent factory; never re-read during a call.
#[derive(Clone, Default)]
pub struct Credentials {
    openai: Option<String>,
    anthropic: Option<String>,
    together: Option<String>,
    deepseek: Option<String>,
}

impl Credentials {
    /// Snapshots the four provider variables from the process environment.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        let read = |ty: AgentType| {
            std::env::var(ty.credential_env_var())
                .ok()
                .filter(|v| !v.is_empty())
        };

        Self {
            openai: read(AgentType::OpenAi),
            anthropic: read(AgentType::Claude),
            together: read(AgentType::Llama),
            deepseek: read(AgentType::Deepseek),
        }
    }

    /// Sets the ambient credential for `agent_type`.
    pub fn with(mut self, agent_type: AgentType, key: impl Into<String>) -> Self {
        *self.slot_mut(agent_type) = Some(key.into());
        self
    }

    /// Returns the ambient credential for `agent_type`, if any.
    pub fn get(&self, agent_type: AgentType) -> Option<&str> {
        match agent_type {
            AgentType::OpenAi => self.openai.as_deref(),
            AgentType::Claude => self.anthropic.as_deref(),
            AgentType::Llama => self.together.as_deref(),
            AgentType::Deepseek => self.deepseek.as_deref(),
        }
    }

    /// Resolves the key to use: explicit value, then the ambient one.
    pub fn resolve(&self, agent_type: AgentType, explicit: Option<&str>) -> Result<String, ConfigError> {
        explicit
            .filter(|k| !k.is_empty())
            .or_else(|| self.get(agent_type))
            .map(String::from)
            .ok_or(ConfigError::MissingCredential {
                provider: agent_type.credential_issuer(),
                env_var: agent_type.credential_env_var(),
            })
    }

    fn slot_mut(&mut self, agent_type: AgentType) -> &mut Option<String> {
        match agent_type {
            AgentType::OpenAi => &mut self.openai,
            AgentType::Claude => &mut self.anthropic,
            AgentType::Llama => &mut self.together,
            AgentType::Deepseek => &mut self.deepseek,
        }
    }
}

/// Prints which credentials are present, never their values.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |key: &Option<String>| key.as_ref().map(|_| "<set>");
        f.debug_struct("Credentials")
            .field("openai", &mask(&self.openai))
            .field("anthropic", &mask(&self.anthropic))
            .field("together", &mask(&self.together))
            .field("deepseek", &mask(&self.deepseek))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_aliases() {
        assert_eq!("openai".parse::<AgentType>().unwrap(), AgentType::OpenAi);
        assert_eq!("anthropic".parse::<AgentType>().unwrap(), AgentType::Claude);
        assert_eq!("together".parse::<AgentType>().unwrap(), AgentType::Llama);
        assert_eq!(AgentType::Deepseek.to_string(), "deepseek");
    }

    #[test]
    fn unknown_tag_is_named_in_error() {
        let err = "mistral".parse::<AgentType>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported agent type: mistral");
    }

    #[test]
    fn unknown_tag_in_roster_fails_parse() {
        let err = BenchmarkConfig::from_json(r#"{"agents":[{"type":"gemini"}]}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported agent type: gemini"), "{err}");
    }

    #[test]
    fn roster_without_agents_is_rejected() {
        let err = BenchmarkConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn roster_reads_camel_case_fields() {
        let roster = BenchmarkConfig::from_json(
            r#"{"agents":[{"type":"llama","model":"m","apiKey":"k","baseUrl":"http://x/v1"}]}"#,
        )
        .unwrap();
        let agent = &roster.agents[0];
        assert_eq!(agent.model.as_deref(), Some("m"));
        assert_eq!(agent.api_key.as_deref(), Some("k"));
        assert_eq!(agent.base_url.as_deref(), Some("http://x/v1"));
    }

    #[test]
    fn agent_config_serializes_type_tag() {
        let json = serde_json::to_value(AgentConfig::new(AgentType::Claude).model("c")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "claude", "model": "c"}));
    }

    #[test]
    fn cli_shorthand_with_and_without_model() {
        let bare: AgentConfig = "deepseek".parse().unwrap();
        assert_eq!(bare, AgentConfig::new(AgentType::Deepseek));

        let with_model: AgentConfig = "claude:claude-3-5-haiku-20241022".parse().unwrap();
        assert_eq!(with_model.model.as_deref(), Some("claude-3-5-haiku-20241022"));

        let trailing: AgentConfig = "openai:".parse().unwrap();
        assert_eq!(trailing.model, None);
    }

    #[test]
    fn missing_credential_names_env_var() {
        let err = Credentials::default().resolve(AgentType::Llama, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Together API key is required. Set TOGETHER_API_KEY environment variable."
        );
    }

    #[test]
    fn empty_explicit_key_falls_back_to_ambient() {
        let creds = Credentials::default().with(AgentType::Claude, "ambient");
        assert_eq!(creds.resolve(AgentType::Claude, Some("")).unwrap(), "ambient");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BenchmarkConfig::from_file("/nonexistent/roster.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/roster.json"));
    }

    #[test]
    fn debug_output_hides_keys() {
        let credentials = Credentials::default().with(AgentType::OpenAi, "sk-secret");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("<set>"));
        assert!(!printed.contains("sk-secret"));
    }
}
