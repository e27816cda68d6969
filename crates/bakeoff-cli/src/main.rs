//! `bakeoff` command-line entry point.
//!
//! ## Commands
//!
//! - `chain`: two dependent calls, a business idea then its central feature
//! - `benchmark`: generate a question, collect answers, print the judge's leaderboard
//! - `probe`: send one simple prompt to each agent and report what came back

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bakeoff_config::{AgentConfig, BenchmarkConfig, Credentials};
use bakeoff_engine::{probe, run_chain_steps, BenchmarkRunner, DEFAULT_PROBE_PROMPT, HOST_MODEL};
use bakeoff_llm::{AgentFactory, OpenAiAgent};

#[derive(Parser)]
#[command(name = "bakeoff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Benchmark hosted LLMs against a generated question and a judge model", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for an edTech idea, then for the feature to build first
    Chain {
        /// OpenAI model used for both calls
        #[arg(long, default_value = HOST_MODEL)]
        model: String,
    },

    /// Run a full benchmark and print the leaderboard
    Benchmark {
        /// Roster file: {"agents": [{"type": "openai", "model": "..."}]}
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Agent as TYPE[:MODEL], repeatable; appended to the roster file
        #[arg(short, long = "agent", value_name = "TYPE[:MODEL]")]
        agents: Vec<AgentConfig>,

        /// Key for the question and judge model (defaults to OPENAI_API_KEY)
        #[arg(long)]
        openai_key: Option<String>,

        /// Print the full result as JSON instead of a leaderboard
        #[arg(long)]
        json: bool,
    },

    /// Smoke-test agents with a single prompt
    Probe {
        /// Agent as TYPE[:MODEL], repeatable; the standard roster when omitted
        #[arg(short, long = "agent", value_name = "TYPE[:MODEL]")]
        agents: Vec<AgentConfig>,

        #[arg(short, long, default_value = DEFAULT_PROBE_PROMPT)]
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .compact()
        .init();

    let credentials = Credentials::from_env();

    match cli.command {
        Commands::Chain { model } => {
            let caller = OpenAiAgent::new(Some(&model), None, &credentials)?;
            let outcome = run_chain_steps(&caller).await.context("prompt chain failed")?;
            println!("{}", render::chain_report(&outcome));
        }

        Commands::Benchmark {
            config,
            agents,
            openai_key,
            json,
        } => {
            let roster = roster(config, agents)?;
            let agents = AgentFactory::new(credentials.clone())
                .create_agents(&roster)
                .context("failed to create agents")?;

            info!("Running benchmark with {} agents", agents.len());
            for agent in &agents {
                info!("  - {} ({})", agent.name(), agent.provider());
            }

            let runner = BenchmarkRunner::openai(openai_key.as_deref(), &credentials)?;
            let result = runner.run(&agents).await.context("benchmark failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", render::leaderboard(&result));
            }
        }

        Commands::Probe { agents, prompt } => {
            let configs = if agents.is_empty() {
                AgentFactory::standard_configs()
            } else {
                agents
            };
            let agents = AgentFactory::new(credentials)
                .create_agents(&configs)
                .context("failed to create agents")?;

            let outcomes = probe(&agents, &prompt).await;
            println!("{}", render::probe_report(&outcomes));
        }
    }

    Ok(())
}

/// Roster file entries followed by `--agent` flags; the standard four when both are empty.
fn roster(config: Option<PathBuf>, extra: Vec<AgentConfig>) -> Result<Vec<AgentConfig>> {
    let mut configs = match config {
        Some(path) => {
            BenchmarkConfig::from_file(&path)
                .with_context(|| format!("failed to load roster {}", path.display()))?
                .agents
        }
        None => Vec::new(),
    };
    configs.extend(extra);

    if configs.is_empty() {
        configs = AgentFactory::standard_configs();
    }
    Ok(configs)
}
