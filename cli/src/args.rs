//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for task results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full result as JSON
    Json,
}

/// CLI arguments for consilium
#[derive(Parser, Debug)]
#[command(name = "consilium")]
#[command(author, version, about = "Multi-agent LLM orchestration with consensus validation")]
#[command(long_about = r#"
Consilium dispatches a task to one or more model-backed agents and, when
several agents answer, reconciles their responses into a consensus result.

With --agents 1 (the default) the task goes to the highest-priority capable
model, falling back to the next candidate on failure. With --agents N the
task fans out to N agents concurrently and their answers are validated for
agreement.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./consilium.toml      Project-level config
3. ~/.config/consilium/config.toml   Global config

Example:
  consilium "What is the tallest mountain on Earth?"
  consilium -t summarize "Long article text..."
  consilium -a 3 "Is P equal to NP?"
  consilium -t extract -c extraction --output json "Invoice #123, due 2026-09-01"
"#)]
pub struct Cli {
    /// The task payload (free-form input for the agents)
    pub payload: Option<String>,

    /// Task kind: answer, summarize, extract, verify, classify
    #[arg(short, long, default_value = "answer", value_name = "KIND")]
    pub task: String,

    /// Required capability (can be specified multiple times)
    #[arg(short = 'c', long = "capability", value_name = "CAPABILITY")]
    pub capability: Vec<String>,

    /// Number of agents to fan out to (1 = single-agent path)
    #[arg(short, long, value_name = "N")]
    pub agents: Option<usize>,

    /// Per-agent timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
