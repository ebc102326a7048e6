//! Consilium CLI entry point.
//!
//! Wires the layers together: loads configuration, builds the model
//! registry and HTTP gateway, and hands the task to the orchestrator.

mod args;
mod output;

use anyhow::{Context, Result, anyhow, bail};
use args::{Cli, OutputFormat};
use clap::Parser;
use consilium_application::Orchestrator;
use consilium_domain::{Capability, TaskKind, TaskRequest};
use consilium_infrastructure::{ConfigLoader, HttpInferenceGateway};
use output::ConsoleFormatter;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    let Some(payload) = cli.payload else {
        bail!("a task payload is required (see --help for examples)");
    };

    let request = build_request(&cli.task, payload, &cli.capability, cli.agents, cli.timeout_ms)?;

    // === Dependency Injection ===
    let registry = Arc::new(config.build_registry().context("invalid model catalog")?);
    info!(
        "registry holds {} model(s), task {} requires [{}]",
        registry.len(),
        request.id,
        request
            .required_capabilities()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut gateway = HttpInferenceGateway::new(&config.gateway.endpoint)
        .map_err(|e| anyhow!("failed to build inference gateway: {}", e))?;
    if let Ok(api_key) = std::env::var("CONSILIUM_API_KEY") {
        gateway = gateway.with_api_key(api_key);
    }

    let orchestrator = Orchestrator::new(
        registry,
        Arc::new(gateway),
        config.consensus_validator(),
        config.orchestrator_config(),
    );

    let result = orchestrator.submit(request).await?;

    let rendered = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", rendered);

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}

/// Translate raw CLI strings into a validated [`TaskRequest`].
fn build_request(
    task: &str,
    payload: String,
    capabilities: &[String],
    agents: Option<usize>,
    timeout_ms: Option<u64>,
) -> Result<TaskRequest> {
    let kind: TaskKind = task
        .parse()
        .map_err(|e: String| anyhow!("invalid task kind: {}", e))?;

    let mut request = TaskRequest::new(kind, payload);
    for raw in capabilities {
        let capability: Capability = raw
            .parse()
            .map_err(|e: String| anyhow!("invalid capability: {}", e))?;
        request = request.with_capability(capability);
    }
    if let Some(count) = agents {
        request = request.with_agent_count(count);
    }
    if let Some(ms) = timeout_ms {
        request = request.with_timeout(Duration::from_millis(ms));
    }
    Ok(request)
}
