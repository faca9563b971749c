use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use repospector::cli::{Cli, Command};
use repospector::config::{LogFormat, Settings};
use repospector::inspect::{GitInspector, RepositoryInspector};
use repospector::llm::ChatClient;
use repospector::review::{ReviewPipeline, RunState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    init_tracing(&settings);

    match cli.command {
        Command::Review {
            url,
            api_key,
            model,
            api_base_url,
            output,
        } => {
            if let Some(key) = api_key {
                settings.api_key = Some(key);
            }
            if let Some(model) = model {
                settings.model = model;
            }
            if let Some(base_url) = api_base_url {
                settings.api_base_url = base_url;
            }
            run_review(&settings, &url, output.as_deref()).await
        }
        Command::Inspect {
            url,
            max_file_size_kb,
        } => {
            if let Some(cap) = max_file_size_kb {
                settings.max_file_size_kb = cap;
            }
            run_inspect(&settings, &url).await
        }
    }
}

async fn run_review(settings: &Settings, url: &str, output: Option<&Path>) -> Result<()> {
    let inspector: Arc<dyn RepositoryInspector> = Arc::new(GitInspector::new(settings));
    let service = Arc::new(ChatClient::new(settings)?);
    let pipeline = ReviewPipeline::new(inspector, service);

    println!("{}", "=".repeat(80));
    println!("Reviewing repository: {url}");
    println!("{}", "=".repeat(80));

    let run = pipeline.run(url).await;
    match run.state {
        RunState::Completed(report) => {
            println!("\n{}", report.markdown);

            if let Some(path) = output {
                tokio::fs::write(path, &report.markdown)
                    .await
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                println!("\nReport saved to: {}", path.display());
            }
            Ok(())
        }
        RunState::Failed { stage, error } => {
            eprintln!("\nAnalysis failed during the {stage} stage: {error}");
            eprintln!("Re-run with LOG_LEVEL=debug for technical details.");
            std::process::exit(1);
        }
        RunState::Created | RunState::Running(_) => {
            anyhow::bail!("review run ended in a non-terminal state")
        }
    }
}

async fn run_inspect(settings: &Settings, url: &str) -> Result<()> {
    let inspector = GitInspector::new(settings);
    let record = inspector.inspect(url).await;
    println!("{}", record.to_json_pretty()?);

    if record.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match settings.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
