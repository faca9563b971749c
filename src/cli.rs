//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AI-powered GitHub repository quality review
#[derive(Debug, Parser)]
#[command(name = "repospector", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full three-stage review and print the Markdown report
    Review {
        /// GitHub repository URL to analyze
        url: String,

        /// API key for the reasoning service
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model used by the review stages
        #[arg(long, env = "LLM_MODEL")]
        model: Option<String>,

        /// Base URL of the chat-completions endpoint
        #[arg(long, env = "OPENAI_API_BASE")]
        api_base_url: Option<String>,

        /// Write the report to this file in addition to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clone and inspect a repository, printing the JSON inspection record
    Inspect {
        /// GitHub repository URL to analyze
        url: String,

        /// Size cap in KB for README/LICENSE extraction
        #[arg(long, env = "MAX_FILE_SIZE_KB")]
        max_file_size_kb: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn review_parses_url_and_output() {
        let cli = Cli::try_parse_from([
            "repospector",
            "review",
            "https://github.com/example/demo",
            "--output",
            "report.md",
        ])
        .unwrap();

        match cli.command {
            Command::Review { url, output, .. } => {
                assert_eq!(url, "https://github.com/example/demo");
                assert_eq!(output.unwrap(), PathBuf::from("report.md"));
            }
            other => panic!("expected review command, got {other:?}"),
        }
    }
}
