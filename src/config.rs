//! Runtime configuration.
//!
//! Every component receives an explicit [`Settings`] value at construction;
//! there is no process-global configuration. `Settings::from_env` builds
//! one from the environment (after `dotenv` has loaded any `.env` file),
//! and the CLI applies per-run overrides on top.

use std::env;

const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_TEMPERATURE: f32 = 0.1;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_FILE_SIZE_KB: u64 = 1024;
const DEFAULT_TEMP_DIR_PREFIX: &str = "repospector_";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// API key for the reasoning service. Required for review runs, not
    /// for inspection-only runs.
    pub api_key: Option<String>,
    /// Base URL of the chat-completions endpoint.
    pub api_base_url: String,
    /// Model used by all three review stages.
    pub model: String,
    /// Sampling temperature for review stages.
    pub temperature: f32,
    /// Timeout for a single reasoning-service request.
    pub request_timeout_secs: u64,
    /// Size cap for README/LICENSE extraction.
    pub max_file_size_kb: u64,
    /// Name prefix for ephemeral clone workspaces.
    pub temp_dir_prefix: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_file_size_kb: DEFAULT_MAX_FILE_SIZE_KB,
            temp_dir_prefix: DEFAULT_TEMP_DIR_PREFIX.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Build settings from environment variables, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Self {
            api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            api_base_url: env_or("OPENAI_API_BASE", defaults.api_base_url),
            model: env_or("LLM_MODEL", defaults.model),
            temperature: env_parsed("LLM_TEMPERATURE", defaults.temperature),
            request_timeout_secs: env_parsed(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            max_file_size_kb: env_parsed("MAX_FILE_SIZE_KB", defaults.max_file_size_kb),
            temp_dir_prefix: env_or("TEMP_DIR_PREFIX", defaults.temp_dir_prefix),
            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.model, "gpt-4");
        assert_eq!(settings.max_file_size_kb, 1024);
        assert_eq!(settings.temp_dir_prefix, "repospector_");
        assert_eq!(settings.log_format, LogFormat::Text);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn log_format_parsing_is_case_insensitive() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("anything-else"), LogFormat::Text);
    }
}
