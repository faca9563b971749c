//! Reasoning-service client.
//!
//! The pipeline talks to its reasoning backend through the narrow
//! [`ReasoningService`] trait: one system prompt and one user prompt in,
//! one text completion out. The production implementation is an
//! OpenAI-style chat-completions client; tests substitute scripted
//! services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Text-in/text-out interface to an external reasoning service.
#[async_trait]
pub trait ReasoningService: Send + Sync {
    /// Produce one completion for the given system and user prompts.
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl ChatClient {
    /// Build a client from settings. Fails if no API key is configured.
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            Error::Service(
                "no API key configured; set OPENAI_API_KEY or pass --api-key".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| Error::Service(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }
}

#[async_trait]
impl ReasoningService for ChatClient {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Service(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(Error::Service(format!("API error ({status}): {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Service(format!("failed to parse response: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Service("response contained no choices".to_string()))?;

        if choice.message.content.trim().is_empty() {
            return Err(Error::Service("response contained no text".to_string()));
        }

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_to_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a reviewer.",
                },
                ChatMessage {
                    role: "user",
                    content: "Review this.",
                },
            ],
            temperature: 0.1,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "Review this.");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.1).abs() < 1e-6);
    }

    #[test]
    fn chat_response_parses_first_choice() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Looks good."}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Looks good.");
    }

    #[test]
    fn client_requires_an_api_key() {
        let settings = Settings::default();
        let result = ChatClient::new(&settings);
        assert!(matches!(result, Err(Error::Service(_))));
    }

    #[test]
    fn client_trims_trailing_slash_from_base_url() {
        let settings = Settings {
            api_key: Some("sk-test".to_string()),
            api_base_url: "https://api.openai.com/v1/".to_string(),
            ..Settings::default()
        };
        let client = ChatClient::new(&settings).unwrap();
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }
}
