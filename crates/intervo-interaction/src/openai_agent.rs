//! OpenAiAgent - REST implementation of the core's generation backend.
//!
//! Calls the OpenAI Chat Completions API directly. The ordered message list
//! is one system entry followed by every transcript turn with its stored
//! role; the five sampling parameters are passed through unmodified.

use async_trait::async_trait;
use intervo_core::error::{IntervoError, Result};
use intervo_core::session::{GenerationAgent, ModelConfig, Turn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Generation agent that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiAgent {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiAgent {
    /// Creates a new agent with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Loads the API key from the `OPENAI_API_KEY` environment variable.
    pub fn try_from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            IntervoError::generation("OPENAI_API_KEY not found in environment variables")
        })?;
        Ok(Self::new(api_key))
    }

    /// Overrides the endpoint, e.g. for an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_messages(system_prompt: &str, transcript: &[Turn]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        // The validator sends a bare user message with no system entry.
        if !system_prompt.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            });
        }
        messages.extend(transcript.iter().map(|turn| ChatMessage {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
        }));
        messages
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        tracing::debug!(model = %body.model, messages = body.messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| IntervoError::Generation {
                status_code: None,
                message: format!("OpenAI API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            tracing::warn!(status = %status, "chat completion request rejected");
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            IntervoError::generation(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl GenerationAgent for OpenAiAgent {
    async fn complete(
        &self,
        system_prompt: &str,
        transcript: &[Turn],
        model_config: &ModelConfig,
    ) -> Result<String> {
        let request = ChatCompletionRequest {
            model: model_config.model.clone(),
            messages: Self::build_messages(system_prompt, transcript),
            temperature: model_config.temperature,
            max_tokens: model_config.max_tokens,
            top_p: model_config.top_p,
            frequency_penalty: model_config.frequency_penalty,
            presence_penalty: model_config.presence_penalty,
        };

        self.send_request(&request).await
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| IntervoError::generation("OpenAI API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> IntervoError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    IntervoError::generation_with_status(status.as_u16(), message, is_retryable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_start_with_system_then_replay_transcript() {
        let transcript = vec![
            Turn::assistant("Hello, I'm Alex."),
            Turn::user("Hi, ready when you are."),
        ];
        let messages = OpenAiAgent::build_messages("persona prompt", &transcript);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "persona prompt");
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[2].role, "user");
        assert_eq!(messages[2].content, "Hi, ready when you are.");
    }

    #[test]
    fn empty_system_prompt_is_omitted() {
        let messages = OpenAiAgent::build_messages("", &[Turn::user("validate this")]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[test]
    fn request_serializes_all_sampling_parameters() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: "s".to_string(),
            }],
            temperature: 0.7,
            max_tokens: 500,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.5,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["frequency_penalty"], 0.0);
        assert_eq!(json["presence_penalty"], 0.5);
    }

    #[test]
    fn empty_choice_list_is_an_error_not_empty_content() {
        let response = ChatCompletionResponse { choices: vec![] };
        let err = extract_text_response(response).unwrap_err();
        assert!(err.is_generation());
    }

    #[test]
    fn empty_content_is_an_error() {
        let response = ChatCompletionResponse {
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some(String::new()),
                },
            }],
        };
        assert!(extract_text_response(response).is_err());
    }

    #[test]
    fn first_choice_content_is_returned() {
        let response = ChatCompletionResponse {
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some("Tell me about yourself.".to_string()),
                },
            }],
        };
        assert_eq!(
            extract_text_response(response).unwrap(),
            "Tell me about yourself."
        );
    }

    #[test]
    fn api_error_body_message_is_surfaced() {
        let body = r#"{"error": {"message": "Rate limit reached"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());
        match err {
            IntervoError::Generation {
                status_code,
                message,
                is_retryable,
            } => {
                assert_eq!(status_code, Some(429));
                assert_eq!(message, "Rate limit reached");
                assert!(is_retryable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, "bad key".to_string());
        match err {
            IntervoError::Generation { is_retryable, .. } => assert!(!is_retryable),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
