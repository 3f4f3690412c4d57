use super::{ImageGenerator, ImageQuality, ImageSize, TextGenerator};
use crate::agent::GenerationRequest;
use crate::config::{LlmProvider, ModelConfig};
use async_trait::async_trait;
use marketcrew_core::{BackendError, BackendResult};
use tracing::debug;

/// OpenAI-compatible API backend.
///
/// Serves both capabilities: chat completions for agent text and the
/// images endpoint for the generated photograph. Works with any provider
/// that speaks the OpenAI chat completions API; images need OpenAI itself.
pub struct OpenAiBackend {
    config: ModelConfig,
    http: reqwest::Client,
}

impl OpenAiBackend {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn build_messages(&self, request: &GenerationRequest<'_>) -> Vec<serde_json::Value> {
        vec![
            serde_json::json!({
                "role": "system",
                "content": system_prompt(request),
            }),
            serde_json::json!({
                "role": "user",
                "content": request.instruction,
            }),
        ]
    }

    fn add_provider_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        // OpenRouter requires extra headers
        if matches!(self.config.provider, LlmProvider::OpenRouter) {
            request.header("X-Title", "marketcrew")
        } else {
            request
        }
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> BackendResult<serde_json::Value> {
        if self.config.api_key.is_empty() {
            return Err(BackendError::Unavailable("API key is not set".to_string()));
        }

        let resp = self
            .add_provider_headers(self.http.post(url))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

/// Agent identity framed as a system prompt.
pub fn system_prompt(request: &GenerationRequest<'_>) -> String {
    format!(
        "You are {}.\n{}\n\nYour personal goal is: {}",
        request.role, request.backstory, request.goal
    )
}

#[async_trait]
impl TextGenerator for OpenAiBackend {
    async fn generate_text(&self, request: &GenerationRequest<'_>) -> BackendResult<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url());
        let body = serde_json::json!({
            "model": self.config.model_id,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": self.build_messages(request),
        });

        debug!(role = %request.role, model = %self.config.model_id, "Chat completion request");
        let resp_body = self.post_json(&url, &body).await?;
        parse_chat_response(&resp_body)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiBackend {
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
        quality: ImageQuality,
    ) -> BackendResult<String> {
        if !self.config.supports_images() {
            return Err(BackendError::Unavailable(format!(
                "{:?} has no images endpoint",
                self.config.provider
            )));
        }

        let url = format!("{}/v1/images/generations", self.config.base_url());
        let body = serde_json::json!({
            "model": self.config.image_model,
            "prompt": prompt,
            "size": size.as_str(),
            "quality": quality.as_str(),
            "n": 1,
        });

        debug!(model = %self.config.image_model, size = size.as_str(), "Image generation request");
        let resp_body = self.post_json(&url, &body).await?;
        parse_image_response(&resp_body)
    }
}

pub fn parse_chat_response(body: &serde_json::Value) -> BackendResult<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BackendError::Malformed(format!("no message content in {body}")))
}

pub fn parse_image_response(body: &serde_json::Value) -> BackendResult<String> {
    body["data"][0]["url"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BackendError::Malformed(format!("no image url in {body}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_response() {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Buy now!"}, "finish_reason": "stop"}]
        });
        assert_eq!(parse_chat_response(&body), Ok("Buy now!".to_string()));
    }

    #[test]
    fn test_parse_chat_response_missing_content() {
        let body = serde_json::json!({"choices": []});
        assert!(matches!(
            parse_chat_response(&body),
            Err(BackendError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_image_response() {
        let body = serde_json::json!({"created": 1, "data": [{"url": "https://img.example/a.png"}]});
        assert_eq!(
            parse_image_response(&body),
            Ok("https://img.example/a.png".to_string())
        );
        assert!(parse_image_response(&serde_json::json!({"data": []})).is_err());
    }

    #[test]
    fn test_system_prompt_carries_identity() {
        let request = GenerationRequest {
            role: "Lead Market Analyst",
            goal: "Understand the market",
            backstory: "Veteran analyst.",
            instruction: "ignored here",
        };
        let prompt = system_prompt(&request);
        assert!(prompt.starts_with("You are Lead Market Analyst."));
        assert!(prompt.contains("Veteran analyst."));
        assert!(prompt.ends_with("Your personal goal is: Understand the market"));
    }
}
