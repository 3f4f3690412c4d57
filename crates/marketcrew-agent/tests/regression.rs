//! Regression tests for marketcrew-agent: ModelConfig, LlmProvider, OpenAiBackend.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use marketcrew_agent::{
    AgentProfile, GenerationRequest, ImageGenerator, ImageQuality, ImageSize, LlmProvider,
    ModelConfig, OpenAiBackend, TextGenerator,
};
use marketcrew_core::BackendError;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ModelConfig {
    ModelConfig {
        api_key: "sk-test".to_string(),
        api_base_url: Some(server.uri()),
        ..ModelConfig::default()
    }
}

fn request<'a>(instruction: &'a str) -> GenerationRequest<'a> {
    GenerationRequest {
        role: "Creative Content Creator",
        goal: "Write captivating copy",
        backstory: "Senior copywriter.",
        instruction,
    }
}

// --- ModelConfig & LlmProvider ---

#[test]
fn test_llm_provider_serialization() {
    assert_eq!(
        serde_json::to_string(&LlmProvider::OpenAi).unwrap(),
        "\"openai\""
    );
    let provider: LlmProvider = serde_json::from_str("\"openrouter\"").unwrap();
    assert_eq!(provider, LlmProvider::OpenRouter);
}

#[test]
fn test_model_config_deserialization_with_defaults() {
    let toml_str = r#"
        model_id = "gpt-4o"
        api_key = "test-key"
    "#;

    let config: ModelConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.provider, LlmProvider::OpenAi);
    assert_eq!(config.model_id, "gpt-4o");
    assert_eq!(config.temperature, 0.7);
    assert_eq!(config.max_tokens, 4096);
    assert_eq!(config.image_model, "dall-e-3");
    assert!(config.api_base_url.is_none());
}

#[test]
fn test_model_config_empty_table() {
    let config: ModelConfig = toml::from_str("").unwrap();
    assert_eq!(config.model_id, "gpt-4o-mini");
    assert!(config.api_key.is_empty());
}

// --- Text generation ---

#[tokio::test]
async fn test_generate_text_sends_identity_and_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "Write an ad"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Hear Mary every morning."}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(config_for(&server));
    let text = backend.generate_text(&request("Write an ad")).await.unwrap();
    assert_eq!(text, "Hear Mary every morning.");
}

#[tokio::test]
async fn test_generate_text_api_error_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(config_for(&server));
    let err = backend.generate_text(&request("x")).await.unwrap_err();
    assert_eq!(
        err,
        BackendError::Api {
            status: 429,
            body: "slow down".to_string()
        }
    );
}

#[tokio::test]
async fn test_generate_text_without_key_is_unavailable() {
    let backend = OpenAiBackend::new(ModelConfig::default());
    let err = backend.generate_text(&request("x")).await.unwrap_err();
    assert!(matches!(err, BackendError::Unavailable(_)));
}

#[tokio::test]
async fn test_agent_executes_through_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"content": "analysis"}}]
        })))
        .mount(&server)
        .await;

    let backend = Arc::new(OpenAiBackend::new(config_for(&server)));
    let agent = AgentProfile::new("Lead Market Analyst", "goal", "story").bind(backend);
    assert_eq!(agent.execute("analyze").await.unwrap(), "analysis");
}

// --- Image generation ---

#[tokio::test]
async fn test_generate_image_uses_fixed_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(serde_json::json!({
            "model": "dall-e-3",
            "prompt": "a radio on a kitchen table",
            "size": "1024x1024",
            "quality": "standard",
            "n": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"url": "https://images.example/1.png"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(config_for(&server));
    let url = backend
        .generate_image(
            "a radio on a kitchen table",
            ImageSize::Square,
            ImageQuality::Standard,
        )
        .await
        .unwrap();
    assert_eq!(url, "https://images.example/1.png");
}

#[tokio::test]
async fn test_generate_image_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(config_for(&server));
    let err = backend
        .generate_image("p", ImageSize::Square, ImageQuality::Standard)
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Malformed(_)));
}

#[tokio::test]
async fn test_generate_image_unsupported_provider() {
    let backend = OpenAiBackend::new(ModelConfig {
        provider: LlmProvider::Groq,
        api_key: "k".to_string(),
        ..ModelConfig::default()
    });
    let err = backend
        .generate_image("p", ImageSize::Square, ImageQuality::Standard)
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Unavailable(_)));
}
