pub mod openai;

use crate::agent::GenerationRequest;
use async_trait::async_trait;
use marketcrew_core::BackendResult;
use serde::{Deserialize, Serialize};

/// The language-model capability agents delegate to.
///
/// Implementations block (await) until the full response is available.
/// There is no timeout or cancellation at this layer; callers wrap the
/// whole run if they need one.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, request: &GenerationRequest<'_>) -> BackendResult<String>;
}

/// The image capability: prompt in, hosted image URL out.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
        quality: ImageQuality,
    ) -> BackendResult<String>;
}

/// Image dimensions. Campaign photos are always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square => "1024x1024",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Standard,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_image_parameters_match_wire_values() {
        assert_eq!(ImageSize::default(), ImageSize::Square);
        assert_eq!(ImageQuality::default(), ImageQuality::Standard);
        assert_eq!(
            serde_json::to_string(&ImageSize::Square).unwrap(),
            format!("\"{}\"", ImageSize::Square.as_str())
        );
        assert_eq!(
            serde_json::to_string(&ImageQuality::Standard).unwrap(),
            format!("\"{}\"", ImageQuality::Standard.as_str())
        );
    }
}
