use crate::platform::Platform;
use async_trait::async_trait;
use marketcrew_core::PostingError;
use serde::{Deserialize, Serialize};

/// What happened on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOutcome {
    pub platform: Platform,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostOutcome {
    pub fn posted(platform: Platform) -> Self {
        Self {
            platform,
            success: true,
            error: None,
        }
    }

    pub fn failed(platform: Platform, error: &PostingError) -> Self {
        Self {
            platform,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

#[async_trait]
pub trait SocialPublisher: Send + Sync {
    fn platform(&self) -> Platform;

    /// Post `image_url` with `caption`, authenticated by `credential`.
    async fn publish(
        &self,
        image_url: &str,
        caption: &str,
        credential: &str,
    ) -> Result<(), PostingError>;
}
