use crate::platform::Platform;
use crate::publisher::SocialPublisher;
use async_trait::async_trait;
use marketcrew_core::PostingError;
use tracing::warn;

/// Instagram needs a container/publish flow against a business account,
/// which this publisher does not implement. Every attempt reports failure
/// without touching the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstagramPublisher;

#[async_trait]
impl SocialPublisher for InstagramPublisher {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn publish(
        &self,
        _image_url: &str,
        _caption: &str,
        _credential: &str,
    ) -> Result<(), PostingError> {
        warn!("Instagram posting is not implemented; skipping");
        Err(PostingError::Unsupported(Platform::Instagram.to_string()))
    }
}
