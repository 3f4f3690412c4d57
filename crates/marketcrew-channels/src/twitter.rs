use crate::platform::Platform;
use crate::publisher::SocialPublisher;
use async_trait::async_trait;
use marketcrew_core::PostingError;
use serde::Serialize;

/// Twitter API v2 publisher: a single tweet carrying the caption and the
/// image URL as media.
pub struct TwitterPublisher {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
    media: TweetMedia<'a>,
}

#[derive(Debug, Serialize)]
struct TweetMedia<'a> {
    media_url: &'a str,
}

impl TwitterPublisher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SocialPublisher for TwitterPublisher {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    async fn publish(
        &self,
        image_url: &str,
        caption: &str,
        credential: &str,
    ) -> Result<(), PostingError> {
        let payload = TweetRequest {
            text: caption,
            media: TweetMedia {
                media_url: image_url,
            },
        };

        let response = self
            .client
            .post(format!("{}/2/tweets", self.base_url))
            .bearer_auth(credential)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PostingError::Http(format!("Twitter send error: {e}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PostingError::Rejected {
                platform: Platform::Twitter.to_string(),
                reason: format!("HTTP {status}: {body}"),
            })
        }
    }
}
