use crate::platform::Platform;
use crate::publisher::SocialPublisher;
use async_trait::async_trait;
use marketcrew_core::PostingError;
use serde::Deserialize;
use tracing::debug;

/// Facebook Graph API publisher.
///
/// Two calls: upload the photo to the page, then create a feed post that
/// attaches the uploaded photo with the caption. Each step only counts as
/// accepted when the response body carries an `id`.
pub struct FacebookPublisher {
    page_id: String,
    base_url: String,
    client: reqwest::Client,
}

// ── Graph API response types ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GraphResponse {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<GraphError>,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    #[serde(default)]
    message: String,
}

impl GraphResponse {
    fn id(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn reason(&self, step: &str) -> String {
        match &self.error {
            Some(err) => format!("{step} failed: {}", err.message),
            None => format!("{step} returned no id"),
        }
    }
}

// ── Implementation ──────────────────────────────────────────────────────────

impl FacebookPublisher {
    pub fn new(page_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, edge: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.page_id, edge)
    }

    async fn post_form(
        &self,
        edge: &str,
        form: &[(&str, &str)],
        access_token: &str,
    ) -> Result<GraphResponse, PostingError> {
        let response = self
            .client
            .post(self.api_url(edge))
            .query(&[("access_token", access_token)])
            .form(form)
            .send()
            .await
            .map_err(|e| PostingError::Http(format!("Facebook {edge} error: {e}")))?;

        response
            .json()
            .await
            .map_err(|e| PostingError::Http(format!("Facebook {edge} parse error: {e}")))
    }

    fn rejected(reason: String) -> PostingError {
        PostingError::Rejected {
            platform: Platform::Facebook.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl SocialPublisher for FacebookPublisher {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    async fn publish(
        &self,
        image_url: &str,
        caption: &str,
        credential: &str,
    ) -> Result<(), PostingError> {
        let photo = self
            .post_form("photos", &[("url", image_url)], credential)
            .await?;
        let media_id = photo
            .id()
            .ok_or_else(|| Self::rejected(photo.reason("photo upload")))?;
        debug!(media_id = %media_id, "Facebook photo uploaded");

        let attached = serde_json::json!({ "media_fbid": media_id }).to_string();
        let feed = self
            .post_form(
                "feed",
                &[
                    ("message", caption),
                    ("published", "true"),
                    ("attached_media[0]", attached.as_str()),
                ],
                credential,
            )
            .await?;

        match feed.id() {
            Some(_) => Ok(()),
            None => Err(Self::rejected(feed.reason("feed post"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_trims_base() {
        let fb = FacebookPublisher::new("123", "https://graph.example/");
        assert_eq!(fb.api_url("photos"), "https://graph.example/123/photos");
    }

    #[test]
    fn test_graph_response_numeric_id() {
        let resp: GraphResponse = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(resp.id(), Some("42".to_string()));
    }

    #[test]
    fn test_graph_response_error_reason() {
        let resp: GraphResponse =
            serde_json::from_str(r#"{"error": {"message": "Invalid OAuth access token"}}"#)
                .unwrap();
        assert_eq!(resp.id(), None);
        assert_eq!(
            resp.reason("photo upload"),
            "photo upload failed: Invalid OAuth access token"
        );
    }
}
