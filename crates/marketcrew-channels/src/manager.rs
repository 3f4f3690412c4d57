use crate::config::SocialConfig;
use crate::facebook::FacebookPublisher;
use crate::instagram::InstagramPublisher;
use crate::platform::{Credentials, Platform};
use crate::publisher::{PostOutcome, SocialPublisher};
use crate::twitter::TwitterPublisher;
use futures_util::future::join_all;
use marketcrew_core::PostingError;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Publishers keyed by platform.
///
/// Fans a post out to every platform that has a credential. Attempts run
/// concurrently, each at most once, and every attempt is recorded on its
/// own; errors never leave this type.
pub struct PublisherSet {
    publishers: BTreeMap<Platform, Box<dyn SocialPublisher>>,
}

impl PublisherSet {
    pub fn new() -> Self {
        Self {
            publishers: BTreeMap::new(),
        }
    }

    /// All three platform publishers, wired from config.
    pub fn from_config(config: &SocialConfig) -> Self {
        let mut set = Self::new();
        set.add(Box::new(FacebookPublisher::new(
            &config.facebook_page_id,
            &config.facebook_base_url,
        )));
        set.add(Box::new(InstagramPublisher));
        set.add(Box::new(TwitterPublisher::new(&config.twitter_base_url)));
        set
    }

    /// Register a publisher, replacing any previous one for its platform.
    pub fn add(&mut self, publisher: Box<dyn SocialPublisher>) {
        self.publishers.insert(publisher.platform(), publisher);
    }

    pub fn get(&self, platform: Platform) -> Option<&dyn SocialPublisher> {
        self.publishers.get(&platform).map(AsRef::as_ref)
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.publishers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.publishers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty()
    }

    /// Post to a single platform and record the result.
    pub async fn post_to_platform(
        &self,
        platform: Platform,
        image_url: &str,
        caption: &str,
        credential: &str,
    ) -> PostOutcome {
        let result = if credential.trim().is_empty() {
            Err(PostingError::MissingCredential(platform.to_string()))
        } else {
            match self.publishers.get(&platform) {
                Some(publisher) => publisher.publish(image_url, caption, credential).await,
                None => Err(PostingError::Unsupported(platform.to_string())),
            }
        };

        match result {
            Ok(()) => {
                info!(platform = %platform, "Posted");
                PostOutcome::posted(platform)
            }
            Err(e) => {
                warn!(platform = %platform, error = %e, "Posting failed");
                PostOutcome::failed(platform, &e)
            }
        }
    }

    /// Post to every platform with a non-empty credential. Platforms without
    /// one are not attempted and produce no outcome.
    pub async fn publish_all(
        &self,
        image_url: &str,
        caption: &str,
        credentials: &Credentials,
    ) -> Vec<PostOutcome> {
        let attempts = credentials.present().map(|(platform, token)| {
            self.post_to_platform(platform, image_url, caption, token)
        });
        join_all(attempts).await
    }
}

impl Default for PublisherSet {
    fn default() -> Self {
        Self::new()
    }
}
