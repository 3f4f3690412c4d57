use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Facebook page the photo and feed post are published to.
    #[serde(default = "default_page_id")]
    pub facebook_page_id: String,
    #[serde(default = "default_facebook_base_url")]
    pub facebook_base_url: String,
    #[serde(default = "default_twitter_base_url")]
    pub twitter_base_url: String,
}

fn default_page_id() -> String {
    "PAGE_ID".to_string()
}

fn default_facebook_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_twitter_base_url() -> String {
    "https://api.twitter.com".to_string()
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook_page_id: default_page_id(),
            facebook_base_url: default_facebook_base_url(),
            twitter_base_url: default_twitter_base_url(),
        }
    }
}
