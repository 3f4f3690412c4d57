use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-platform access tokens. Empty tokens count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<Platform, String>);

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, platform: Platform, token: impl Into<String>) -> Self {
        self.set(platform, token);
        self
    }

    pub fn set(&mut self, platform: Platform, token: impl Into<String>) {
        self.0.insert(platform, token.into());
    }

    /// Set the token only when one was given.
    pub fn set_opt(&mut self, platform: Platform, token: Option<String>) {
        if let Some(token) = token {
            self.set(platform, token);
        }
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0
            .get(&platform)
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
    }

    /// Platforms with a usable token, in platform order.
    pub fn present(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|t| (p, t)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_are_absent() {
        let creds = Credentials::new()
            .with(Platform::Facebook, "fb-token")
            .with(Platform::Instagram, "")
            .with(Platform::Twitter, "  ");
        assert_eq!(creds.get(Platform::Facebook), Some("fb-token"));
        assert_eq!(creds.get(Platform::Instagram), None);
        let present: Vec<Platform> = creds.present().map(|(p, _)| p).collect();
        assert_eq!(present, vec![Platform::Facebook]);
    }

    #[test]
    fn test_is_empty() {
        assert!(Credentials::new().is_empty());
        assert!(Credentials::new().with(Platform::Twitter, "").is_empty());
        assert!(!Credentials::new().with(Platform::Twitter, "t").is_empty());
    }

    #[test]
    fn test_set_opt() {
        let mut creds = Credentials::new();
        creds.set_opt(Platform::Twitter, None);
        creds.set_opt(Platform::Facebook, Some("x".to_string()));
        assert_eq!(creds.present().count(), 1);
    }

    #[test]
    fn test_platform_display_and_serde() {
        assert_eq!(Platform::Twitter.to_string(), "twitter");
        let json = serde_json::to_string(&Platform::Facebook).unwrap_or_default();
        assert_eq!(json, "\"facebook\"");
    }
}
