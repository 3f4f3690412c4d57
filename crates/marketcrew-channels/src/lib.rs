//! Social media publishing for generated campaigns.
//!
//! Posting is best-effort and independent per platform: every attempt ends
//! in a [`PostOutcome`], and one platform's failure never touches another's.
//!
//! # Main types
//!
//! - [`SocialPublisher`] — Trait for posting an image and caption to one platform.
//! - [`PublisherSet`] — Fans a post out to every platform that has a credential.
//! - [`Credentials`] — Per-platform access tokens.
//! - [`FacebookPublisher`], [`InstagramPublisher`], [`TwitterPublisher`] — Platform adapters.

/// Platform configuration.
pub mod config;
/// Facebook Graph API publisher.
pub mod facebook;
/// Instagram publisher.
pub mod instagram;
/// Publisher set for multi-platform fan-out.
pub mod manager;
/// Platforms and credentials.
pub mod platform;
/// Core publisher trait and outcome types.
pub mod publisher;
/// Twitter API v2 publisher.
pub mod twitter;

pub use config::SocialConfig;
pub use facebook::FacebookPublisher;
pub use instagram::InstagramPublisher;
pub use manager::PublisherSet;
pub use platform::{Credentials, Platform};
pub use publisher::{PostOutcome, SocialPublisher};
pub use twitter::TwitterPublisher;
