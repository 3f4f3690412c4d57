//! `marketcrew.toml` loading.
//!
//! Every section is optional; a missing file yields the defaults. The model
//! API key may come from the file or from `OPENAI_API_KEY`.

use anyhow::Context;
use marketcrew_agent::ModelConfig;
use marketcrew_channels::SocialConfig;
use marketcrew_trace::AnnotatorConfig;
use serde::Deserialize;
use std::path::Path;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketcrewConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub social: SocialConfig,
    #[serde(default)]
    pub annotator: AnnotatorConfig,
}

impl MarketcrewConfig {
    /// Read `path`, or fall back to defaults when it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::parse(&raw)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Fill an empty `model.api_key` from the environment value, if any.
    pub fn apply_api_key(&mut self, env_value: Option<String>) {
        if self.model.api_key.trim().is_empty() {
            if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
                self.model.api_key = key;
            }
        }
    }

    /// Fail early when no key is available for the model provider.
    pub fn require_api_key(&self) -> anyhow::Result<()> {
        if self.model.api_key.trim().is_empty() {
            anyhow::bail!("No model API key configured; set {API_KEY_ENV} or [model].api_key");
        }
        Ok(())
    }
}
