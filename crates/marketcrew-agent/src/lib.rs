//! Agents and the generation capabilities they delegate to.
//!
//! An [`Agent`] is a plain record (role, goal, backstory) bound to a shared
//! [`TextGenerator`]. Behaviour differences between agents live entirely in
//! the instruction text; there is no per-role code path.
//!
//! # Main types
//!
//! - [`Agent`] / [`AgentProfile`] — Actor identity plus its bound text capability.
//! - [`TextGenerator`] — `(role, goal, backstory, instruction) -> text`.
//! - [`ImageGenerator`] — `(prompt, size, quality) -> image URL`.
//! - [`OpenAiBackend`] — OpenAI-compatible implementation of both capabilities.
//! - [`ModelConfig`] — Provider, model and key configuration.

/// Agent records.
pub mod agent;
/// Generation capability traits and backend implementations.
pub mod backends;
/// Model and provider configuration.
pub mod config;

pub use agent::{Agent, AgentProfile, GenerationRequest};
pub use backends::openai::OpenAiBackend;
pub use backends::{ImageGenerator, ImageQuality, ImageSize, TextGenerator};
pub use config::{LlmProvider, ModelConfig};
