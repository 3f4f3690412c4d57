//! Crew execution and the marketing pipeline.
//!
//! A [`Crew`] is a straight-line chain of agent/task pairs; each task's
//! instruction is rendered from the crew inputs and the outputs of earlier
//! tasks. The [`Pipeline`] runs two such crews (content, then media), asks
//! the image backend for a picture, and posts the result.
//!
//! # Main types
//!
//! - [`Pipeline`] — Content → media → image → posting, in fixed order.
//! - [`Crew`] — Sequential agent/task chain with named output substitution.
//! - [`Task`] — Instruction template plus optional expected-output note.
//! - [`Roster`] — The default four marketing agents.
//! - [`PipelineRun`] — Serializable record of one run.

/// Crew chain execution.
pub mod crew;
/// Pipeline orchestration.
pub mod engine;
/// Default marketing agents and task templates.
pub mod profiles;
/// Task and output records.
pub mod types;

pub use crew::{Crew, CrewMember};
pub use engine::{CampaignRequest, Pipeline, PipelineRun};
pub use profiles::{content_crew, media_crew, Roster, CONTENT_TASKS, MEDIA_TASKS};
pub use types::{CrewOutput, Task, TaskOutput};
