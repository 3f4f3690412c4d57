use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A convenience `Result` alias using [`BackendError`].
pub type BackendResult<T> = Result<T, BackendError>;

/// A convenience `Result` alias using [`CrewError`].
pub type CrewResult<T> = Result<T, CrewError>;

/// A convenience `Result` alias using [`PipelineError`].
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Failure of the text or image generation backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response arrived but did not have the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The backend cannot be used at all (missing key, unsupported provider).
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a crew run. Every variant past construction identifies the
/// failing member by position and task identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrewError {
    /// A crew must have at least one member.
    #[error("Crew has no members")]
    Empty,

    /// Two members share a task identifier, so outputs could not be keyed.
    #[error("Duplicate task identifier '{0}' in crew")]
    DuplicateTask(String),

    /// The task instruction referenced an output that was never produced.
    #[error("Render error at member {position} ('{task_id}'): {reason}")]
    Render {
        position: usize,
        task_id: String,
        reason: String,
    },

    /// The bound agent's backend call failed.
    #[error("Backend error at member {position} ('{task_id}'): {source}")]
    Backend {
        position: usize,
        task_id: String,
        #[source]
        source: BackendError,
    },
}

impl CrewError {
    /// Position of the failing member, when the failure belongs to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            CrewError::Render { position, .. } | CrewError::Backend { position, .. } => {
                Some(*position)
            }
            CrewError::Empty | CrewError::DuplicateTask(_) => None,
        }
    }

    /// Task identifier of the failing member, when the failure belongs to one.
    pub fn task_id(&self) -> Option<&str> {
        match self {
            CrewError::Render { task_id, .. } | CrewError::Backend { task_id, .. } => {
                Some(task_id)
            }
            CrewError::DuplicateTask(id) => Some(id),
            CrewError::Empty => None,
        }
    }

    /// True when the failure happened while rendering the instruction.
    pub fn is_render(&self) -> bool {
        matches!(self, CrewError::Render { .. })
    }
}

/// Failure to post on a single platform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostingError {
    /// No credential (or an empty one) was supplied.
    #[error("No credential supplied for {0}")]
    MissingCredential(String),

    /// The platform answered but did not accept the post.
    #[error("{platform} rejected the post: {reason}")]
    Rejected { platform: String, reason: String },

    /// The request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Posting is not available for this platform.
    #[error("Posting to {0} is not supported")]
    Unsupported(String),
}

/// The fixed stages of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Content crew: analysis, strategy and ad copy.
    Content,
    /// Media crew: photograph description.
    Media,
    /// Image backend call.
    Image,
    /// Best-effort social posting.
    Posting,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Content => write!(f, "content"),
            Stage::Media => write!(f, "media"),
            Stage::Image => write!(f, "image"),
            Stage::Posting => write!(f, "posting"),
        }
    }
}

/// An aborted pipeline run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A crew stage failed; nothing downstream of it ran.
    #[error("Stage '{stage}' failed: {source}")]
    Crew {
        stage: Stage,
        #[source]
        source: CrewError,
    },

    /// The request could not start a run.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PipelineError {
    /// The stage that aborted the run, if one started.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Crew { stage, .. } => Some(*stage),
            PipelineError::InvalidRequest(_) => None,
        }
    }
}
