//! Core types and error definitions for the marketcrew pipeline.
//!
//! This crate provides the pieces every other marketcrew crate agrees on:
//! the error taxonomy used across crew execution, backends and posting, and
//! the [`TraceSink`] seam through which crews emit human-facing trace text.
//!
//! # Main types
//!
//! - [`BackendError`] — Failure of the text or image generation backend.
//! - [`CrewError`] — Render or backend failure, tagged with the failing member.
//! - [`PostingError`] — Per-platform posting failure (never propagated past the publisher set).
//! - [`PipelineError`] — Aborted pipeline run, tagged with the failing [`Stage`].
//! - [`TraceSink`] — Receiver for raw trace text emitted during crew execution.

/// Error types for every marketcrew subsystem.
pub mod error;
/// Trace text injection point.
pub mod trace;

pub use error::{
    BackendError, BackendResult, CrewError, CrewResult, PipelineError, PipelineResult,
    PostingError, Stage,
};
pub use trace::{NullTrace, TraceSink};
