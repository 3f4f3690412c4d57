//! Live annotation of crew trace text.
//!
//! Crews write raw, unaligned trace chunks; the [`Annotator`] cleans them,
//! raises a notification whenever a task identifier shows up, colours the
//! structural markers, and hands whole lines to a [`DisplaySink`].
//!
//! # Main types
//!
//! - [`Annotator`] — Stateful per-run consumer (implements [`marketcrew_core::TraceSink`]).
//! - [`AnnotatorConfig`] — Colour palette and role markers.
//! - [`DisplaySink`] — Presentation callbacks: `flush` and `notify`.
//! - [`MarkerTokenizer`] / [`Token`] — Splits cleaned text into plain text and markers.
//! - [`TaskSignal`] — Extracts task identifiers from free text.

/// The annotator state machine and display sink.
pub mod annotator;
/// ANSI/VT control sequence stripping.
pub mod sanitizer;
/// Task identifier extraction.
pub mod signal;
/// Marker tokenizer.
pub mod tokenizer;

pub use annotator::{Annotator, AnnotatorConfig, AnnotatorError, DisplaySink, MemoryDisplay};
pub use sanitizer::AnsiStripper;
pub use signal::TaskSignal;
pub use tokenizer::{MarkerTokenizer, Token, CHAIN_ENTERED, CHAIN_FINISHED};
