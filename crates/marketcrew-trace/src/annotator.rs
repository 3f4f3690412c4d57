use crate::sanitizer::AnsiStripper;
use crate::signal::TaskSignal;
use crate::tokenizer::{MarkerTokenizer, Token};
use marketcrew_core::TraceSink;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Presentation callbacks fed by the [`Annotator`].
pub trait DisplaySink: Send {
    /// Show a block of annotated text (one or more whole lines).
    fn flush(&mut self, annotated: &str);
    /// Raise a short-lived progress notification.
    fn notify(&mut self, task_label: &str);
}

/// A sink that keeps everything in memory, in arrival order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryDisplay {
    pub flushes: Vec<String>,
    pub notifications: Vec<String>,
}

impl DisplaySink for MemoryDisplay {
    fn flush(&mut self, annotated: &str) {
        self.flushes.push(annotated.to_string());
    }

    fn notify(&mut self, task_label: &str) {
        self.notifications.push(task_label.to_string());
    }
}

#[derive(Error, Debug)]
pub enum AnnotatorError {
    #[error("Annotator palette must contain at least one colour")]
    EmptyPalette,

    #[error("Invalid annotator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Colour tags, rotated on every chain boundary.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Agent role names to highlight.
    #[serde(default)]
    pub role_markers: Vec<String>,
}

fn default_palette() -> Vec<String> {
    ["red", "green", "blue", "orange"]
        .iter()
        .map(|c| (*c).to_string())
        .collect()
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            role_markers: Vec::new(),
        }
    }
}

impl AnnotatorConfig {
    /// Add role markers, skipping ones already present.
    pub fn with_role_markers<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for role in roles {
            let role = role.into();
            if !self.role_markers.contains(&role) {
                self.role_markers.push(role);
            }
        }
        self
    }
}

/// Consumes raw trace chunks for one run and drives a [`DisplaySink`].
///
/// Per chunk: strip ANSI sequences, look for a task signal (notification
/// only), colour markers, append to the line buffer, and flush the whole
/// buffer once if the raw chunk held any newline. A chunk with several
/// newlines still flushes once.
///
/// Takes `&mut self` everywhere; one writer per run.
pub struct Annotator<S: DisplaySink> {
    sink: S,
    stripper: AnsiStripper,
    signal: TaskSignal,
    tokenizer: MarkerTokenizer,
    palette: Vec<String>,
    color_cursor: usize,
    line_buffer: Vec<String>,
}

impl<S: DisplaySink> Annotator<S> {
    pub fn new(config: &AnnotatorConfig, sink: S) -> Result<Self, AnnotatorError> {
        if config.palette.is_empty() {
            return Err(AnnotatorError::EmptyPalette);
        }
        Ok(Self {
            sink,
            stripper: AnsiStripper::new()?,
            signal: TaskSignal::new()?,
            tokenizer: MarkerTokenizer::new(&config.role_markers)?,
            palette: config.palette.clone(),
            color_cursor: 0,
            line_buffer: Vec::new(),
        })
    }

    pub fn consume(&mut self, raw: &str) {
        let cleaned = self.stripper.strip(raw);

        if let Some(label) = self.signal.extract(&cleaned) {
            trace!(task = %label, "Task signal");
            self.sink.notify(label);
        }

        let annotated = self.annotate(&cleaned);
        self.line_buffer.push(annotated);

        if raw.contains('\n') {
            self.flush_buffer();
        }
    }

    /// Flush whatever partial line is left and hand back the sink.
    pub fn finish(mut self) -> S {
        if !self.line_buffer.is_empty() {
            self.flush_buffer();
        }
        self.sink
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn color_cursor(&self) -> usize {
        self.color_cursor
    }

    pub fn current_color(&self) -> &str {
        &self.palette[self.color_cursor]
    }

    /// Number of fragments waiting for a newline.
    pub fn buffered(&self) -> usize {
        self.line_buffer.len()
    }

    fn annotate(&mut self, cleaned: &str) -> String {
        let mut out = String::with_capacity(cleaned.len());
        for token in self.tokenizer.tokenize(cleaned) {
            match token {
                Token::PlainText(text) => out.push_str(text),
                Token::ChainBoundary(text) => {
                    self.color_cursor = (self.color_cursor + 1) % self.palette.len();
                    push_tagged(&mut out, &self.palette[self.color_cursor], text);
                }
                Token::RoleMarker(text) | Token::ChainEnd(text) => {
                    push_tagged(&mut out, &self.palette[self.color_cursor], text);
                }
            }
        }
        out
    }

    fn flush_buffer(&mut self) {
        let block = self.line_buffer.concat();
        self.line_buffer.clear();
        self.sink.flush(&block);
    }
}

fn push_tagged(out: &mut String, color: &str, text: &str) {
    out.push(':');
    out.push_str(color);
    out.push('[');
    out.push_str(text);
    out.push(']');
}

impl<S: DisplaySink> TraceSink for Annotator<S> {
    fn write(&mut self, chunk: &str) {
        self.consume(chunk);
    }
}
