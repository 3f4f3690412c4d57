use marketcrew_trace::DisplaySink;
use std::io::{self, Write};

/// Annotated trace on stdout, task notifications on stderr.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    flushed: usize,
}

impl TerminalDisplay {
    /// Number of blocks written so far.
    pub fn flushed(&self) -> usize {
        self.flushed
    }
}

impl DisplaySink for TerminalDisplay {
    fn flush(&mut self, annotated: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(annotated.as_bytes());
        let _ = out.flush();
        self.flushed += 1;
    }

    fn notify(&mut self, task_label: &str) {
        eprintln!("🤖 {task_label}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use marketcrew_trace::{Annotator, AnnotatorConfig};

    #[test]
    fn test_finished_annotator_reports_flush_count() {
        let mut annotator =
            Annotator::new(&AnnotatorConfig::default(), TerminalDisplay::default()).unwrap();
        annotator.consume("first line\n");
        annotator.consume("tail");
        let terminal = annotator.finish();
        tracing::info!(blocks = terminal.flushed(), "Trace complete");
        assert_eq!(terminal.flushed(), 2);
    }
}
