/// Receiver for the raw trace text a crew emits while it runs.
///
/// Crews take a `&mut dyn TraceSink`, so exactly one writer exists per run
/// and no process-wide output capture is needed. Chunks are not guaranteed
/// to be line aligned.
pub trait TraceSink: Send {
    /// Accept one chunk of raw trace text.
    fn write(&mut self, chunk: &str);
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn write(&mut self, _chunk: &str) {}
}

impl TraceSink for String {
    fn write(&mut self, chunk: &str) {
        self.push_str(chunk);
    }
}

impl TraceSink for Vec<String> {
    fn write(&mut self, chunk: &str) {
        self.push(chunk.to_string());
    }
}
