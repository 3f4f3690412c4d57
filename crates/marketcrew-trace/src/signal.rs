use regex::Regex;

/// Structured form: `"task": "<value>"`.
const OBJECT_PATTERN: &str = r#"(?i)"task"\s*:\s*"(.*?)""#;
/// Loose form: `task: <rest of line>`.
const INPUT_PATTERN: &str = r"(?i)task\s*:\s*([^\n]*)";

/// Pulls a task identifier out of free trace text.
///
/// The structured key-value form wins over the loose one whenever it is
/// present, even if its value is empty.
#[derive(Debug, Clone)]
pub struct TaskSignal {
    object: Regex,
    input: Regex,
}

impl TaskSignal {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            object: Regex::new(OBJECT_PATTERN)?,
            input: Regex::new(INPUT_PATTERN)?,
        })
    }

    /// The extracted task label, or `None` when nothing (or only an empty
    /// value) was found.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let value = if let Some(caps) = self.object.captures(text) {
            caps.get(1).map(|m| m.as_str())
        } else {
            self.input
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
        };
        value.filter(|v| !v.is_empty())
    }
}
