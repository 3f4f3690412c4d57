use regex::Regex;
use std::borrow::Cow;

/// SGR and erase-in-line sequences: ESC `[` params `m` | `K`.
const ANSI_PATTERN: &str = r"\x1B\[[0-9;]*[mK]";

/// Strips terminal colour and erase-line sequences from trace text.
///
/// Only CSI sequences ending in `m` or `K` are removed; everything else,
/// including newlines and other control characters, passes through.
#[derive(Debug, Clone)]
pub struct AnsiStripper {
    pattern: Regex,
}

impl AnsiStripper {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(ANSI_PATTERN)?,
        })
    }

    /// Remove control sequences. Borrows when the input was already clean.
    pub fn strip<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, "")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_is_borrowed() {
        let s = AnsiStripper::new().unwrap();
        let result = s.strip("Hello world\nNew line");
        assert!(matches!(result, Cow::Borrowed("Hello world\nNew line")));
    }

    #[test]
    fn test_colour_codes_stripped() {
        let s = AnsiStripper::new().unwrap();
        let input = "\x1b[1m\x1b[92m> Entering new CrewAgentExecutor chain...\x1b[0m";
        assert_eq!(s.strip(input), "> Entering new CrewAgentExecutor chain...");
    }

    #[test]
    fn test_erase_line_and_multi_param_stripped() {
        let s = AnsiStripper::new().unwrap();
        assert_eq!(s.strip("a\x1b[Kb\x1b[1;32;40mc"), "abc");
    }

    #[test]
    fn test_other_sequences_kept() {
        let s = AnsiStripper::new().unwrap();
        // cursor movement is not an m/K sequence
        assert_eq!(s.strip("x\x1b[2Ay"), "x\x1b[2Ay");
    }
}
