use regex::Regex;

/// Emitted by a crew member when its executor chain starts.
pub const CHAIN_ENTERED: &str = "Entering new CrewAgentExecutor chain";
/// Emitted by a crew member when its executor chain ends.
pub const CHAIN_FINISHED: &str = "Finished chain.";

/// A slice of cleaned trace text, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Anything that is not a marker.
    PlainText(&'a str),
    /// The "chain entered" marker; advances the colour cursor.
    ChainBoundary(&'a str),
    /// One of the configured agent role names.
    RoleMarker(&'a str),
    /// The "chain finished" marker.
    ChainEnd(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::PlainText(s)
            | Token::ChainBoundary(s)
            | Token::RoleMarker(s)
            | Token::ChainEnd(s) => s,
        }
    }

    pub fn is_marker(&self) -> bool {
        !matches!(self, Token::PlainText(_))
    }
}

/// Splits text into [`Token`]s in one left-to-right pass.
///
/// All markers are literal substrings compiled into a single alternation.
/// Longer markers are tried first, so a role that contains another role
/// is matched whole.
#[derive(Debug, Clone)]
pub struct MarkerTokenizer {
    pattern: Regex,
}

impl MarkerTokenizer {
    pub fn new<I, S>(role_markers: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut literals: Vec<String> = vec![CHAIN_ENTERED.to_string(), CHAIN_FINISHED.to_string()];
        for role in role_markers {
            let role = role.as_ref();
            if !role.is_empty() && !literals.iter().any(|l| l == role) {
                literals.push(role.to_string());
            }
        }
        literals.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = literals
            .iter()
            .map(|l| regex::escape(l))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            pattern: Regex::new(&alternation)?,
        })
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for m in self.pattern.find_iter(text) {
            if m.start() > last {
                tokens.push(Token::PlainText(&text[last..m.start()]));
            }
            let marker = m.as_str();
            tokens.push(match marker {
                CHAIN_ENTERED => Token::ChainBoundary(marker),
                CHAIN_FINISHED => Token::ChainEnd(marker),
                _ => Token::RoleMarker(marker),
            });
            last = m.end();
        }

        if last < text.len() {
            tokens.push(Token::PlainText(&text[last..]));
        }
        tokens
    }
}
