//! Word lists: the membership structures that back mnemonic filtering.
//!
//! A `WordList` is just a set of tokens with a `contains` test. The two
//! payload shapes accepted here (a JSON array of words, or a JSON object
//! keyed by word) match what word-list sources actually serve; the
//! quoted-token scanner handles lists published as JavaScript array
//! literals.

pub mod source;

use std::collections::HashSet;

/// Failure to turn a raw word-list payload into a `WordList`.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported payload shape: {0}")]
    Shape(String),

    #[error("no words found in payload")]
    Empty,
}

/// A membership-testable set of dictionary words for one language.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON payload: either an array of strings or an object whose
    /// keys are the words (values are ignored).
    pub fn from_json(payload: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        let words: HashSet<String> = match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Ok(s),
                    other => Err(ParseError::Shape(format!(
                        "array element is not a string: {other}"
                    ))),
                })
                .collect::<Result<_, _>>()?,
            serde_json::Value::Object(map) => map.into_iter().map(|(k, _)| k).collect(),
            other => {
                return Err(ParseError::Shape(format!(
                    "expected array or object, got {other}"
                )))
            }
        };
        if words.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { words })
    }

    /// Scan `"word"` tokens out of free-form text (e.g. a JavaScript array
    /// literal). A token is a maximal run of ASCII word characters between
    /// two double quotes.
    pub fn from_quoted_tokens(text: &str) -> Result<Self, ParseError> {
        let mut words = HashSet::new();
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'"' {
                let start = i + 1;
                let mut j = start;
                while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                    j += 1;
                }
                if j > start && j < bytes.len() && bytes[j] == b'"' {
                    words.insert(text[start..j].to_string());
                    i = j + 1;
                    continue;
                }
            }
            i += 1;
        }
        if words.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { words })
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
