//! Word-list sources: where to fetch a language's dictionary and how to
//! parse the payload.
//!
//! A source is a URL plus a payload format. Fetching is a one-shot blocking
//! download; failures are surfaced to the caller and never leave a language
//! half-loaded.

use std::fs;
use std::io;
use std::path::Path;

use super::{ParseError, WordList};

const EN_WORDS_URL: &str =
    "https://cdn.jsdelivr.net/gh/aplumly/array-of-over-3000-english-words/javaArray.txt";

/// Failure while loading a word-list resource.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("no word-list source registered for language: {0}")]
    UnknownLanguage(String),
}

/// How a source's raw payload is turned into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON array of words, or JSON object keyed by word.
    Json,
    /// Free-form text containing `"word"` tokens (e.g. a JS array literal).
    QuotedTokens,
}

impl SourceFormat {
    pub fn parse(&self, payload: &str) -> Result<WordList, ParseError> {
        match self {
            SourceFormat::Json => WordList::from_json(payload),
            SourceFormat::QuotedTokens => WordList::from_quoted_tokens(payload),
        }
    }

    /// Guess the format from the payload itself: JSON documents start with
    /// an array or object bracket.
    pub fn sniff(payload: &str) -> SourceFormat {
        match payload.trim_start().as_bytes().first() {
            Some(b'[') | Some(b'{') => SourceFormat::Json,
            _ => SourceFormat::QuotedTokens,
        }
    }
}

/// A downloadable word list for one language.
#[derive(Debug, Clone)]
pub struct WordListSource {
    pub url: &'static str,
    pub format: SourceFormat,
}

impl WordListSource {
    /// Download and parse the word list.
    pub fn fetch(&self) -> Result<WordList, SourceError> {
        let url = self.url;
        let body = ureq::get(url)
            .call()
            .map_err(|e| SourceError::Http(format!("{url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| SourceError::Http(format!("{url}: {e}")))?;
        Ok(self.format.parse(&body)?)
    }
}

/// The built-in source for `lang`, if one is registered.
pub fn source_for(lang: &str) -> Option<WordListSource> {
    match lang {
        "en" => Some(WordListSource {
            url: EN_WORDS_URL,
            format: SourceFormat::QuotedTokens,
        }),
        _ => None,
    }
}

/// Languages with a built-in word-list source.
pub fn supported_languages() -> Vec<&'static str> {
    vec!["en"]
}

/// Read a word list from a local file, sniffing the payload format.
pub fn read_from_path(path: &Path) -> Result<WordList, SourceError> {
    let text = fs::read_to_string(path)?;
    Ok(SourceFormat::sniff(&text).parse(&text)?)
}
