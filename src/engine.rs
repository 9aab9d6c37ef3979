//! The `SpellPhone` engine: installed word lists, the per-run expansion
//! cache, and the conversion entry points.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::{debug, debug_span};

use crate::converter::{
    self, expand, ConvertError, ConvertOptions, LetterDensity, ScoreStrategy, SegmentGraph,
    Spelling,
};
use crate::dict::source::{source_for, SourceError};
use crate::dict::WordList;
use crate::keypad::Keypad;

/// Read-only configuration supplied at engine construction: one keypad per
/// language code, plus the default conversion options.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub keypads: HashMap<String, Keypad>,
    pub options: ConvertOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut keypads = HashMap::new();
        keypads.insert("en".to_string(), Keypad::us_english());
        Self {
            keypads,
            options: ConvertOptions::default(),
        }
    }
}

/// Converts phone numbers into ranked mnemonic spellings.
///
/// Word lists are installed per language, either directly or through the
/// built-in source registry. Expansion results are memoized per
/// (language, digit run) for the lifetime of the instance; the cache is
/// append-only, never invalidated, and hands out clones so callers can't
/// mutate cached entries. The lock is read-mostly: a racing recompute for
/// the same key inserts the same value, and the first insert wins.
pub struct SpellPhone {
    config: EngineConfig,
    word_lists: HashMap<String, WordList>,
    cache: RwLock<HashMap<(String, String), Vec<String>>>,
    expansion_count: AtomicU64,
}

impl SpellPhone {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            word_lists: HashMap::new(),
            cache: RwLock::new(HashMap::new()),
            expansion_count: AtomicU64::new(0),
        }
    }

    /// Install a word list for a language. Idempotent; last write wins.
    pub fn add_word_list(&mut self, lang: impl Into<String>, words: WordList) {
        let lang = lang.into();
        debug!(lang = %lang, words = words.len(), "word list installed");
        self.word_lists.insert(lang, words);
    }

    pub fn word_list(&self, lang: &str) -> Option<&WordList> {
        self.word_lists.get(lang)
    }

    /// Fetch and install a word list through the built-in source registry.
    /// A failed fetch leaves the language unloaded.
    pub fn load_word_list(&mut self, lang: &str) -> Result<(), SourceError> {
        let source =
            source_for(lang).ok_or_else(|| SourceError::UnknownLanguage(lang.to_string()))?;
        let words = source.fetch()?;
        self.add_word_list(lang, words);
        Ok(())
    }

    /// Convert `number` using the default scoring rule and the engine's
    /// configured options. Non-digit characters are stripped first; an
    /// empty normalized number yields an empty result.
    pub fn convert(&self, number: &str, lang: &str) -> Result<Vec<Spelling>, ConvertError> {
        self.convert_with(number, lang, &LetterDensity, self.config.options)
    }

    /// Convert with an explicit scoring rule and options.
    pub fn convert_with(
        &self,
        number: &str,
        lang: &str,
        strategy: &dyn ScoreStrategy,
        options: ConvertOptions,
    ) -> Result<Vec<Spelling>, ConvertError> {
        if lang.is_empty() {
            return Err(ConvertError::MissingLanguage);
        }
        let words = self
            .word_lists
            .get(lang)
            .ok_or_else(|| ConvertError::DictionaryNotLoaded(lang.to_string()))?;
        let keypad = self.config.keypads.get(lang).ok_or_else(|| {
            ConvertError::InvalidArgument(format!("no keypad configured for language `{lang}`"))
        })?;

        let digits = converter::normalize(number);
        if digits.is_empty() {
            return Ok(Vec::new());
        }
        let _span = debug_span!("convert", number = %digits, lang).entered();

        let graph = SegmentGraph::build(&digits, &mut |run| {
            self.expand_cached(lang, keypad, words, run)
        })?;
        Ok(converter::spell(&graph, strategy, options))
    }

    /// Memoized expansion. Cache entries are cloned out; the counter tracks
    /// real (non-memoized) expansion runs.
    fn expand_cached(
        &self,
        lang: &str,
        keypad: &Keypad,
        words: &WordList,
        run: &str,
    ) -> Vec<String> {
        if let Ok(cache) = self.cache.read() {
            if let Some(hit) = cache.get(&(lang.to_string(), run.to_string())) {
                return hit.clone();
            }
        }

        let expanded = expand(keypad, words, run);
        self.expansion_count.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut cache) = self.cache.write() {
            return cache
                .entry((lang.to_string(), run.to_string()))
                .or_insert(expanded)
                .clone();
        }
        expanded
    }

    /// Number of expansion runs that were not served from the cache.
    pub fn expansions(&self) -> u64 {
        self.expansion_count.load(Ordering::Relaxed)
    }
}
