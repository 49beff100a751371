//! Tokenization shared by index build and query

use minirag_core::TokenizerConfig;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    // Maximal runs of Unicode letters and digits
    WORD_RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("static word regex"))
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_len: usize,
    max_len: usize,
    stop_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            min_len: config.min_token_len,
            max_len: config.max_token_len,
            stop_words: config
                .stop_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Lower-cased tokens in text order, length-filtered and without stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        word_re()
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|w| {
                let len = w.chars().count();
                len >= self.min_len && len <= self.max_len
            })
            .filter(|w| !self.stop_words.contains(*w))
            .map(str::to_string)
            .collect()
    }

    /// Raw occurrence count per distinct token
    pub fn term_frequencies(&self, text: &str) -> BTreeMap<String, usize> {
        let mut tf = BTreeMap::new();
        for token in self.tokenize(text) {
            *tf.entry(token).or_insert(0) += 1;
        }
        tf
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}
