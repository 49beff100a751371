//! Configuration for chunking, tokenization and retrieval

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHUNK_SIZE: usize = 900;
pub const DEFAULT_OVERLAP: usize = 120;
pub const DEFAULT_TOP_K: usize = 4;

const DEFAULT_MIN_TOKEN_LEN: usize = 2;
const DEFAULT_MAX_TOKEN_LEN: usize = 40;
const DEFAULT_MAX_CONTEXT_CHARS: usize = 800;

static STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "in", "is", "it", "for", "on", "with", "as", "at",
    "by", "be", "are", "was", "were", "this", "that", "these", "those", "you", "your", "we", "our",
    "i",
];

/// Sliding window parameters, measured in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl ChunkConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Window advance between consecutive chunks
    pub fn step(&self) -> usize {
        self.chunk_size.saturating_sub(self.overlap).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.overlap >= self.chunk_size {
            return Err(Error::InvalidConfig(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP)
    }
}

/// Token filtering rules shared by index build and query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Shortest kept token, in characters
    pub min_token_len: usize,

    /// Longest kept token, in characters
    pub max_token_len: usize,

    /// Lower-case words dropped after extraction
    pub stop_words: Vec<String>,
}

impl TokenizerConfig {
    pub fn new() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig(
                "min_token_len must be greater than 0".to_string(),
            ));
        }
        if self.min_token_len > self.max_token_len {
            return Err(Error::InvalidConfig(format!(
                "min_token_len ({}) exceeds max_token_len ({})",
                self.min_token_len, self.max_token_len
            )));
        }
        Ok(())
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-facing settings, loadable from a partial JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chunk: ChunkConfig,
    pub tokenizer: TokenizerConfig,

    /// Hits returned per query
    pub top_k: usize,

    /// Budget for packed prompt context
    pub max_context_chars: usize,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            chunk: ChunkConfig::default(),
            tokenizer: TokenizerConfig::default(),
            top_k: DEFAULT_TOP_K,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.chunk.validate()?;
        self.tokenizer.validate()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_config_defaults() {
        let config = ChunkConfig::default();
        assert_eq!(config.chunk_size, 900);
        assert_eq!(config.overlap, 120);
        assert_eq!(config.step(), 780);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chunk_config_rejects_overlap_not_below_size() {
        assert!(matches!(
            ChunkConfig::new(100, 100).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            ChunkConfig::new(100, 250).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(ChunkConfig::new(100, 99).validate().is_ok());
        assert!(ChunkConfig::new(1, 0).validate().is_ok());
    }

    #[test]
    fn test_chunk_config_rejects_zero_size() {
        assert!(matches!(
            ChunkConfig::new(0, 0).validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_tokenizer_defaults() {
        let config = TokenizerConfig::default();
        assert_eq!(config.min_token_len, 2);
        assert_eq!(config.max_token_len, 40);
        assert_eq!(config.stop_words.len(), 29);
        assert!(config.stop_words.iter().any(|w| w == "the"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tokenizer_config_rejects_inverted_bounds() {
        let config = TokenizerConfig {
            min_token_len: 5,
            max_token_len: 3,
            ..TokenizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_settings_partial_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"top_k": 7, "chunk": {"overlap": 50}}"#).unwrap();
        assert_eq!(settings.top_k, 7);
        assert_eq!(settings.chunk.chunk_size, 900);
        assert_eq!(settings.chunk.overlap, 50);
        assert_eq!(settings.tokenizer, TokenizerConfig::default());
        assert_eq!(settings.max_context_chars, 800);
    }
}
