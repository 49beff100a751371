//! Core types for document chunks

use serde::{Deserialize, Serialize};

/// Raw `(source, text)` pair handed to the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Filename or URL-like path of the originating document
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for Document {
    fn from((source, text): (S, T)) -> Self {
        Self::new(source, text)
    }
}

/// A contiguous, trimmed slice of one source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `<source>::<ordinal>`, unique within a build
    pub id: String,
    pub source: String,
    /// Never empty
    pub text: String,
}

impl Chunk {
    pub fn new(source: &str, ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("{source}::{ordinal}"),
            source: source.to_string(),
            text: text.into(),
        }
    }

    /// Ordinal encoded in the id suffix
    pub fn ordinal(&self) -> Option<usize> {
        self.id.rsplit_once("::")?.1.parse().ok()
    }
}
