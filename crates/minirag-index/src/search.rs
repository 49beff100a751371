//! Immutable TF-IDF index with cosine-ranked queries

use crate::tfidf::{IdfTable, TermVector};
use crate::tokenize::Tokenizer;
use minirag_core::{Chunk, Result, TokenizerConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// A ranked chunk; scores are always strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub chunk: &'a Chunk,
    pub score: f64,
}

/// Chunks and their term vectors, built once and read-only afterwards.
///
/// `vectors()[i]` always belongs to `chunks()[i]`. A new document set means
/// building a new index.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    chunks: Vec<Chunk>,
    vectors: Vec<TermVector>,
    idf: IdfTable,
    tokenizer: Tokenizer,
}

impl SearchIndex {
    /// Build with the default tokenizer. Never fails; an empty chunk list
    /// gives an empty index.
    pub fn build(chunks: Vec<Chunk>) -> Self {
        Self::build_inner(chunks, Tokenizer::default())
    }

    /// Build with a custom tokenizer configuration, which queries reuse
    pub fn build_with(chunks: Vec<Chunk>, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build_inner(chunks, Tokenizer::new(config)))
    }

    fn build_inner(chunks: Vec<Chunk>, tokenizer: Tokenizer) -> Self {
        let doc_tfs: Vec<BTreeMap<String, usize>> = chunks
            .iter()
            .map(|c| tokenizer.term_frequencies(&c.text))
            .collect();

        let idf = IdfTable::from_term_frequencies(&doc_tfs);
        let vectors = doc_tfs
            .iter()
            .map(|tf| TermVector::weighted(tf, &idf))
            .collect();

        debug!(chunks = chunks.len(), terms = idf.len(), "built tfidf index");

        Self {
            chunks,
            vectors,
            idf,
            tokenizer,
        }
    }

    /// Weight a query with the build-time IDF table; unknown terms drop out
    pub fn query_vector(&self, text: &str) -> TermVector {
        let tf = self.tokenizer.term_frequencies(text);
        TermVector::weighted(&tf, &self.idf)
    }

    /// Up to `max(1, top_k)` chunks with positive cosine similarity to
    /// `text`, best first. Equal scores keep chunk order.
    pub fn query(&self, text: &str, top_k: usize) -> Vec<SearchHit<'_>> {
        let top_k = top_k.max(1);
        let query_vec = self.query_vector(text);
        if query_vec.is_empty() {
            debug!("query has no indexed terms");
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, vec)| (idx, query_vec.cosine(vec)))
            .filter(|&(_, score)| score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(top_k);

        debug!(
            terms = query_vec.len(),
            hits = scored.len(),
            top_k,
            "ranked query"
        );

        scored
            .into_iter()
            .map(|(idx, score)| SearchHit {
                chunk: &self.chunks[idx],
                score,
            })
            .collect()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
