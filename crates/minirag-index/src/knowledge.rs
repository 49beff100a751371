//! Chunk every document and index them together

use crate::search::SearchIndex;
use minirag_core::{chunk_text, ChunkConfig, Document, Result, Settings};
use std::collections::BTreeSet;
use tracing::info;

/// Result of one wholesale build over a document set
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub index: SearchIndex,
    /// Distinct sources that produced at least one chunk
    pub sources: BTreeSet<String>,
    pub chunk_count: usize,
}

/// Chunk documents in input order and build one index over all chunks
pub fn build_knowledge_index<I, D>(documents: I, config: &ChunkConfig) -> Result<KnowledgeBase>
where
    I: IntoIterator<Item = D>,
    D: Into<Document>,
{
    let settings = Settings {
        chunk: *config,
        ..Settings::default()
    };
    build_knowledge_index_with(documents, &settings)
}

/// Same as [`build_knowledge_index`], with the tokenizer taken from `settings`
pub fn build_knowledge_index_with<I, D>(documents: I, settings: &Settings) -> Result<KnowledgeBase>
where
    I: IntoIterator<Item = D>,
    D: Into<Document>,
{
    settings.validate()?;

    let mut all_chunks = Vec::new();
    let mut doc_count = 0;
    for doc in documents {
        let doc: Document = doc.into();
        all_chunks.extend(chunk_text(&doc.source, &doc.text, &settings.chunk)?);
        doc_count += 1;
    }

    let sources: BTreeSet<String> = all_chunks.iter().map(|c| c.source.clone()).collect();
    let chunk_count = all_chunks.len();
    let index = SearchIndex::build_with(all_chunks, &settings.tokenizer)?;

    info!(
        documents = doc_count,
        sources = sources.len(),
        chunks = chunk_count,
        "built knowledge index"
    );

    Ok(KnowledgeBase {
        index,
        sources,
        chunk_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use minirag_core::Error;

    #[test]
    fn test_cat_scenario() {
        let kb = build_knowledge_index(
            [("a", "The cat sat on the mat."), ("b", "Dogs bark at cats.")],
            &ChunkConfig::default(),
        )
        .unwrap();
        assert_eq!(kb.chunk_count, 2);
        assert_eq!(kb.sources.len(), 2);

        let hits = kb.index.query("cat", 2);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].chunk.id, "a::0");
        assert!(hits[0].score > 0.0);
    }

    #[test]
    fn test_empty_documents() {
        let docs: Vec<Document> = vec![];
        let kb = build_knowledge_index(docs, &ChunkConfig::default()).unwrap();
        assert_eq!(kb.chunk_count, 0);
        assert!(kb.sources.is_empty());
        assert!(kb.index.query("anything", 4).is_empty());
    }

    #[test]
    fn test_blank_document_contributes_no_source() {
        let kb = build_knowledge_index(
            [("empty", "   \n\n  "), ("full", "real content")],
            &ChunkConfig::default(),
        )
        .unwrap();
        assert_eq!(kb.chunk_count, 1);
        assert!(kb.sources.contains("full"));
        assert!(!kb.sources.contains("empty"));
    }

    #[test]
    fn test_preserves_document_order() {
        let long = "lorem ipsum dolor ".repeat(30);
        let kb = build_knowledge_index(
            vec![
                Document::new("first", long.clone()),
                Document::new("second", long),
            ],
            &ChunkConfig::new(100, 20),
        )
        .unwrap();
        let chunks = kb.index.chunks();
        assert_eq!(kb.chunk_count, chunks.len());

        let split = chunks.iter().position(|c| c.source == "second").unwrap();
        assert!(chunks[..split].iter().all(|c| c.source == "first"));
        assert!(chunks[split..].iter().all(|c| c.source == "second"));
        assert_eq!(chunks[0].id, "first::0");
        assert_eq!(chunks[split].id, "second::0");
    }

    #[test]
    fn test_invalid_config_even_without_documents() {
        let docs: Vec<Document> = vec![];
        let err = build_knowledge_index(docs, &ChunkConfig::new(100, 100)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_settings_tokenizer_applies_to_queries() {
        let mut settings = Settings::default();
        settings.tokenizer.stop_words.push("mat".to_string());
        let kb = build_knowledge_index_with([("a", "The cat sat on the mat.")], &settings).unwrap();
        assert!(kb.index.query("mat", 1).is_empty());
        assert_eq!(kb.index.query("sat", 1).len(), 1);
    }
}
