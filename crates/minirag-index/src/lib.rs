//! TF-IDF search index over document chunks

mod knowledge;
mod search;
mod tfidf;
mod tokenize;

pub use knowledge::{build_knowledge_index, build_knowledge_index_with, KnowledgeBase};
pub use search::{SearchHit, SearchIndex};
pub use tfidf::{IdfTable, TermVector};
pub use tokenize::Tokenizer;
