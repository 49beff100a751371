//! Core value types, configuration and chunking for local text retrieval

mod chunker;
mod config;
mod error;
mod types;

pub use chunker::chunk_text;
pub use config::{
    ChunkConfig, Settings, TokenizerConfig, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP, DEFAULT_TOP_K,
};
pub use error::{Error, Result};
pub use types::{Chunk, Document};
