pub mod chunk;
pub mod index;
pub mod prompt;
pub mod search;
pub mod version;

use crate::cli::SourceArgs;
use minirag_core::{Document, Settings};
use minirag_docs::Paths;
use minirag_index::{build_knowledge_index_with, KnowledgeBase};
use std::path::Path;

/// Settings file (explicit or default location) with command-line overrides applied
pub fn resolve_settings(
    config: Option<&Path>,
    chunk_size: Option<usize>,
    overlap: Option<usize>,
) -> anyhow::Result<Settings> {
    let mut settings = match config {
        Some(path) => minirag_docs::load_settings(path)?,
        None => match Paths::new() {
            Ok(paths) => minirag_docs::load_settings(&paths.settings_path())?,
            Err(_) => Settings::default(),
        },
    };

    if let Some(size) = chunk_size {
        settings.chunk.chunk_size = size;
    }
    if let Some(overlap) = overlap {
        settings.chunk.overlap = overlap;
    }
    settings.validate()?;
    Ok(settings)
}

pub fn load_documents(source: &SourceArgs) -> anyhow::Result<Vec<Document>> {
    let documents = if source.manifest {
        minirag_docs::load_manifest(&source.dir)?
    } else {
        minirag_docs::load_directory(&source.dir)?
    };
    Ok(documents)
}

pub fn build_knowledge(source: &SourceArgs, settings: &Settings) -> anyhow::Result<KnowledgeBase> {
    let documents = load_documents(source)?;
    Ok(build_knowledge_index_with(documents, settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_settings_overrides() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"top_k": 6}"#).unwrap();

        let settings = resolve_settings(Some(path.as_path()), Some(400), Some(40)).unwrap();
        assert_eq!(settings.top_k, 6);
        assert_eq!(settings.chunk.chunk_size, 400);
        assert_eq!(settings.chunk.overlap, 40);
    }

    #[test]
    fn test_resolve_settings_rejects_bad_overlap() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing.json");
        assert!(resolve_settings(Some(path.as_path()), Some(100), Some(100)).is_err());
    }

    #[test]
    fn test_build_knowledge_from_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "The cat sat on the mat.").unwrap();
        std::fs::write(temp.path().join("b.md"), "Dogs bark at cats.").unwrap();

        let source = SourceArgs {
            dir: temp.path().to_path_buf(),
            manifest: false,
        };
        let kb = build_knowledge(&source, &Settings::default()).unwrap();
        assert_eq!(kb.chunk_count, 2);
        assert!(kb.sources.contains("a.txt"));
        assert!(kb.sources.contains("b.md"));
    }
}
