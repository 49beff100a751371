//! Directory discovery and tolerant text reading

use minirag_core::Document;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSIONS: &[&str] = &["txt", "md"];

const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "__pycache__",
    ".venv",
    "dist",
    "build",
];

/// Read a text file, decoding invalid UTF-8 lossily instead of failing
pub fn read_document(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!(path = %path.display(), "non-utf8 document, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// All `.txt`/`.md` files under `root`, sorted by path
pub fn discover_documents(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    scan_dir(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_dir(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_dir() {
            if !SKIP_DIRS.contains(&name.as_str()) {
                scan_dir(&path, files)?;
            }
        } else if path.is_file() && has_text_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Load every text document under `root`.
///
/// Sources are paths relative to `root` joined with `/`. Blank files are
/// skipped.
pub fn load_directory(root: &Path) -> std::io::Result<Vec<Document>> {
    let mut documents = Vec::new();
    for path in discover_documents(root)? {
        let text = read_document(&path)?;
        if text.trim().is_empty() {
            debug!(path = %path.display(), "skipping blank document");
            continue;
        }
        documents.push(Document::new(relative_source(root, &path), text));
    }
    Ok(documents)
}

fn relative_source(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
