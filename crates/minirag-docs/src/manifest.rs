//! Explicit file lists for knowledge directories

use crate::io::read_document;
use minirag_core::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const SAMPLE_FILE: &str = "sample.txt";

/// `manifest.json`: paths relative to the manifest's directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub files: Vec<String>,
}

impl Manifest {
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Load the documents listed in `base/manifest.json`.
///
/// Listed files that can't be read are skipped. Without a manifest, falls
/// back to `base/sample.txt`, and to no documents at all if that is missing
/// too.
pub fn load_manifest(base: &Path) -> std::io::Result<Vec<Document>> {
    let manifest_path = base.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        let sample = base.join(SAMPLE_FILE);
        if !sample.is_file() {
            debug!(base = %base.display(), "no manifest or sample document");
            return Ok(Vec::new());
        }
        debug!(path = %sample.display(), "no manifest, using sample document");
        return Ok(vec![Document::new(SAMPLE_FILE, read_document(&sample)?)]);
    }

    let manifest = Manifest::read(&manifest_path)?;
    let mut documents = Vec::with_capacity(manifest.files.len());
    for entry in &manifest.files {
        match read_document(&base.join(entry)) {
            Ok(text) => documents.push(Document::new(entry.as_str(), text)),
            Err(e) => warn!(file = %entry, error = %e, "skipping manifest entry"),
        }
    }
    Ok(documents)
}
