//! Document loading and settings resolution for the knowledge index

mod io;
mod manifest;
mod paths;

pub use io::{discover_documents, load_directory, read_document};
pub use manifest::{load_manifest, Manifest, MANIFEST_FILE, SAMPLE_FILE};
pub use paths::{load_settings, Paths};
