use minirag_core::{chunk_text, Settings};
use std::path::Path;

const PREVIEW_CHARS: usize = 60;

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let short: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if short.len() < first_line.len() {
        format!("{short}…")
    } else {
        short
    }
}

pub fn run(file: &Path, settings: &Settings) -> anyhow::Result<()> {
    let text = minirag_docs::read_document(file)?;
    let source = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let chunks = chunk_text(&source, &text, &settings.chunk)?;
    if chunks.is_empty() {
        println!("{} has no text to chunk", file.display());
        return Ok(());
    }

    for chunk in &chunks {
        println!(
            "{:<24} {:>6} chars  {}",
            chunk.id,
            chunk.text.chars().count(),
            preview(&chunk.text)
        );
    }
    println!();
    println!(
        "{} chunks (size {}, overlap {})",
        chunks.len(),
        settings.chunk.chunk_size,
        settings.chunk.overlap
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_first_line() {
        assert_eq!(preview("short\nsecond line"), "short");
        let long = "w".repeat(80);
        assert_eq!(preview(&long), format!("{}…", "w".repeat(60)));
    }
}
