//! Sliding-window chunking with paragraph-aware cuts

use crate::config::ChunkConfig;
use crate::error::Result;
use crate::types::Chunk;
use tracing::debug;

/// Windows are never cut shorter than this many characters
const MIN_CUT_CHARS: usize = 120;

/// Fraction of the window a paragraph cut must lie beyond
const MIN_CUT_RATIO: f64 = 0.6;

/// Split one document into ordered, overlapping chunks.
///
/// Lengths are counted in characters. Each window that stops short of the
/// end of the text is shortened to the last paragraph break past
/// `max(120, 0.6 * window)` when one exists. Chunk ids are
/// `<source>::<ordinal>` with dense, zero-based ordinals.
pub fn chunk_text(source: &str, text: &str, config: &ChunkConfig) -> Result<Vec<Chunk>> {
    config.validate()?;

    let clean = clean_text(text);
    if clean.is_empty() {
        return Ok(Vec::new());
    }

    // Byte offset of every char plus the end of the text
    let bounds: Vec<usize> = clean
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(clean.len()))
        .collect();
    let total = bounds.len() - 1;
    let step = config.step();

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < total {
        let end = (start + config.chunk_size).min(total);
        let mut window = &clean[bounds[start]..bounds[end]];
        let mut next = start + step;

        if end < total {
            if let Some((cut_byte, cut_chars)) = paragraph_cut(window, end - start) {
                window = &window[..cut_byte];
                // Resume no later than the cut so the dropped tail is covered
                next = next.min(start + cut_chars);
            }
        }

        let trimmed = window.trim();
        if !trimmed.is_empty() {
            chunks.push(Chunk::new(source, chunks.len(), trimmed));
        }

        if end >= total {
            break;
        }
        start = next.max(start + 1);
    }

    debug!(source, chunks = chunks.len(), chars = total, "chunked document");
    Ok(chunks)
}

/// CRLF to LF, runs of 3+ newlines collapsed to 2, outer whitespace trimmed
fn clean_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let mut out = String::with_capacity(normalized.len());
    let mut newlines = 0;

    for c in normalized.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }

    out.trim().to_string()
}

/// Byte and char offset of the last paragraph break far enough into the window
fn paragraph_cut(window: &str, window_chars: usize) -> Option<(usize, usize)> {
    let cut_byte = window.rfind("\n\n")?;
    let cut_chars = window[..cut_byte].chars().count();
    let threshold = (MIN_CUT_CHARS as f64).max(window_chars as f64 * MIN_CUT_RATIO);

    if cut_chars as f64 > threshold {
        Some((cut_byte, cut_chars))
    } else {
        None
    }
}
