//! Prompt composition from ranked hits

use minirag_index::SearchHit;

const SNIPPET_CHARS: usize = 240;

/// Packed parts are only truncated when at least this much room is left
const MIN_TRUNCATED_PART: usize = 50;

const NO_CONTEXT: &str = "No relevant context found.";

/// How retrieved chunks are rendered into the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextStyle {
    /// Numbered sources with scores and short snippets
    Sources,
    /// `[source] text` parts within a character budget
    Packed { max_chars: usize },
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `[#1] source (score 0.123)` blocks with the chunk text cut to 240 chars
pub fn format_sources(hits: &[SearchHit<'_>]) -> String {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            let text = &hit.chunk.text;
            let snippet = if text.chars().count() > SNIPPET_CHARS {
                format!("{}…", truncate_chars(text, SNIPPET_CHARS))
            } else {
                text.clone()
            };
            format!(
                "[#{}] {} (score {:.3})\n{}",
                i + 1,
                hit.chunk.source,
                hit.score,
                snippet
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Join `[source] text` parts until `max_chars` is reached.
///
/// The part that would overflow is cut to fit and marked with `...`, or
/// dropped when fewer than 50 characters remain.
pub fn pack_context(hits: &[SearchHit<'_>], max_chars: usize) -> String {
    let mut parts = Vec::new();
    let mut total = 0;

    for hit in hits {
        let part = format!("[{}] {}", hit.chunk.source, hit.chunk.text);
        let len = part.chars().count();
        if total + len > max_chars {
            let remaining = max_chars - total;
            if remaining > MIN_TRUNCATED_PART {
                parts.push(format!("{}...", truncate_chars(&part, remaining)));
            }
            break;
        }
        parts.push(part);
        total += len;
    }

    parts.join("\n\n")
}

/// The full prompt handed to the generation client
pub fn build_prompt(
    system: &str,
    question: &str,
    hits: &[SearchHit<'_>],
    style: ContextStyle,
) -> String {
    let context = match style {
        _ if hits.is_empty() => NO_CONTEXT.to_string(),
        ContextStyle::Sources => format_sources(hits),
        ContextStyle::Packed { max_chars } => pack_context(hits, max_chars),
    };

    [
        format!("System: {system}"),
        String::new(),
        "You are a helpful RAG assistant. Use the provided context when relevant.".to_string(),
        "If the answer is not in the context, say you do not know.".to_string(),
        String::new(),
        "Context:".to_string(),
        context,
        String::new(),
        format!("User question: {question}"),
        String::new(),
        "Answer (be concise, cite sources like [#1], [#2] when you use them):".to_string(),
    ]
    .join("\n")
}
