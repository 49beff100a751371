use crate::cli::SourceArgs;
use crate::prompt::format_sources;
use minirag_core::Settings;

pub fn run(
    source: &SourceArgs,
    query: &str,
    top_k: Option<usize>,
    json: bool,
    settings: &Settings,
) -> anyhow::Result<()> {
    let kb = super::build_knowledge(source, settings)?;
    let top_k = top_k.unwrap_or(settings.top_k);
    let hits = kb.index.query(query, top_k);

    if json {
        let output = serde_json::json!({
            "query": query,
            "top_k": top_k.max(1),
            "chunks": kb.chunk_count,
            "hits": hits,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No matching chunks for \"{}\"", query);
        return Ok(());
    }
    println!("{}", format_sources(&hits));
    Ok(())
}
