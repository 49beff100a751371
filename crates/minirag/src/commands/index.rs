use crate::cli::SourceArgs;
use minirag_core::Settings;

pub fn run(source: &SourceArgs, settings: &Settings) -> anyhow::Result<()> {
    let kb = super::build_knowledge(source, settings)?;

    if kb.chunk_count == 0 {
        println!("No documents found in {}", source.dir.display());
        return Ok(());
    }

    println!(
        "Indexed {} chunks from {} sources ({} terms)",
        kb.chunk_count,
        kb.sources.len(),
        kb.index.idf().len()
    );
    for src in &kb.sources {
        let count = kb
            .index
            .chunks()
            .iter()
            .filter(|c| &c.source == src)
            .count();
        println!("  {}  ({} chunks)", src, count);
    }

    Ok(())
}
