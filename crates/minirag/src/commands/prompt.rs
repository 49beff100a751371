use crate::cli::SourceArgs;
use crate::prompt::{build_prompt, ContextStyle};
use minirag_core::Settings;

pub fn run(
    source: &SourceArgs,
    question: &str,
    top_k: Option<usize>,
    system: &str,
    compact: bool,
    settings: &Settings,
) -> anyhow::Result<()> {
    let kb = super::build_knowledge(source, settings)?;
    let hits = kb.index.query(question, top_k.unwrap_or(settings.top_k));

    let style = if compact {
        ContextStyle::Packed {
            max_chars: settings.max_context_chars,
        }
    } else {
        ContextStyle::Sources
    };

    println!("{}", build_prompt(system, question, &hits, style));
    Ok(())
}
