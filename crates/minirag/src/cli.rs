use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SYSTEM: &str = "Answer using the provided context. Be accurate and concise.";

#[derive(Parser)]
#[command(name = "minirag")]
#[command(version)]
#[command(about = "Local TF-IDF retrieval over text documents")]
pub struct Cli {
    /// Settings JSON (defaults to <config dir>/minirag/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Chunk window size in characters
    #[arg(long, global = true)]
    pub chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks
    #[arg(long, global = true)]
    pub overlap: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Knowledge directory
    pub dir: PathBuf,

    /// Load the files listed in manifest.json instead of scanning the directory
    #[arg(long)]
    pub manifest: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and report what was indexed
    Index {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show how a single file is chunked
    Chunk {
        /// Text file to chunk
        file: PathBuf,
    },

    /// Rank chunks against a query
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// Free-text query
        query: String,

        /// Number of hits (defaults to settings top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Emit hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose the generation prompt for a question
    Prompt {
        #[command(flatten)]
        source: SourceArgs,

        /// User question
        question: String,

        /// Number of hits (defaults to settings top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// System instruction placed at the top of the prompt
        #[arg(long, default_value = DEFAULT_SYSTEM)]
        system: String,

        /// Pack context into settings max_context_chars instead of listing sources
        #[arg(long)]
        compact: bool,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["minirag", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::try_parse_from(["minirag", "search", "knowledge", "how to reset", "-k", "2"])
            .unwrap();
        if let Commands::Search {
            source,
            query,
            top_k,
            json,
        } = cli.command
        {
            assert_eq!(source.dir, PathBuf::from("knowledge"));
            assert!(!source.manifest);
            assert_eq!(query, "how to reset");
            assert_eq!(top_k, Some(2));
            assert!(!json);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_cli_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "minirag",
            "index",
            "docs",
            "--manifest",
            "--chunk-size",
            "500",
            "--overlap",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.chunk_size, Some(500));
        assert_eq!(cli.overlap, Some(50));
        assert!(matches!(
            cli.command,
            Commands::Index { source } if source.manifest
        ));
    }

    #[test]
    fn test_cli_parse_prompt_default_system() {
        let cli = Cli::try_parse_from(["minirag", "prompt", "docs", "what is x?"]).unwrap();
        if let Commands::Prompt {
            system, compact, ..
        } = cli.command
        {
            assert_eq!(system, DEFAULT_SYSTEM);
            assert!(!compact);
        } else {
            panic!("Expected Prompt command");
        }
    }

    #[test]
    fn test_cli_requires_query() {
        assert!(Cli::try_parse_from(["minirag", "search", "docs"]).is_err());
    }
}
