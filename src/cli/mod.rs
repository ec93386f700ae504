//! CLI argument parsing for quill.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quill: prompt-family toolkit for LLM research pipelines.
///
/// Renders the prompts a research pipeline feeds to an LLM:
/// - `queries` builds search-query prompts
/// - `report` builds report-drafting prompts
/// - `tools` builds tool-selection prompts
/// - `docs` formats retrieved documents into a context block
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for quill.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a search-query generation prompt.
    Queries(QueriesArgs),

    /// Render a report-drafting prompt.
    Report(ReportArgs),

    /// Render an MCP tool-selection prompt from a tool catalog file.
    Tools(ToolsArgs),

    /// Format a JSON document batch into a plain-text context block.
    Docs(DocsArgs),
}

/// Arguments for the `queries` command.
#[derive(Parser, Debug)]
pub struct QueriesArgs {
    /// The research question to generate queries for.
    pub question: String,

    /// Parent query for sub-questions in multi-level research.
    #[arg(long, default_value = "")]
    pub parent_query: String,

    /// Report type the queries feed into.
    #[arg(long, default_value = "ResearchReport")]
    pub report_type: String,

    /// Number of queries to request.
    #[arg(short, long, default_value_t = 3)]
    pub max_iterations: usize,

    /// Prompt family to use (Default, FARPart10).
    #[arg(short, long, default_value = "Default")]
    pub family: String,

    /// Path to a pipeline config YAML file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `report` command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// The research question the report must answer.
    pub question: String,

    /// File containing the gathered research context ('-' for stdin).
    #[arg(long)]
    pub context_file: PathBuf,

    /// Where the context came from (web, local, ...).
    #[arg(long, default_value = "web")]
    pub report_source: String,

    /// Report type, resolved through the report-type registry.
    #[arg(long, default_value = "ResearchReport")]
    pub report_type: String,

    /// Citation style name.
    #[arg(long, default_value = "apa")]
    pub report_format: String,

    /// Minimum word count to request (omit for the family default).
    #[arg(long)]
    pub total_words: Option<u32>,

    /// Tone directive (omit for the family default).
    #[arg(long)]
    pub tone: Option<String>,

    /// Output language.
    #[arg(long, default_value = "english")]
    pub language: String,

    /// Prompt family to use (Default, FARPart10).
    #[arg(short, long, default_value = "Default")]
    pub family: String,

    /// Path to a pipeline config YAML file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `tools` command.
#[derive(Parser, Debug)]
pub struct ToolsArgs {
    /// The research query the selected tools must serve.
    pub query: String,

    /// JSON file with the tool catalog (array of tool descriptors).
    #[arg(long)]
    pub tools_file: PathBuf,

    /// Number of tools the reply must select.
    #[arg(long, default_value_t = 3)]
    pub max_tools: usize,

    /// Prompt family to use (Default, FARPart10).
    #[arg(short, long, default_value = "FARPart10")]
    pub family: String,

    /// Path to a pipeline config YAML file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `docs` command.
#[derive(Parser, Debug)]
pub struct DocsArgs {
    /// JSON file with the retrieved documents (array of documents).
    pub input: PathBuf,

    /// Keep only the first N documents.
    #[arg(long)]
    pub top_n: Option<usize>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_defaults_match_pipeline_conventions() {
        let cli = Cli::try_parse_from(["quill", "queries", "radio procurement"]).unwrap();
        match cli.command {
            Command::Queries(args) => {
                assert_eq!(args.question, "radio procurement");
                assert_eq!(args.max_iterations, 3);
                assert_eq!(args.family, "Default");
                assert!(args.parent_query.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn report_requires_context_file() {
        let result = Cli::try_parse_from(["quill", "report", "some question"]);
        assert!(result.is_err());
    }

    #[test]
    fn tools_defaults_to_far_family() {
        let cli = Cli::try_parse_from([
            "quill",
            "tools",
            "vendor research",
            "--tools-file",
            "tools.json",
        ])
        .unwrap();
        match cli.command {
            Command::Tools(args) => {
                assert_eq!(args.family, "FARPart10");
                assert_eq!(args.max_tools, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
