//! Command implementations for quill.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves a prompt family, builds the
//! operation parameters from its arguments, and prints the rendered
//! prompt to stdout.

use crate::cli::{Command, DocsArgs, QueriesArgs, ReportArgs, ToolsArgs};
use quill::config::Config;
use quill::document::{pretty_print_docs, Document};
use quill::error::{QuillError, Result};
use quill::family::{
    get_prompt_by_report_type, get_prompt_family, ReportParams, SearchQueriesParams, ToolInfo,
    ToolSelectionParams,
};
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Queries(args) => cmd_queries(args),
        Command::Report(args) => cmd_report(args),
        Command::Tools(args) => cmd_tools(args),
        Command::Docs(args) => cmd_docs(args),
    }
}

fn cmd_queries(args: QueriesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let family = get_prompt_family(&args.family, config);

    let params = SearchQueriesParams {
        question: args.question,
        parent_query: args.parent_query,
        report_type: args.report_type,
        max_iterations: args.max_iterations,
        context: Vec::new(),
    };

    println!("{}", family.generate_search_queries_prompt(&params));
    Ok(())
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let family = get_prompt_family(&args.family, config);
    let context = read_input(&args.context_file)?;

    let params = ReportParams {
        question: args.question,
        context,
        report_source: args.report_source,
        report_format: args.report_format,
        total_words: args.total_words,
        tone: args.tone,
        language: args.language,
    };

    let report_op = get_prompt_by_report_type(&args.report_type);
    println!("{}", report_op(family.as_ref(), &params));
    Ok(())
}

fn cmd_tools(args: ToolsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let family = get_prompt_family(&args.family, config);

    let tools_info: Vec<ToolInfo> = serde_json::from_str(&read_input(&args.tools_file)?)?;
    tracing::debug!(tools = tools_info.len(), "loaded tool catalog");

    let params = ToolSelectionParams {
        query: args.query,
        tools_info,
        max_tools: args.max_tools,
    };

    println!("{}", family.generate_mcp_tool_selection_prompt(&params));
    Ok(())
}

fn cmd_docs(args: DocsArgs) -> Result<()> {
    let docs: Vec<Document> = serde_json::from_str(&read_input(&args.input)?)?;
    println!("{}", pretty_print_docs(&docs, args.top_n));
    Ok(())
}

/// Load the optional pipeline config referenced by `--config`.
fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    path.map(Config::load).transpose()
}

/// Read an input file, with `-` meaning stdin.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| QuillError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|e| {
        QuillError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })
}
