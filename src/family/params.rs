//! Parameter structs for prompt-family operations.
//!
//! Each operation takes a single struct rather than a long positional
//! argument list. Defaults mirror the pipeline's conventions and are
//! documented per field; construct with `::new(...)` for the required
//! values, then override the rest with struct update syntax.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for search-query prompt generation.
#[derive(Debug, Clone, Default)]
pub struct SearchQueriesParams {
    /// The research question being investigated.
    pub question: String,

    /// Parent query for sub-questions in multi-level research. When
    /// non-empty, the task becomes `"<parent_query> - <question>"`.
    pub parent_query: String,

    /// Report type the queries feed into. Accepted for parity with the
    /// report pipeline; no current family consults it.
    pub report_type: String,

    /// Number of queries to request. Default: 3.
    pub max_iterations: usize,

    /// Prior research context. Reserved for context-aware families; no
    /// current family consults it.
    pub context: Vec<Value>,
}

impl SearchQueriesParams {
    /// Parameters for a top-level question with defaults everywhere else.
    pub fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            max_iterations: 3,
            ..Self::default()
        }
    }
}

/// Parameters for report prompt generation.
#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    /// The research question the report must answer.
    pub question: String,

    /// Gathered research context to embed in the prompt.
    pub context: String,

    /// Where the context came from (`"web"`, `"local"`, ...). The FAR
    /// family appends a contract-numbers directive when this is `"web"`;
    /// the base family ignores it.
    pub report_source: String,

    /// Citation style name, uppercased into the prompt. Default: `"apa"`.
    pub report_format: String,

    /// Minimum word count to request. `None` takes the family default
    /// (1000 for the base family, 800 for the FAR family).
    pub total_words: Option<u32>,

    /// Tone directive. `None` means no tone clause in the base family and
    /// an `"objective"` default in the FAR family; `Some("")` suppresses
    /// the clause everywhere.
    pub tone: Option<String>,

    /// Output language. Default: `"english"`.
    pub language: String,
}

impl ReportParams {
    /// Parameters with the pipeline defaults for format, length, and
    /// language.
    pub fn new(question: &str, context: &str, report_source: &str) -> Self {
        Self {
            question: question.to_string(),
            context: context.to_string(),
            report_source: report_source.to_string(),
            report_format: "apa".to_string(),
            total_words: None,
            tone: None,
            language: "english".to_string(),
        }
    }
}

/// A tool descriptor from the pipeline's tool catalog (e.g. an MCP server
/// listing). Only `name` and `description` are conventional; any extra
/// descriptor fields ride along and are serialized into the prompt as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name as the catalog reports it.
    pub name: String,

    /// Human-readable tool description.
    #[serde(default)]
    pub description: String,

    /// Remaining descriptor fields (input schema, server name, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for tool-selection prompt generation.
#[derive(Debug, Clone, Default)]
pub struct ToolSelectionParams {
    /// The research query the selected tools must serve.
    pub query: String,

    /// Descriptors for every available tool, in catalog order.
    pub tools_info: Vec<ToolInfo>,

    /// Number of tools the reply must select. Default: 3.
    pub max_tools: usize,
}

impl ToolSelectionParams {
    /// Parameters for a query over the given tool catalog.
    pub fn new(query: &str, tools_info: Vec<ToolInfo>) -> Self {
        Self {
            query: query.to_string(),
            tools_info,
            max_tools: 3,
        }
    }
}

/// Serialize tool descriptors to the pretty-printed JSON block embedded in
/// tool-selection prompts. Serialization of plain JSON-shaped data cannot
/// fail; the fallback keeps the operation total regardless.
pub(crate) fn tools_info_json(tools_info: &[ToolInfo]) -> String {
    serde_json::to_string_pretty(tools_info).unwrap_or_else(|_| "[]".to_string())
}
