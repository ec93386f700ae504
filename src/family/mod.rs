//! Prompt families for the research pipeline.
//!
//! A *family* is a named bundle of prompt-generation operations. The
//! [`DefaultFamily`] carries generic research wording; the
//! [`FarPart10Family`] overrides it with FAR Part 10 market-research
//! framing. Families are selected by name through [`get_prompt_family`],
//! which falls back to the default family (with a warning) for names it
//! does not recognize.
//!
//! Every operation is a pure, single-pass string construction from its
//! parameters — no I/O, no shared state — so families are freely shareable
//! across threads. The one exception is the FAR report prompt, which reads
//! the wall clock for its date line; tests pin the date through
//! [`FarPart10Family::report_prompt_on`].

mod default;
mod far_part10;
mod params;
mod registry;

pub use default::DefaultFamily;
pub use far_part10::FarPart10Family;
pub use params::{ReportParams, SearchQueriesParams, ToolInfo, ToolSelectionParams};
pub use registry::{
    get_prompt_by_report_type, get_prompt_family, FamilyName, ReportPromptFn,
};

use params::tools_info_json;

/// The operations every prompt family provides.
///
/// `generate_search_queries_prompt` and `generate_report_prompt` must be
/// supplied by each family. `generate_mcp_tool_selection_prompt` has a
/// generic default body that specialized families may override with
/// domain-biased wording.
pub trait PromptFamily: Send + Sync {
    /// Build the prompt that asks an LLM for web search queries about the
    /// question (combined with `parent_query` when one is set).
    fn generate_search_queries_prompt(&self, params: &SearchQueriesParams) -> String;

    /// Build the prompt that asks an LLM to draft a report from gathered
    /// context.
    fn generate_report_prompt(&self, params: &ReportParams) -> String;

    /// Build the prompt that asks an LLM to pick `max_tools` tools from a
    /// catalog for the given query.
    fn generate_mcp_tool_selection_prompt(&self, params: &ToolSelectionParams) -> String {
        format!(
            "You are a research assistant selecting tools for a research task.\n\n\
             RESEARCH QUERY: \"{query}\"\n\n\
             AVAILABLE TOOLS:\n{tools}\n\n\
             Select EXACTLY {max_tools} tools best suited to research this query. \
             Respond with the JSON object described in the system instructions.",
            query = params.query,
            tools = tools_info_json(&params.tools_info),
            max_tools = params.max_tools,
        )
    }
}

/// Combine a parent query and question into the task string prompts embed.
///
/// An empty parent query means a top-level question: the task is the
/// question alone, with no separator.
pub(crate) fn combine_task(question: &str, parent_query: &str) -> String {
    if parent_query.is_empty() {
        question.to_string()
    } else {
        format!("{} - {}", parent_query, question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_task_without_parent_is_question_only() {
        assert_eq!(combine_task("X", ""), "X");
    }

    #[test]
    fn combine_task_with_parent_joins_with_dash() {
        assert_eq!(combine_task("X", "P"), "P - X");
    }

    #[test]
    fn default_tool_selection_embeds_query_and_catalog() {
        let family = DefaultFamily::new(None);
        let tools = vec![ToolInfo {
            name: "web_search".to_string(),
            description: "Generic web search".to_string(),
            ..ToolInfo::default()
        }];
        let prompt = family.generate_mcp_tool_selection_prompt(&ToolSelectionParams::new(
            "small business cybersecurity vendors",
            tools,
        ));

        assert!(prompt.contains("RESEARCH QUERY: \"small business cybersecurity vendors\""));
        assert!(prompt.contains("\"web_search\""));
        assert!(prompt.contains("Select EXACTLY 3 tools"));
    }
}
