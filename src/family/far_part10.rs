//! FAR Part 10 prompt family: wording curated for contracting officers and
//! specialists performing federal market research.
//!
//! Overrides all three operations with acquisition framing: search queries
//! target authoritative federal data systems first, tool selection prefers
//! acquisition data-set tools over generic search, and reports follow the
//! fixed FAR Part 10 element checklist.

use super::params::{tools_info_json, ReportParams, SearchQueriesParams, ToolSelectionParams};
use super::{combine_task, PromptFamily};
use crate::config::Config;
use chrono::{Local, NaiveDate};

/// The authoritative federal data systems queries should target first,
/// in preference order.
pub const PRIMARY_SOURCES: [&str; 5] = [
    "GSA eLibrary",
    "GSA Advantage",
    "USAspending.gov",
    "SBA Dynamic Small Business Search (DSBS)",
    "Federal Procurement Data System (FPDS)",
];

/// Word count requested when the caller does not set one. FAR market
/// research reports run shorter than general research reports.
const DEFAULT_TOTAL_WORDS: u32 = 800;

/// Prompt family for FAR Part 10 market research.
#[derive(Debug, Clone, Default)]
pub struct FarPart10Family {
    #[allow(dead_code)]
    config: Option<Config>,
}

impl FarPart10Family {
    /// Create the family, carrying the optional pipeline config.
    pub fn new(config: Option<Config>) -> Self {
        Self { config }
    }

    /// Build the report prompt with an explicit report date.
    ///
    /// [`PromptFamily::generate_report_prompt`] delegates here with today's
    /// local date; tests pin the date for deterministic output.
    pub fn report_prompt_on(&self, params: &ReportParams, today: NaiveDate) -> String {
        let mut prompt = format!(
            "Information collected:\n\"{context}\"\n---\n\
             Write a concise FAR Part 10 market research report of at least \
             {total_words} words addressing: \"{question}\".\n\
             Required elements:\n\
             1. Potential sources and their socio-economic status (e.g. Small, 8(a), HUBZone).\n\
             2. Contract vehicles (GSA Schedules, BPAs, IDIQs) where the requirement could be placed.\n\
             3. Recent relevant contract awards with pricing data.\n\
             4. Assessment of competition and capability.\n\
             5. Recommendation: is competition adequate, and is a set-aside feasible?\n\
             - Format the report in markdown with {format} citations.\n",
            context = params.context,
            total_words = params.total_words.unwrap_or(DEFAULT_TOTAL_WORDS),
            question = params.question,
            format = params.report_format.to_uppercase(),
        );

        // Unlike the base family, the tone clause is present by default;
        // an explicitly empty tone suppresses it.
        let tone = params.tone.as_deref().unwrap_or("objective");
        if !tone.is_empty() {
            prompt.push_str(&format!("- Write in a {} tone.\n", tone));
        }

        if params.report_source == "web" {
            prompt.push_str("- List contract numbers and links from each cited system at the end.\n");
        }

        prompt.push_str(&format!(
            "- Report date: {}. Write the report in {}.\n",
            today.format("%Y-%m-%d"),
            params.language
        ));
        prompt
    }
}

impl PromptFamily for FarPart10Family {
    fn generate_search_queries_prompt(&self, params: &SearchQueriesParams) -> String {
        let task = combine_task(&params.question, &params.parent_query);
        let gov_hint = PRIMARY_SOURCES.join(", ");

        // When max_iterations exceeds the source list, the example list
        // caps at the five primary sources; the instruction still asks
        // for up to max_iterations queries.
        let example = PRIMARY_SOURCES
            .iter()
            .take(params.max_iterations)
            .map(|source| format!("\"{} {}\"", source, task))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "You are performing FAR Part 10 market research. Generate up to \
             {max_iterations} highly targeted \"site:\" or keyword queries that will \
             surface contractor information from these primary systems first: {gov_hint}.\n\
             Task: \"{task}\".\n\
             Respond with ONLY a JSON list of strings, e.g. [{example}].",
            max_iterations = params.max_iterations,
            gov_hint = gov_hint,
            task = task,
            example = example,
        )
    }

    fn generate_report_prompt(&self, params: &ReportParams) -> String {
        self.report_prompt_on(params, Local::now().date_naive())
    }

    fn generate_mcp_tool_selection_prompt(&self, params: &ToolSelectionParams) -> String {
        format!(
            "You are a FAR Part 10 market research assistant. When selecting tools, \
             prefer those that query authoritative government acquisition data sets \
             (GSA, FPDS, USAspending, SBA DSBS) over generic web search utilities.\n\n\
             RESEARCH QUERY: \"{query}\"\n\n\
             AVAILABLE TOOLS:\n{tools}\n\n\
             Select EXACTLY {max_tools} tools best suited to gather competitive \
             sourcing information. Respond with the JSON object described in the \
             system instructions.",
            query = params.query,
            tools = tools_info_json(&params.tools_info),
            max_tools = params.max_tools,
        )
    }
}
