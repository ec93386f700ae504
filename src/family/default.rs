//! The base prompt family: generic research wording, no domain framing.

use super::params::{ReportParams, SearchQueriesParams};
use super::{combine_task, PromptFamily};
use crate::config::Config;

/// Word count requested when the caller does not set one.
const DEFAULT_TOTAL_WORDS: u32 = 1000;

/// Model-agnostic prompt family with generic research wording.
///
/// This is the family every unrecognized name falls back to. It holds the
/// pipeline [`Config`] for future template tuning; no current template
/// reads it.
#[derive(Debug, Clone, Default)]
pub struct DefaultFamily {
    #[allow(dead_code)]
    config: Option<Config>,
}

impl DefaultFamily {
    /// Create the family, carrying the optional pipeline config.
    pub fn new(config: Option<Config>) -> Self {
        Self { config }
    }
}

impl PromptFamily for DefaultFamily {
    fn generate_search_queries_prompt(&self, params: &SearchQueriesParams) -> String {
        let task = combine_task(&params.question, &params.parent_query);
        let example = (1..=params.max_iterations)
            .map(|i| format!("\"query {}\"", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Write {max_iterations} web search queries to learn about: \"{task}\".\n\
             Respond with ONLY a JSON list of strings, e.g. [{example}].",
            max_iterations = params.max_iterations,
            task = task,
            example = example,
        )
    }

    fn generate_report_prompt(&self, params: &ReportParams) -> String {
        let mut prompt = format!(
            "Information gathered:\n\"{context}\"\n---\n\
             Using the information above, write a detailed report of at least \
             {total_words} words answering: \"{question}\".\n\
             - Format the report in markdown with {format} citations.\n",
            context = params.context,
            total_words = params.total_words.unwrap_or(DEFAULT_TOTAL_WORDS),
            question = params.question,
            format = params.report_format.to_uppercase(),
        );

        if let Some(tone) = params.tone.as_deref()
            && !tone.is_empty()
        {
            prompt.push_str(&format!("- Write in a {} tone.\n", tone));
        }

        prompt.push_str(&format!("- Write the report in {}.\n", params.language));
        prompt
    }
}
