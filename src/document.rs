//! Retrieved-document model and plain-text formatting.
//!
//! A [`Document`] is what the pipeline's retrieval stage hands to quill:
//! a metadata map (conventionally carrying `source` and `title`) plus the
//! page content. [`pretty_print_docs`] flattens a batch of documents into
//! the plain-text context block that report prompts embed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A retrieved document, as produced by the pipeline's retriever.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata. `source` and `title` are the keys the formatter
    /// reads; anything else is carried along untouched.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// The document body text.
    #[serde(default)]
    pub page_content: String,
}

impl Document {
    /// Create a document with the conventional `source`/`title` metadata.
    pub fn new(source: &str, title: &str, page_content: &str) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("source".to_string(), source.to_string());
        metadata.insert("title".to_string(), title.to_string());
        Self {
            metadata,
            page_content: page_content.to_string(),
        }
    }

    fn meta(&self, key: &str) -> &str {
        self.metadata.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Format a batch of documents into a compact plain-text context block.
///
/// Each document renders as one block:
///
/// ```text
/// Source: <source>
/// Title: <title>
/// Content: <page content>
/// ```
///
/// Blocks are joined with newlines in input order. `top_n = Some(n)` keeps
/// only the first `n` documents and silently drops the rest; `None` keeps
/// all. Missing `source`/`title` keys render as empty strings rather than
/// failing.
pub fn pretty_print_docs(docs: &[Document], top_n: Option<usize>) -> String {
    let limit = top_n.unwrap_or(docs.len());
    docs.iter()
        .take(limit)
        .map(|d| {
            format!(
                "Source: {}\nTitle: {}\nContent: {}",
                d.meta("source"),
                d.meta("title"),
                d.page_content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
