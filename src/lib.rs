//! Quill: prompt-family toolkit for LLM research pipelines.
//!
//! Quill generates the text prompts a research automation pipeline feeds to
//! an LLM: search-query prompts, tool-selection prompts, and report-drafting
//! prompts. Prompt text is grouped into *families* — a base family with
//! generic wording, and a FAR Part 10 family tailored to federal
//! acquisition market research.
//!
//! The crate does not talk to any LLM, retriever, or tool server itself.
//! Callers obtain a family through [`family::get_prompt_family`], call its
//! operations with plain-value parameters, and pass the resulting strings
//! to whatever does the actual model invocation.
//!
//! ```
//! use quill::family::{get_prompt_family, SearchQueriesParams};
//!
//! let family = get_prompt_family("FARPart10", None);
//! let prompt = family.generate_search_queries_prompt(&SearchQueriesParams::new(
//!     "cloud migration services",
//! ));
//! assert!(prompt.contains("USAspending.gov"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod family;
