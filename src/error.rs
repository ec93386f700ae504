//! Error types for the quill CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Prompt construction itself is total and never returns an
//! error; these variants cover the CLI surface (argument handling, input
//! files, config parsing).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for quill operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum QuillError {
    /// User provided invalid arguments or an unreadable input file.
    #[error("{0}")]
    UserError(String),

    /// A JSON input (documents or tool descriptors) could not be decoded.
    #[error("Failed to parse JSON input: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A YAML config file could not be decoded.
    #[error("Failed to parse config YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl QuillError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuillError::UserError(_) => exit_codes::USER_ERROR,
            QuillError::JsonError(_) => exit_codes::PARSE_FAILURE,
            QuillError::YamlError(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for quill operations.
pub type Result<T> = std::result::Result<T, QuillError>;
