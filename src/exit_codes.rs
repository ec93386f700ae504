//! Exit code constants for the quill CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Parse failure (malformed JSON/YAML input)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable input file.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a documents, tools, or config file could not be decoded.
pub const PARSE_FAILURE: i32 = 2;
