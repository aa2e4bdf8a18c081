//! Shared plumbing for command handlers: reading inputs, writing outputs,
//! and process exit codes.

mod output;
mod parse;

pub use output::{OutputTarget, should_use_color, write_output};
pub use parse::{ParsedDocument, read_document};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - document valid, or command completed
    pub const SUCCESS: i32 = 0;
    /// Document failed schema validation
    pub const INVALID_DOCUMENT: i32 = 1;
    /// Document is not a supported SBOM (unknown format or version)
    pub const UNSUPPORTED_FORMAT: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::INVALID_DOCUMENT, 1);
        assert_eq!(exit_codes::UNSUPPORTED_FORMAT, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
