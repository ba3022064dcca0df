// CLI error types

use gridkeys_core::GenerateError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'gridkeys --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck the file passed with --config.",
                    msg
                )
            }
            CliError::Prompt(msg) => {
                format!("Could not read input: {}", msg)
            }
            CliError::Generate(GenerateError::Source(e)) => {
                format!(
                    "Could not load hotkey data: {}\n\nPoint --data-dir at a directory with units-buildings/ and a raw JSON file.",
                    e
                )
            }
            CliError::Generate(e) => {
                format!("Profile generation failed: {}\n\nNo profile was written.", e)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Message printed when a command fails; verbose mode appends the details
    pub fn report(&self, verbose: bool) -> String {
        if verbose {
            format!("{}\n\nDetails: {}", self.user_message(), self.technical_details())
        } else {
            self.user_message()
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use gridkeys_core::GridError;

    #[test]
    fn test_report_hides_details_by_default() {
        let err = CliError::Config("bad prefix".to_string());
        assert_eq!(err.report(false), err.user_message());
        assert!(!err.report(false).contains("Details:"));
    }

    #[test]
    fn test_verbose_report_includes_details() {
        let err = CliError::Generate(GenerateError::Grid(GridError::InvalidLength {
            expected: 15,
            actual: 3,
        }));
        let report = err.report(true);

        assert!(report.starts_with(&err.user_message()));
        assert!(report.contains("Details: Generate(Grid(InvalidLength"));
    }
}
