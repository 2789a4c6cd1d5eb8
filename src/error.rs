//! Application error types.
//!
//! Wraps converter failures together with CLI and configuration errors, and
//! maps them onto process exit codes.

use thiserror::Error;

use crate::converter;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the command-line application
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI argument and configuration errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Conversion errors
    #[error(transparent)]
    Converter(#[from] converter::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl AppError {
    /// Process exit code: 2 for rejected input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cli(CliError::InvalidArguments { .. }) => 2,
            AppError::Converter(e) if e.is_validation() => 2,
            _ => 1,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use converter::Error as E;

        match self {
            AppError::Converter(E::ToolNotFound { tool, binary, .. }) => vec![
                format!("Install `{}` or add its directory to PATH", binary),
                format!(
                    "Or point at it with --{} <PATH>",
                    tool.key().replace('_', "-")
                ),
            ],
            AppError::Converter(E::InvalidFormat(_)) => {
                let choices: Vec<String> = converter::TargetFormat::ALL
                    .iter()
                    .map(|format| format!("--format {}", format))
                    .collect();
                vec![format!("Use {}", choices.join(" or "))]
            }
            AppError::Converter(E::EmptyInput) => {
                vec!["Pass at least one image path or URL".to_string()]
            }
            AppError::Converter(E::UnsupportedSourceFormat { .. }) => {
                vec!["Only GIF and PNG sources can be bundled".to_string()]
            }
            AppError::Converter(E::NormalizationFailed { .. } | E::PackingFailed { .. }) => {
                vec!["Re-run with RUST_LOG=debug to see the exact tool invocation".to_string()]
            }
            _ => Vec::new(),
        }
    }
}
