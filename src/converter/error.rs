//! Error types for icon conversion.
//!
//! Every failure of a conversion request maps to exactly one [`Error`] variant,
//! so callers can tell which stage (tool lookup, validation, fetch,
//! normalization, packing) stopped the request.

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::Tool;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while locating tools or converting images.
#[derive(Error, Debug)]
pub enum Error {
    /// A required external binary is missing at its default path and on the search path
    #[error(
        "The binary {binary} for {tool} was not found (checked {} and the search path)",
        default_path.display()
    )]
    ToolNotFound {
        /// Which tool is missing
        tool: Tool,
        /// Executable name that was searched for
        binary: String,
        /// Default install location that was checked first
        default_path: PathBuf,
    },

    /// Target format is neither ICO nor ICNS
    #[error("Invalid target format `{0}`. Target format must be either ICO or ICNS.")]
    InvalidFormat(String),

    /// No image sources were supplied
    #[error("Input list cannot be empty.")]
    EmptyInput,

    /// Remote image could not be fetched
    #[error("Problem fetching image {url}: {reason}")]
    FetchFailed {
        /// URL that was requested
        url: String,
        /// Human-readable description of the failure
        reason: String,
        /// Underlying transport error, when there is one
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Source image is not GIF or PNG
    #[error(
        "The source {origin} is {detected}, which is not a supported format. Supported formats are: gif, png"
    )]
    UnsupportedSourceFormat {
        /// URL or local path of the offending source
        origin: String,
        /// Format that was detected (or "unrecognized data")
        detected: String,
    },

    /// GIF to PNG normalization tool failed
    #[error("GIF to PNG conversion failed ({})", path.display())]
    NormalizationFailed {
        /// GIF that was being converted
        path: PathBuf,
        /// How the tool failed
        #[source]
        cause: ToolError,
    },

    /// ICO/ICNS packer failed
    #[error("Icon conversion failed ({})", output.display())]
    PackingFailed {
        /// Bundle path the packer was asked to write
        output: PathBuf,
        /// How the tool failed
        #[source]
        cause: ToolError,
    },

    /// HTTP client could not be initialised
    #[error("Failed to initialise HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// Filesystem operation failed on a specific path
    #[error("Failed {context} ({})", path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        error: std::io::Error,
    },

    /// Image decode/encode errors
    #[error(transparent)]
    ImageError(#[from] image::ImageError),

    /// Blocking task panicked or was cancelled
    #[error("Background image task failed")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl Error {
    /// Whether the request was rejected before any I/O took place.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidFormat(_) | Error::EmptyInput)
    }
}

/// Failure of an external tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The process could not be started
    #[error("failed to execute {}", tool.display())]
    Spawn {
        /// Tool that was launched
        tool: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("{} exited with {}{}", tool.display(), describe_code(*code), describe_stderr(stderr))]
    Exit {
        /// Tool that was launched
        tool: PathBuf,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

impl ToolError {
    /// Exit code of the failed process, if it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ToolError::Exit { code, .. } => *code,
            ToolError::Spawn { .. } => None,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with the operation being performed and its path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}
