//! Icon bundle builder library
//!
//! This library turns PNG and GIF images (local files or http(s) URLs) into:
//! - Windows icon files (.ico)
//! - macOS icon files (.icns)
//!
//! The packing itself is done by external tools; see [`converter`] for the
//! invocation conventions. It can be used both as a CLI tool and as a library
//! dependency.

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

// Re-export commonly used types
pub use converter::{ConvertedBundle, Converter, Settings, SettingsBuilder, TargetFormat};
pub use error::{AppError, CliError, Result};
