//! Conversion orchestration.
//!
//! This module provides the [`Converter`], which turns an ordered list of
//! image sources into a single ICO or ICNS bundle.
//!
//! # Overview
//!
//! The converter:
//! 1. Locates the external tools once, at construction ([`ToolSet`])
//! 2. Validates the target format and source list
//! 3. Downloads remote sources and normalizes GIFs to PNG
//! 4. Runs the packer for the target format
//! 5. Returns the [`ConvertedBundle`](crate::converter::ConvertedBundle)
//!
//! # Example
//!
//! ```no_run
//! use iconmaker::converter::{Converter, Settings};
//!
//! # async fn example() -> iconmaker::converter::Result<()> {
//! let converter = Converter::new(Settings::default())?;
//! let bundle = converter
//!     .convert("ico", &["icon-16.png", "https://example.com/icon-32.gif"])
//!     .await?;
//! println!("Created: {}", bundle.path().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`orchestrator`] - the [`Converter`] and the per-request pipeline
//! - [`tool_detection`] - default-path / search-path resolution of the tools

mod orchestrator;
mod tool_detection;

pub use orchestrator::Converter;
pub use tool_detection::ToolSet;
