//! Utility functions for conversion operations.
//!
//! - `fs` - scratch file tracking and output paths
//! - `http` - remote image download
//! - `process` - external tool execution

pub mod fs;
pub mod http;
pub mod process;
