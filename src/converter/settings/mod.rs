//! Configuration for conversion operations.
//!
//! [`Settings`] holds where to look for the external tools and where scratch
//! files go. Build it with [`SettingsBuilder`]; defaults match a stock install.

mod builder;
mod core;
mod tool;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use tool::Tool;
