//! Icon bundle conversion.
//!
//! Turns local or remote GIF/PNG images into one ICO or ICNS bundle by
//! driving three external tools:
//!
//! | Tool | Invocation |
//! |------|------------|
//! | GIF → PNG | `convert <source.gif> <derived.png>` |
//! | PNG(s) → ICO | `png2ico <output.ico> <png>...` |
//! | PNG(s) → ICNS | `png2icns <output.icns> <png>...` |
//!
//! Start with [`Converter::new`]; it fails with [`Error::ToolNotFound`] if
//! any tool is missing.

pub mod error;
pub mod format;
pub mod normalize;
pub mod pipeline;
pub mod request;
pub mod settings;
pub mod source;
pub mod utils;

pub use error::{Error, ErrorExt, Result, ToolError};
pub use format::{SourceFormat, TargetFormat};
pub use pipeline::{Converter, ToolSet};
pub use request::{ConversionRequest, ConvertedBundle};
pub use settings::{Settings, SettingsBuilder, Tool};
pub use source::ImageSource;
