//! External tool detection.
//!
//! Each tool is looked up at its configured default location first, then by
//! basename on the search path. Lookup only stats files; nothing is executed.

use crate::converter::{
    error::{Error, Result},
    format::TargetFormat,
    settings::{Settings, Tool},
};
use std::path::{Path, PathBuf};

/// Resolved locations of the three external tools.
///
/// Only obtainable through [`ToolSet::locate`], which either resolves every
/// tool or fails, so a `ToolSet` never has a missing entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToolSet {
    gif_to_png: PathBuf,
    png_to_ico: PathBuf,
    png_to_icns: PathBuf,
}

impl ToolSet {
    /// Locates every tool named in `settings`.
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] for the first tool found at neither location.
    pub fn locate(settings: &Settings) -> Result<Self> {
        let png_to_ico = locate_tool(Tool::PngToIco, settings)?;
        let png_to_icns = locate_tool(Tool::PngToIcns, settings)?;
        let gif_to_png = locate_tool(Tool::GifToPng, settings)?;

        Ok(Self {
            gif_to_png,
            png_to_ico,
            png_to_icns,
        })
    }

    /// Resolved path of `tool`.
    pub fn path(&self, tool: Tool) -> &Path {
        match tool {
            Tool::GifToPng => &self.gif_to_png,
            Tool::PngToIco => &self.png_to_ico,
            Tool::PngToIcns => &self.png_to_icns,
        }
    }

    /// Packer that produces `format`.
    pub fn packer(&self, format: TargetFormat) -> &Path {
        match format {
            TargetFormat::Ico => &self.png_to_ico,
            TargetFormat::Icns => &self.png_to_icns,
        }
    }

    /// GIF to PNG converter.
    pub fn normalizer(&self) -> &Path {
        &self.gif_to_png
    }
}

/// Resolves one tool: default location if it is a regular file, else the
/// first match for its basename on the search path.
fn locate_tool(tool: Tool, settings: &Settings) -> Result<PathBuf> {
    let default_path = settings.tool_path(tool);

    if default_path.is_file() {
        log::debug!("Found {} at default location {}", tool, default_path.display());
        return Ok(default_path.to_path_buf());
    }

    let not_found = |binary: String| Error::ToolNotFound {
        tool,
        binary,
        default_path: default_path.to_path_buf(),
    };

    let binary = match default_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Err(not_found(tool.binary_name().to_string())),
    };

    let found = match settings.search_path() {
        Some(paths) => which::which_in(&binary, Some(paths), "."),
        None => which::which(&binary),
    };

    match found {
        Ok(path) => {
            log::debug!(
                "{} not at {}; using {} from search path",
                tool,
                default_path.display(),
                path.display()
            );
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found on search path: {}", binary, e);
            Err(not_found(binary))
        }
    }
}
