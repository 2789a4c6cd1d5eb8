//! Core Settings struct and implementations.

use super::Tool;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Settings for conversion operations.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Immutable once
/// built; a [`Converter`](crate::converter::Converter) keeps its own copy.
///
/// # Examples
///
/// ```no_run
/// use iconmaker::converter::{SettingsBuilder, Tool};
///
/// # fn example() -> iconmaker::converter::Result<()> {
/// let settings = SettingsBuilder::new()
///     .tool_path(Tool::PngToIco, "/opt/homebrew/bin/png2ico")
///     .temp_dir("/var/tmp")
///     .build()?;
/// assert!(!settings.keep_intermediates());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Default install location of the GIF to PNG converter.
    gif_to_png: PathBuf,

    /// Default install location of the ICO packer.
    png_to_ico: PathBuf,

    /// Default install location of the ICNS packer.
    png_to_icns: PathBuf,

    /// Directories searched when a default location is missing.
    ///
    /// None means the process `PATH`.
    search_path: Option<OsString>,

    /// Directory for downloads and generated bundles.
    temp_dir: PathBuf,

    /// Leave downloaded and derived images on disk after a conversion.
    keep_intermediates: bool,

    /// Sniff local files' content instead of trusting their suffix.
    verify_local_sources: bool,
}

impl Settings {
    /// Returns the default install location configured for `tool`.
    pub fn tool_path(&self, tool: Tool) -> &Path {
        match tool {
            Tool::GifToPng => &self.gif_to_png,
            Tool::PngToIco => &self.png_to_ico,
            Tool::PngToIcns => &self.png_to_icns,
        }
    }

    /// Returns the explicit search path, if one was configured.
    pub fn search_path(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }

    /// Returns the directory scratch files and bundles are written to.
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Whether downloaded and derived images survive the conversion.
    pub fn keep_intermediates(&self) -> bool {
        self.keep_intermediates
    }

    /// Whether local sources are checked by content.
    pub fn verify_local_sources(&self) -> bool {
        self.verify_local_sources
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        tool_paths: [PathBuf; 3],
        search_path: Option<OsString>,
        temp_dir: PathBuf,
        keep_intermediates: bool,
        verify_local_sources: bool,
    ) -> Self {
        let [gif_to_png, png_to_ico, png_to_icns] = tool_paths;
        Self {
            gif_to_png,
            png_to_ico,
            png_to_icns,
            search_path,
            temp_dir,
            keep_intermediates,
            verify_local_sources,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(
            [
                Tool::GifToPng.default_path(),
                Tool::PngToIco.default_path(),
                Tool::PngToIcns.default_path(),
            ],
            None,
            std::env::temp_dir(),
            false,
            false,
        )
    }
}
