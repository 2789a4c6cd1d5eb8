//! Builder for constructing Settings.

use super::{Settings, Tool};
use crate::converter::error::{ErrorExt, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field is optional; unset fields take the stock defaults.
#[derive(Default, Debug, Clone)]
pub struct SettingsBuilder {
    gif_to_png: Option<PathBuf>,
    png_to_ico: Option<PathBuf>,
    png_to_icns: Option<PathBuf>,
    search_path: Option<OsString>,
    temp_dir: Option<PathBuf>,
    keep_intermediates: bool,
    verify_local_sources: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the default install location checked for `tool` before the search path.
    ///
    /// Default: [`Tool::default_path`]
    pub fn tool_path<P: AsRef<Path>>(mut self, tool: Tool, path: P) -> Self {
        let path = Some(path.as_ref().to_path_buf());
        match tool {
            Tool::GifToPng => self.gif_to_png = path,
            Tool::PngToIco => self.png_to_ico = path,
            Tool::PngToIcns => self.png_to_icns = path,
        }
        self
    }

    /// Sets the directories searched for tools missing at their default location.
    ///
    /// Uses the platform `PATH` syntax (`:`-separated on Unix).
    ///
    /// Default: the process `PATH`
    pub fn search_path<S: Into<OsString>>(mut self, paths: S) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Sets where downloads, derived PNGs and output bundles are written.
    ///
    /// Default: [`std::env::temp_dir`]
    pub fn temp_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.temp_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keeps downloaded and derived images after each conversion.
    ///
    /// Default: false
    pub fn keep_intermediates(mut self, keep: bool) -> Self {
        self.keep_intermediates = keep;
        self
    }

    /// Checks local sources by content rather than by suffix.
    ///
    /// Default: false
    pub fn verify_local_sources(mut self, verify: bool) -> Self {
        self.verify_local_sources = verify;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory is set but does not exist
    /// or is not a directory.
    pub fn build(self) -> Result<Settings> {
        let temp_dir = match self.temp_dir {
            Some(dir) => {
                let metadata =
                    std::fs::metadata(&dir).fs_context("reading temporary directory", &dir)?;
                if !metadata.is_dir() {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::NotADirectory,
                        "not a directory",
                    ))
                    .fs_context("reading temporary directory", &dir);
                }
                dir
            }
            None => std::env::temp_dir(),
        };

        Ok(Settings::new(
            [
                self.gif_to_png.unwrap_or_else(|| Tool::GifToPng.default_path()),
                self.png_to_ico.unwrap_or_else(|| Tool::PngToIco.default_path()),
                self.png_to_icns.unwrap_or_else(|| Tool::PngToIcns.default_path()),
            ],
            self.search_path,
            temp_dir,
            self.keep_intermediates,
            self.verify_local_sources,
        ))
    }
}
