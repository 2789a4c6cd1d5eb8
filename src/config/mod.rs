//! Configuration file loading.
//!
//! An optional TOML file supplies defaults that command-line flags override:
//!
//! ```toml
//! temp_dir = "/var/tmp"
//! keep_intermediates = false
//! verify_local_sources = false
//! search_path = "/opt/homebrew/bin:/usr/bin"
//!
//! [tools]
//! gif_to_png = "/opt/local/bin/convert"
//! png_to_ico = "/usr/local/bin/png2ico"
//! png_to_icns = "/usr/local/bin/png2icns"
//! ```

use crate::converter::{SettingsBuilder, Tool};
use crate::error::{AppError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of an `iconmaker` configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory for downloads and generated bundles
    pub temp_dir: Option<PathBuf>,

    /// Keep downloaded and derived images after conversion
    pub keep_intermediates: Option<bool>,

    /// Check local sources by content
    pub verify_local_sources: Option<bool>,

    /// Directories searched for tools, in `PATH` syntax
    pub search_path: Option<String>,

    /// Default tool locations
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// `[tools]` table: default install location per tool.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    pub gif_to_png: Option<PathBuf>,
    pub png_to_ico: Option<PathBuf>,
    pub png_to_icns: Option<PathBuf>,
}

impl ToolsConfig {
    fn get(&self, tool: Tool) -> Option<&Path> {
        match tool {
            Tool::GifToPng => self.gif_to_png.as_deref(),
            Tool::PngToIco => self.png_to_ico.as_deref(),
            Tool::PngToIcns => self.png_to_icns.as_deref(),
        }
    }
}

impl FileConfig {
    /// Applies every key present in the file to `builder`.
    pub fn apply(&self, mut builder: SettingsBuilder) -> SettingsBuilder {
        for tool in Tool::ALL {
            if let Some(path) = self.tools.get(tool) {
                builder = builder.tool_path(tool, path);
            }
        }
        if let Some(search_path) = &self.search_path {
            builder = builder.search_path(search_path);
        }
        if let Some(dir) = &self.temp_dir {
            builder = builder.temp_dir(dir);
        }
        if let Some(keep) = self.keep_intermediates {
            builder = builder.keep_intermediates(keep);
        }
        if let Some(verify) = self.verify_local_sources {
            builder = builder.verify_local_sources(verify);
        }
        builder
    }
}

/// Default configuration file: `<config dir>/iconmaker/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iconmaker").join("config.toml"))
}

/// Parse a configuration file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::Cli(CliError::ExecutionFailed {
            command: "read_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    parse_config(&contents).map_err(|reason| {
        AppError::Cli(CliError::ExecutionFailed {
            command: "parse_config".to_string(),
            reason: format!("Failed to parse {}: {}", path.display(), reason),
        })
    })
}

fn parse_config(contents: &str) -> std::result::Result<FileConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the explicit configuration file, or the default one when it exists.
///
/// An explicit path that cannot be read is an error; a missing default file
/// is not.
pub fn discover(explicit: Option<&Path>) -> Result<Option<FileConfig>> {
    if let Some(path) = explicit {
        log::debug!("Loading configuration from {}", path.display());
        return load_config(path).map(Some);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            log::debug!("Loading configuration from {}", path.display());
            load_config(&path).map(Some)
        }
        _ => Ok(None),
    }
}
