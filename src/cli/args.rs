//! Command line argument parsing and validation.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Builds ICO and ICNS icon bundles from PNG and GIF images
#[derive(Parser, Debug)]
#[command(
    name = "iconmaker",
    version,
    about = "Builds ICO and ICNS icon bundles from PNG and GIF images",
    long_about = "Builds a multi-resolution ICO or ICNS bundle from local files or http(s) URLs.

GIF sources are converted to PNG first; the PNGs are then packed in the order given.

Usage:
  iconmaker --format ico icon-16.png icon-32.png
  iconmaker --format icns https://example.com/icon.gif --output App.icns
  iconmaker --check-tools

Required tools (looked up at their default location, then on PATH):
  convert   /opt/local/bin/convert     GIF -> PNG
  png2ico   /usr/local/bin/png2ico     PNG(s) -> ICO
  png2icns  /usr/local/bin/png2icns    PNG(s) -> ICNS

Exit code 0 = bundle written; its path is printed on stdout."
)]
pub struct Args {
    /// Target bundle format: ico or icns (case-insensitive)
    #[arg(short, long, value_name = "FORMAT", required_unless_present = "check_tools")]
    pub format: Option<String>,

    /// Source images: local paths or http(s) URLs, in bundle order
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<String>,

    /// Move the finished bundle to this path
    ///
    /// Parent directories are created as needed. Without this flag the bundle
    /// stays in the temporary directory.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long, value_name = "PATH", env = "ICONMAKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default location of the GIF to PNG converter
    #[arg(long, value_name = "PATH", env = "ICONMAKER_GIF_TO_PNG")]
    pub gif_to_png: Option<PathBuf>,

    /// Default location of the ICO packer
    #[arg(long, value_name = "PATH", env = "ICONMAKER_PNG_TO_ICO")]
    pub png_to_ico: Option<PathBuf>,

    /// Default location of the ICNS packer
    #[arg(long, value_name = "PATH", env = "ICONMAKER_PNG_TO_ICNS")]
    pub png_to_icns: Option<PathBuf>,

    /// Directories searched for tools missing at their default location (PATH syntax)
    #[arg(long, value_name = "DIRS", env = "ICONMAKER_SEARCH_PATH")]
    pub search_path: Option<OsString>,

    /// Directory for downloads and generated bundles
    #[arg(long, value_name = "DIR", env = "ICONMAKER_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Keep downloaded and converted intermediate images
    #[arg(long, overrides_with = "no_keep_intermediates")]
    pub keep_intermediates: bool,

    /// Remove intermediate images even if the config file keeps them
    #[arg(long, overrides_with = "keep_intermediates")]
    pub no_keep_intermediates: bool,

    /// Check local sources by content instead of by file extension
    #[arg(long, overrides_with = "no_verify_local_sources")]
    pub verify_local_sources: bool,

    /// Trust local file extensions even if the config file enables content checks
    #[arg(long, overrides_with = "verify_local_sources")]
    pub no_verify_local_sources: bool,

    /// Print the resolved tool locations and exit
    #[arg(long, conflicts_with_all = ["output", "sources"])]
    pub check_tools: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `Some` when `--keep-intermediates` or its negation was given; the last one wins.
    pub fn keep_intermediates(&self) -> Option<bool> {
        flag_pair(self.keep_intermediates, self.no_keep_intermediates)
    }

    /// `Some` when `--verify-local-sources` or its negation was given; the last one wins.
    pub fn verify_local_sources(&self) -> Option<bool> {
        flag_pair(self.verify_local_sources, self.no_verify_local_sources)
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(format!(
                    "Output path {} is a directory; give a file path",
                    output.display()
                ));
            }
        }

        Ok(())
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
