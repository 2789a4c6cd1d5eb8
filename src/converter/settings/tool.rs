//! External tools the converter shells out to.

use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three external executables a conversion may need.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tool {
    /// Converts a single GIF into a PNG: `tool <gif> <png>`
    GifToPng,
    /// Packs PNGs into an ICO: `tool <out.ico> <png>...`
    PngToIco,
    /// Packs PNGs into an ICNS: `tool <out.icns> <png>...`
    PngToIcns,
}

impl Tool {
    /// All tools, in the order they are located.
    pub const ALL: [Tool; 3] = [Tool::PngToIco, Tool::PngToIcns, Tool::GifToPng];

    /// Executable basename searched for on the search path.
    pub fn binary_name(self) -> &'static str {
        match self {
            Tool::GifToPng => "convert",
            Tool::PngToIco => "png2ico",
            Tool::PngToIcns => "png2icns",
        }
    }

    /// Where the tool is expected to be installed.
    pub fn default_path(self) -> PathBuf {
        let dir = match self {
            Tool::GifToPng => "/opt/local/bin",
            Tool::PngToIco | Tool::PngToIcns => "/usr/local/bin",
        };
        Path::new(dir).join(self.binary_name())
    }

    /// Identifier used in configuration files and messages.
    pub fn key(self) -> &'static str {
        match self {
            Tool::GifToPng => "gif_to_png",
            Tool::PngToIco => "png_to_ico",
            Tool::PngToIcns => "png_to_icns",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
