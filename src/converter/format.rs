//! Image and bundle formats understood by the converter.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::ImageFormat;

use super::error::Error;

/// Icon bundle produced by a packer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TargetFormat {
    /// Windows `.ico`
    Ico,
    /// macOS `.icns`
    Icns,
}

impl TargetFormat {
    /// All supported target formats.
    pub const ALL: [TargetFormat; 2] = [TargetFormat::Ico, TargetFormat::Icns];

    /// File extension of the bundle, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Ico => "ico",
            TargetFormat::Icns => "icns",
        }
    }
}

impl FromStr for TargetFormat {
    type Err = Error;

    /// Parses `ico` or `icns`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ico" => Ok(TargetFormat::Ico),
            "icns" => Ok(TargetFormat::Icns),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Pixel format accepted as conversion input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SourceFormat {
    Gif,
    Png,
}

impl SourceFormat {
    /// Classifies a path by its literal filename suffix.
    ///
    /// Only lowercase `.gif` and `.png` match; anything else (including
    /// `.GIF`) is handed to the packer unchanged.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "gif" => Some(SourceFormat::Gif),
            "png" => Some(SourceFormat::Png),
            _ => None,
        }
    }

    /// Maps a detected image format onto the supported source formats.
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Gif => Some(SourceFormat::Gif),
            ImageFormat::Png => Some(SourceFormat::Png),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Gif => "gif",
            SourceFormat::Png => "png",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            SourceFormat::Gif => ImageFormat::Gif,
            SourceFormat::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Lowercase name of a detected image format, for error messages.
pub(crate) fn describe_image_format(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map(|ext| ext.to_string())
        .unwrap_or_else(|| format!("{:?}", format).to_ascii_lowercase())
}
