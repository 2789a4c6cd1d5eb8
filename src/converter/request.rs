//! Conversion requests and their results.

use crate::converter::{
    error::{Error, ErrorExt, Result},
    format::TargetFormat,
    source::ImageSource,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// A validated conversion request: target format plus a non-empty, ordered source list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConversionRequest {
    format: TargetFormat,
    sources: Vec<ImageSource>,
}

impl ConversionRequest {
    /// Validates a raw format name and source list.
    ///
    /// The format is checked first, then the list, so an invalid format is
    /// reported even when the list is also empty.
    pub fn parse<S: AsRef<str>>(target_format: &str, image_sources: &[S]) -> Result<Self> {
        let format = target_format.parse::<TargetFormat>()?;
        let sources = image_sources
            .iter()
            .map(|s| ImageSource::parse(s.as_ref()))
            .collect();
        Self::new(format, sources)
    }

    /// Builds a request from already classified sources.
    pub fn new(format: TargetFormat, sources: Vec<ImageSource>) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self { format, sources })
    }

    pub fn format(&self) -> TargetFormat {
        self.format
    }

    pub fn sources(&self) -> &[ImageSource] {
        &self.sources
    }
}

/// A bundle written by a successful conversion.
///
/// The file at [`path`](Self::path) belongs to the caller: it is not removed
/// when this value drops. Use [`persist`](Self::persist) to move it somewhere
/// permanent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConvertedBundle {
    path: PathBuf,
    format: TargetFormat,
}

impl ConvertedBundle {
    pub(crate) fn new(path: PathBuf, format: TargetFormat) -> Self {
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> TargetFormat {
        self.format
    }

    /// Size of the bundle in bytes.
    pub async fn size(&self) -> Result<u64> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .fs_context("reading bundle metadata", &self.path)?;
        Ok(metadata.len())
    }

    /// Moves the bundle to `destination` and returns the new path.
    pub async fn persist(self, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let destination = destination.as_ref();
        fs::move_file(&self.path, destination).await?;
        log::info!("Moved {} to {}", self.path.display(), destination.display());
        Ok(destination.to_path_buf())
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
