//! Image source classification and resolution.

mod fetch;

use crate::converter::{
    error::{Error, ErrorExt, Result},
    format::{SourceFormat, describe_image_format},
    utils::fs::ScratchFiles,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a source image comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImageSource {
    /// A file on the local filesystem
    Local(PathBuf),
    /// An `http:` or `https:` URL
    Remote(String),
}

impl ImageSource {
    /// Classifies an entry by prefix: `http:` and `https:` are remote, everything else is a path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http:") || source.starts_with("https:") {
            Self::Remote(source.to_string())
        } else {
            Self::Local(PathBuf::from(source))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Produces a local path for this source, downloading remote images into `temp_dir`.
    ///
    /// Downloaded files are registered with `scratch`.
    pub async fn resolve(
        &self,
        client: &reqwest::Client,
        temp_dir: &Path,
        scratch: &mut ScratchFiles,
    ) -> Result<PathBuf> {
        match self {
            Self::Local(path) => Ok(path.clone()),
            Self::Remote(url) => fetch::fetch_image(client, url, temp_dir, scratch).await,
        }
    }
}

impl From<&str> for ImageSource {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// Checks a local file's content against its suffix.
///
/// The content must be GIF or PNG, and if the suffix names one of those
/// formats the content must match it.
pub async fn verify_local(path: &Path) -> Result<SourceFormat> {
    let owned = path.to_path_buf();
    let detected = tokio::task::spawn_blocking(move || {
        image::ImageReader::open(&owned)
            .fs_context("opening source image", &owned)?
            .with_guessed_format()
            .fs_context("reading source image", &owned)
            .map(|reader| reader.format())
    })
    .await??;

    let unsupported = |detected: String| Error::UnsupportedSourceFormat {
        origin: path.display().to_string(),
        detected,
    };

    let format = match detected {
        Some(format) => SourceFormat::from_image_format(format)
            .ok_or_else(|| unsupported(describe_image_format(format)))?,
        None => return Err(unsupported("unrecognized data".to_string())),
    };

    match SourceFormat::from_path(path) {
        Some(claimed) if claimed != format => Err(unsupported(format!(
            "{} data with a .{} suffix",
            format, claimed
        ))),
        _ => Ok(format),
    }
}
