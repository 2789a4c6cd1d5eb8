//! File system utilities for conversions.
//!
//! Scratch files (downloads and the PNGs derived from them) live for one
//! conversion and are removed when the [`ScratchFiles`] guard drops. Output
//! bundles are created as [`TempPath`]s so a failed packer run leaves nothing
//! behind.

use crate::converter::error::{Error, ErrorExt, Result};
use crate::converter::format::TargetFormat;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// Prefix of downloaded source images.
pub const DOWNLOAD_PREFIX: &str = "downloaded_";

/// Prefix of generated bundles.
pub const OUTPUT_PREFIX: &str = "output_";

/// Intermediate files owned by a single conversion.
#[derive(Debug)]
pub struct ScratchFiles {
    paths: Vec<PathBuf>,
    keep: bool,
}

impl ScratchFiles {
    /// Creates an empty tracker. With `keep` set nothing is removed on drop.
    pub fn new(keep: bool) -> Self {
        Self {
            paths: Vec::new(),
            keep,
        }
    }

    /// Registers a file for removal when the conversion ends.
    pub fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Files currently tracked, in creation order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        if self.keep {
            for path in &self.paths {
                log::debug!("Keeping intermediate file {}", path.display());
            }
            return;
        }

        for path in self.paths.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => log::debug!("Removed intermediate file {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => log::warn!(
                    "Failed to remove intermediate file {}: {}",
                    path.display(),
                    e
                ),
            }
        }
    }
}

/// Creates a uniquely named empty file `<dir>/<prefix>XXXX.<extension>`.
///
/// The file is not deleted automatically; callers decide its lifetime.
pub fn create_named_file(dir: &Path, prefix: &str, extension: &str) -> Result<PathBuf> {
    let suffix = format!(".{}", extension);
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(&suffix)
        .tempfile_in(dir)
        .fs_context("creating temporary file", dir)?;

    temp.into_temp_path().keep().map_err(|e| Error::Fs {
        context: "persisting temporary file",
        path: e.path.to_path_buf(),
        error: e.error,
    })
}

/// Reserves a fresh `output_XXXX.<ext>` path for a bundle.
///
/// The file is removed when the returned [`TempPath`] drops unless it is kept.
pub fn output_path(dir: &Path, format: TargetFormat) -> Result<TempPath> {
    let suffix = format!(".{}", format.extension());
    let temp = tempfile::Builder::new()
        .prefix(OUTPUT_PREFIX)
        .suffix(&suffix)
        .tempfile_in(dir)
        .fs_context("creating output file", dir)?;
    Ok(temp.into_temp_path())
}

/// Moves a file, copying across filesystems when a rename is not possible.
///
/// Parent directories of `to` are created as needed.
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating destination directory", parent)?;
    }

    match tokio::fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tokio::fs::copy(from, to)
                .await
                .fs_context("copying bundle", to)?;
            tokio::fs::remove_file(from)
                .await
                .fs_context("removing moved bundle", from)?;
            Ok(())
        }
        Err(e) => Err(e).fs_context("moving bundle", to),
    }
}
