//! GIF to PNG normalization.
//!
//! Packers only accept PNG input, so every GIF is run through the external
//! converter as `tool <gif> <png>` before packing.

use crate::converter::{
    error::{Error, Result},
    utils::process,
};
use std::path::{Path, PathBuf};

/// Path the PNG for `gif` is written to: same directory and stem, `png` suffix.
pub fn derived_png_path(gif: &Path) -> PathBuf {
    gif.with_extension("png")
}

/// Converts `gif` to PNG with `tool` and returns the PNG path.
///
/// An existing file at the derived path is overwritten. Lifetime of the PNG
/// is up to the caller.
pub async fn gif_to_png(tool: &Path, gif: &Path) -> Result<PathBuf> {
    let png = derived_png_path(gif);

    log::debug!("Converting gif to png: {} -> {}", gif.display(), png.display());

    process::run_tool(tool, [gif.as_os_str(), png.as_os_str()])
        .await
        .map_err(|cause| Error::NormalizationFailed {
            path: gif.to_path_buf(),
            cause,
        })?;

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ToolError;

    #[test]
    fn derived_path_swaps_suffix() {
        assert_eq!(
            derived_png_path(Path::new("/tmp/downloaded_ab12.gif")),
            PathBuf::from("/tmp/downloaded_ab12.png")
        );
        assert_eq!(
            derived_png_path(Path::new("dir.v2/icon.gif")),
            PathBuf::from("dir.v2/icon.png")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_conversion_names_the_gif() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("b.gif");
        std::fs::write(&gif, b"GIF89a").unwrap();

        let err = gif_to_png(Path::new("/bin/false"), &gif).await.unwrap_err();

        match err {
            Error::NormalizationFailed { path, cause } => {
                assert_eq!(path, gif);
                assert_eq!(cause.exit_code(), Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_converter_is_a_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("b.gif");

        let err = gif_to_png(&dir.path().join("no-such-convert"), &gif)
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::NormalizationFailed { cause: ToolError::Spawn { .. }, .. }),
            "got: {:?}",
            err
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn returns_the_derived_path() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("c.gif");
        std::fs::write(&gif, b"GIF89a").unwrap();

        let png = gif_to_png(Path::new("/bin/true"), &gif).await.unwrap();

        assert_eq!(png, dir.path().join("c.png"));
    }
}
