//! Remote source download and validation.

use crate::converter::{
    error::{Error, Result},
    format::{SourceFormat, describe_image_format},
    utils::{
        fs::{DOWNLOAD_PREFIX, ScratchFiles, create_named_file},
        http,
    },
};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Downloads `url`, checks it decodes as GIF or PNG, and saves it as
/// `downloaded_XXXX.<gif|png>` in `temp_dir`.
pub(super) async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
    temp_dir: &Path,
    scratch: &mut ScratchFiles,
) -> Result<PathBuf> {
    let body = http::download(client, url).await?;

    let origin = url.to_string();
    let (format, image) = tokio::task::spawn_blocking(move || decode_supported(&origin, &body)).await??;

    let saved = create_named_file(temp_dir, DOWNLOAD_PREFIX, format.extension())?;
    scratch.track(saved.clone());

    let target = saved.clone();
    tokio::task::spawn_blocking(move || image.save_with_format(&target, format.image_format()))
        .await??;

    log::debug!("Saved {} as {} ({})", url, saved.display(), format);

    Ok(saved)
}

/// Detects the body's format and decodes it, rejecting anything but GIF and PNG.
fn decode_supported(url: &str, body: &[u8]) -> Result<(SourceFormat, DynamicImage)> {
    let unsupported = |detected: String| Error::UnsupportedSourceFormat {
        origin: url.to_string(),
        detected,
    };

    let detected = image::guess_format(body).map_err(|_| unsupported("unrecognized data".into()))?;
    let format = SourceFormat::from_image_format(detected)
        .ok_or_else(|| unsupported(describe_image_format(detected)))?;

    let image = image::load_from_memory_with_format(body, detected).map_err(|e| {
        Error::FetchFailed {
            url: url.to_string(),
            reason: format!("response is not a valid {} image: {}", format, e),
            source: None,
        }
    })?;

    Ok((format, image))
}
