//! HTTP utilities for fetching remote source images.

use crate::converter::error::{Error, Result};

/// Downloads `url` and returns the response body.
///
/// Transport errors and non-2xx statuses are reported as
/// [`Error::FetchFailed`] with the reqwest error as the source.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    log::debug!("Downloading {}", url);

    let fetch_failed = |reason: String, e: reqwest::Error| Error::FetchFailed {
        url: url.to_string(),
        reason,
        source: Some(e),
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_failed("request failed".into(), e))?;

    let status = response.status();
    let response = response
        .error_for_status()
        .map_err(|e| fetch_failed(format!("server returned {}", status), e))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_failed("failed to read response".into(), e))?;

    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);

    Ok(bytes.to_vec())
}
