//! Main conversion orchestration.
//!
//! This module provides the [`Converter`] that resolves sources, normalizes
//! them to PNG and hands them to the packer.

use crate::converter::{
    error::{Error, Result},
    format::{SourceFormat, TargetFormat},
    normalize,
    request::{ConversionRequest, ConvertedBundle},
    settings::Settings,
    source::{ImageSource, verify_local},
    utils::{
        fs::{self, ScratchFiles},
        process,
    },
};
use std::path::PathBuf;

use super::tool_detection::ToolSet;

/// Icon bundle converter.
///
/// Holds the immutable [`Settings`] and [`ToolSet`] resolved at construction.
/// Each [`convert`](Self::convert) call is an independent, strictly
/// sequential pass, so one converter can serve concurrent callers.
///
/// # Examples
///
/// ```no_run
/// use iconmaker::converter::{Converter, SettingsBuilder};
///
/// # async fn example() -> iconmaker::converter::Result<()> {
/// let converter = Converter::new(SettingsBuilder::new().build()?)?;
/// let bundle = converter.convert("icns", &["icon.gif"]).await?;
/// let saved = bundle.persist("App.icns").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Converter {
    settings: Settings,
    tools: ToolSet,
    client: reqwest::Client,
}

impl Converter {
    /// Creates a converter, locating every external tool up front.
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] if any tool is missing; no converter is returned.
    pub fn new(settings: Settings) -> Result<Self> {
        let tools = ToolSet::locate(&settings)?;
        Self::with_tools(settings, tools)
    }

    /// Creates a converter from an already located [`ToolSet`].
    pub fn with_tools(settings: Settings, tools: ToolSet) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            settings,
            tools,
            client,
        })
    }

    /// Replaces the HTTP client used for remote sources.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    /// Converts `image_sources` into a bundle of `target_format` (`ico` or `icns`, any case).
    ///
    /// Sources beginning with `http:` or `https:` are downloaded; everything
    /// else is a local path. Bundle entries keep the order of `image_sources`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] / [`Error::EmptyInput`] before any I/O
    /// - [`Error::FetchFailed`] / [`Error::UnsupportedSourceFormat`] for remote sources
    /// - [`Error::NormalizationFailed`] if a GIF cannot be converted
    /// - [`Error::PackingFailed`] if the packer fails
    pub async fn convert<S: AsRef<str>>(
        &self,
        target_format: &str,
        image_sources: &[S],
    ) -> Result<ConvertedBundle> {
        let request = ConversionRequest::parse(target_format, image_sources)?;
        self.convert_request(&request).await
    }

    /// Converts a validated request.
    ///
    /// Downloads and the PNGs derived from them are removed before
    /// returning, on success and on failure, unless the settings keep them.
    /// PNGs derived from local GIFs stay next to their source.
    pub async fn convert_request(&self, request: &ConversionRequest) -> Result<ConvertedBundle> {
        let mut scratch = ScratchFiles::new(self.settings.keep_intermediates());
        let mut pngs = Vec::with_capacity(request.sources().len());

        for source in request.sources() {
            let png = self.prepare_source(source, &mut scratch).await?;
            pngs.push(png);
        }

        self.pack(request.format(), &pngs).await
    }

    /// Resolves one source to a local path and converts it to PNG if it is a GIF.
    async fn prepare_source(
        &self,
        source: &ImageSource,
        scratch: &mut ScratchFiles,
    ) -> Result<PathBuf> {
        let location = source
            .resolve(&self.client, self.settings.temp_dir(), scratch)
            .await?;

        if self.settings.verify_local_sources() && !source.is_remote() {
            verify_local(&location).await?;
        }

        match SourceFormat::from_path(&location) {
            Some(SourceFormat::Gif) => {
                // Only PNGs derived from downloads are private to this request;
                // a local GIF's PNG may be shared with other requests.
                if source.is_remote() {
                    scratch.track(normalize::derived_png_path(&location));
                }
                normalize::gif_to_png(self.tools.normalizer(), &location).await
            }
            Some(SourceFormat::Png) => Ok(location),
            None => {
                log::warn!(
                    "{} is neither .png nor .gif; passing it to the packer unchanged",
                    location.display()
                );
                Ok(location)
            }
        }
    }

    /// Runs `packer <output> <png>...` and keeps the output on success.
    async fn pack(&self, format: TargetFormat, pngs: &[PathBuf]) -> Result<ConvertedBundle> {
        let packer = self.tools.packer(format);
        let output = fs::output_path(self.settings.temp_dir(), format)?;

        log::debug!("image list: {:?}", pngs);

        let args = std::iter::once(output.as_os_str()).chain(pngs.iter().map(|p| p.as_os_str()));
        process::run_tool(packer, args)
            .await
            .map_err(|cause| Error::PackingFailed {
                output: output.to_path_buf(),
                cause,
            })?;

        let path = output.keep().map_err(|e| Error::Fs {
            context: "keeping output file",
            path: e.path.to_path_buf(),
            error: e.error,
        })?;

        log::info!("Created {} bundle: {}", format, path.display());

        Ok(ConvertedBundle::new(path, format))
    }
}
