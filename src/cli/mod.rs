//! Command line interface for iconmaker.
//!
//! Parses arguments, layers configuration (defaults, config file, flags),
//! runs one conversion and prints the bundle path.

mod args;

pub use args::Args;

use crate::config::{self, FileConfig};
use crate::converter::{Converter, Settings, SettingsBuilder, Tool};
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Execute already parsed arguments
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let file_config = config::discover(args.config.as_deref())?;
    let settings = build_settings(&args, file_config.as_ref())?;
    let converter = Converter::new(settings)?;

    if args.check_tools {
        for tool in Tool::ALL {
            println!("{}: {}", tool, converter.tools().path(tool).display());
        }
        return Ok(0);
    }

    let format = args.format.as_deref().unwrap_or_default();
    let bundle = converter.convert(format, &args.sources).await?;
    let size = bundle.size().await?;
    log::info!("{} bundle is {} bytes", bundle.format(), size);

    let path = match &args.output {
        Some(destination) => bundle.persist(destination).await?,
        None => bundle.into_path(),
    };

    println!("{}", path.display());
    Ok(0)
}

/// Layer settings: built-in defaults, then the config file, then flags and environment.
pub fn build_settings(args: &Args, file_config: Option<&FileConfig>) -> Result<Settings> {
    let mut builder = SettingsBuilder::new();

    if let Some(file_config) = file_config {
        builder = file_config.apply(builder);
    }

    let tool_flags = [
        (Tool::GifToPng, &args.gif_to_png),
        (Tool::PngToIco, &args.png_to_ico),
        (Tool::PngToIcns, &args.png_to_icns),
    ];
    for (tool, path) in tool_flags {
        if let Some(path) = path {
            builder = builder.tool_path(tool, path);
        }
    }

    if let Some(search_path) = &args.search_path {
        builder = builder.search_path(search_path.clone());
    }
    if let Some(dir) = &args.temp_dir {
        builder = builder.temp_dir(dir);
    }
    if let Some(keep) = args.keep_intermediates() {
        builder = builder.keep_intermediates(keep);
    }
    if let Some(verify) = args.verify_local_sources() {
        builder = builder.verify_local_sources(verify);
    }

    Ok(builder.build()?)
}
