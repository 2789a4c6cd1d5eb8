//! Shared helpers for integration tests
//!
//! Fake external tools are tiny shell scripts that append their argv to a log
//! file, so tests can assert exactly how each tool was invoked.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use iconmaker::converter::{Converter, Settings, SettingsBuilder, Tool};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tempfile::TempDir;

/// Packer that writes a small marker bundle to its first argument.
pub const PACKER_OK: &str = "printf 'bundle' > \"$1\"\n";

/// GIF converter that copies its input to the derived PNG path.
pub const CONVERT_OK: &str = "cp \"$1\" \"$2\"\n";

/// Tool that fails like a converter rejecting its input.
pub const FAIL: &str = "echo \"corrupt image\" >&2\nexit 1\n";

/// Fake tool installation plus a scratch directory for the converter.
pub struct FakeTools {
    pub bin: TempDir,
    pub empty_path: TempDir,
    pub scratch: TempDir,
    pub log: PathBuf,
}

impl FakeTools {
    /// Installs working `png2ico`, `png2icns` and `convert` scripts.
    pub fn new() -> Self {
        let tools = Self::empty();
        tools.install(Tool::PngToIco, PACKER_OK);
        tools.install(Tool::PngToIcns, PACKER_OK);
        tools.install(Tool::GifToPng, CONVERT_OK);
        tools
    }

    /// No tools installed yet.
    pub fn empty() -> Self {
        let bin = tempfile::tempdir().expect("Failed to create bin dir");
        let log = bin.path().join("calls.log");
        Self {
            bin,
            empty_path: tempfile::tempdir().expect("Failed to create empty dir"),
            scratch: tempfile::tempdir().expect("Failed to create scratch dir"),
            log,
        }
    }

    /// Writes an executable script for `tool` that logs its arguments then runs `body`.
    pub fn install(&self, tool: Tool, body: &str) -> PathBuf {
        let path = self.tool_path(tool);
        let script = format!(
            "#!/bin/sh\n\
             LOG='{log}'\n\
             printf '%s' '{name}' >> \"$LOG\"\n\
             for a in \"$@\"; do printf '\\t%s' \"$a\" >> \"$LOG\"; done\n\
             printf '\\n' >> \"$LOG\"\n\
             {body}",
            log = self.log.display(),
            name = tool.binary_name(),
            body = body,
        );
        std::fs::write(&path, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake tool");
        path
    }

    pub fn tool_path(&self, tool: Tool) -> PathBuf {
        self.bin.path().join(tool.binary_name())
    }

    /// Builder pointing every tool at this installation and PATH at an empty directory.
    pub fn builder(&self) -> SettingsBuilder {
        let mut builder = SettingsBuilder::new()
            .search_path(self.empty_path.path())
            .temp_dir(self.scratch.path());
        for tool in Tool::ALL {
            builder = builder.tool_path(tool, self.tool_path(tool));
        }
        builder
    }

    pub fn settings(&self) -> Settings {
        self.builder().build().expect("Failed to build settings")
    }

    pub fn converter(&self) -> Converter {
        converter_for(self.settings())
    }

    /// Every logged invocation: tool name followed by its arguments.
    pub fn calls(&self) -> Vec<Vec<String>> {
        match std::fs::read_to_string(&self.log) {
            Ok(contents) => contents
                .lines()
                .map(|line| line.split('\t').map(String::from).collect())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// File names currently in the scratch directory, sorted.
    pub fn scratch_files(&self) -> Vec<String> {
        list_dir(self.scratch.path())
    }
}

/// Converter whose HTTP client ignores proxy settings, for the local test server.
pub fn converter_for(settings: Settings) -> Converter {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    Converter::new(settings)
        .expect("Failed to locate fake tools")
        .with_http_client(client)
}

pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Encodes a small image in `format`.
pub fn image_bytes(format: ImageFormat) -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, image::Rgba([200, 40, 40, 255])))
        .write_to(&mut bytes, format)
        .expect("Failed to encode image");
    bytes.into_inner()
}

/// Writes a small image to `dir/name`.
pub fn write_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, image_bytes(format)).expect("Failed to write image");
    path
}

/// Serves exactly one HTTP response and returns the URL for `path`.
pub fn serve_once(status_line: &'static str, body: Vec<u8>, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let port = listener.local_addr().expect("No local addr").port();

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let header = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        );
        let _ = stream.write_all(header.as_bytes());
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    });

    format!("http://127.0.0.1:{}/{}", port, path.trim_start_matches('/'))
}
