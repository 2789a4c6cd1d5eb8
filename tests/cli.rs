//! Command line behaviour: exit codes, output and error reporting.

#![cfg(unix)]

mod common;

use assert_cmd::Command;
use common::{FakeTools, write_image};
use iconmaker::converter::Tool;
use image::ImageFormat;
use predicates::prelude::*;
use tempfile::TempDir;

/// `iconmaker` wired to the fake tools, with config discovery pointed at an empty home.
fn iconmaker(tools: &FakeTools, home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("iconmaker").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("ICONMAKER_CONFIG")
        .env("ICONMAKER_GIF_TO_PNG", tools.tool_path(Tool::GifToPng))
        .env("ICONMAKER_PNG_TO_ICO", tools.tool_path(Tool::PngToIco))
        .env("ICONMAKER_PNG_TO_ICNS", tools.tool_path(Tool::PngToIcns))
        .env("ICONMAKER_SEARCH_PATH", tools.empty_path.path())
        .env("ICONMAKER_TEMP_DIR", tools.scratch.path());
    cmd
}

#[test]
fn writes_bundle_to_output_path() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();
    let src = tempfile::tempdir().unwrap();
    let a = write_image(src.path(), "a.png", ImageFormat::Png);
    let b = write_image(src.path(), "b.gif", ImageFormat::Gif);
    let out = src.path().join("dist/App.icns");

    iconmaker(&tools, &home)
        .args(["--format", "icns"])
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(out.display().to_string()));

    assert_eq!(std::fs::read(&out).unwrap(), b"bundle");
    assert!(tools.scratch_files().is_empty());
}

#[test]
fn prints_temporary_bundle_path_without_output() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();
    let src = tempfile::tempdir().unwrap();
    let a = write_image(src.path(), "a.png", ImageFormat::Png);

    let assert = iconmaker(&tools, &home)
        .args(["-f", "ICO"])
        .arg(&a)
        .assert()
        .success();

    let printed = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let printed = std::path::Path::new(printed.trim());
    assert!(printed.starts_with(tools.scratch.path()));
    assert_eq!(printed.extension().and_then(|e| e.to_str()), Some("ico"));
    assert!(printed.exists());
}

#[test]
fn invalid_format_exits_with_two() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();

    iconmaker(&tools, &home)
        .args(["--format", "bmp", "a.png"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid target format `bmp`"))
        .stderr(predicate::str::contains("--format ico"));

    assert!(tools.calls().is_empty());
}

#[test]
fn empty_source_list_exits_with_two() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();

    iconmaker(&tools, &home)
        .args(["--format", "ico"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input list cannot be empty."));
}

#[test]
fn missing_tool_is_reported_with_a_hint() {
    let tools = FakeTools::empty();
    tools.install(Tool::PngToIcns, common::PACKER_OK);
    tools.install(Tool::GifToPng, common::CONVERT_OK);
    let home = tempfile::tempdir().unwrap();

    iconmaker(&tools, &home)
        .args(["--format", "ico", "a.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("png2ico"))
        .stderr(predicate::str::contains("was not found"))
        .stderr(predicate::str::contains("--png-to-ico"));
}

#[test]
fn tool_failure_shows_the_cause() {
    let tools = FakeTools::new();
    tools.install(Tool::GifToPng, common::FAIL);
    let home = tempfile::tempdir().unwrap();
    let src = tempfile::tempdir().unwrap();
    let gif = write_image(src.path(), "broken.gif", ImageFormat::Gif);

    iconmaker(&tools, &home)
        .args(["--format", "icns"])
        .arg(&gif)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GIF to PNG conversion failed"))
        .stderr(predicate::str::contains("caused by:"))
        .stderr(predicate::str::contains("corrupt image"));
}

#[test]
fn check_tools_lists_resolved_paths() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();

    let assert = iconmaker(&tools, &home).arg("--check-tools").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let expected: Vec<String> = Tool::ALL
        .iter()
        .map(|tool| format!("{}: {}", tool, tools.tool_path(*tool).display()))
        .collect();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn config_file_supplies_tool_locations() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();
    let src = tempfile::tempdir().unwrap();
    let a = write_image(src.path(), "a.png", ImageFormat::Png);
    let config = src.path().join("iconmaker.toml");
    std::fs::write(
        &config,
        format!(
            "[tools]\npng_to_ico = \"{}\"\n",
            tools.tool_path(Tool::PngToIco).display()
        ),
    )
    .unwrap();

    iconmaker(&tools, &home)
        .env_remove("ICONMAKER_PNG_TO_ICO")
        .arg("--config")
        .arg(&config)
        .args(["-f", "ico"])
        .arg(&a)
        .assert()
        .success();

    assert_eq!(tools.calls()[0][0], "png2ico");
}

#[test]
fn unknown_config_keys_are_rejected() {
    let tools = FakeTools::new();
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "colour = \"blue\"\n").unwrap();

    iconmaker(&tools, &home)
        .arg("--config")
        .arg(&config)
        .args(["-f", "ico", "a.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse_config"));
}
