//! External tool execution.

use crate::converter::error::ToolError;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

/// Run `tool` with `args` and wait for it to exit.
///
/// The tool's stdout is logged at debug level. A non-zero exit becomes
/// [`ToolError::Exit`] carrying the trimmed stderr.
pub async fn run_tool<I, S>(tool: &Path, args: I) -> Result<(), ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = tokio::process::Command::new(tool);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    log::debug!("Running {:?}", command.as_std());

    let output = command.output().await.map_err(|source| ToolError::Spawn {
        tool: tool.to_path_buf(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        log::debug!("{} stdout: {}", tool.display(), stdout.trim());
    }

    if !output.status.success() {
        return Err(ToolError::Exit {
            tool: tool.to_path_buf(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
