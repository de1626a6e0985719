use std::path::Path;
use std::process::Command;

use crate::error::GenError;

/// Environment variable overriding the `gofmt` binary
pub const GOFMT_BIN_ENV: &str = "GIN_ROUTEGEN_GOFMT_BIN";

/// Run `gofmt -w` on a generated file.
///
/// # Errors
///
/// Returns [`GenError::Format`] if `gofmt` cannot be started or exits
/// unsuccessfully.
pub fn format_go_file(file: &Path) -> Result<(), GenError> {
    // Allow tests to override the gofmt binary path without mutating PATH
    let gofmt_bin = std::env::var(GOFMT_BIN_ENV).unwrap_or_else(|_| "gofmt".to_string());

    let status = Command::new(&gofmt_bin)
        .arg("-w")
        .arg(file)
        .status()
        .map_err(|e| GenError::Format(format!("could not run {gofmt_bin}: {e}")))?;
    if !status.success() {
        return Err(GenError::Format(format!(
            "{gofmt_bin} exited with {status} for {}",
            file.display()
        )));
    }
    tracing::info!(path = %file.display(), "Formatted generated file");
    Ok(())
}
