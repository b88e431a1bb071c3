//! Control-file run gate
//!
//! An external scheduler triggers every run; this file is the operator's
//! kill switch between scheduler edits. Content `true` (trimmed,
//! case-insensitive) means run; anything else means skip. A missing or
//! unreadable file means run, so a fresh checkout works without setup.

use std::path::Path;

use tracing::debug;

/// Whether this invocation should proceed
pub async fn should_run(control_file: &Path) -> bool {
    match tokio::fs::read_to_string(control_file).await {
        Ok(content) => {
            let enabled = content.trim().eq_ignore_ascii_case("true");
            debug!(file = %control_file.display(), enabled, "run gate evaluated");
            enabled
        }
        Err(_) => {
            debug!(file = %control_file.display(), "no control file, running");
            true
        }
    }
}
