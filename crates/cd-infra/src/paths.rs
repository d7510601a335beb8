//! Application data directory resolution.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "cohortdesk";

/// Per-user data directory for the token and settings files.
///
/// Falls back to a dot-directory under the current directory when the
/// platform reports no data dir (some containerized environments).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
}
